use dioxus::prelude::*;

use api::contact::send_contact;
use common::contact::{ContactController, ContactField, SubmitStatus};

use crate::components::icons::{IconGithub, IconLinkedin, IconMail};
use crate::components::sections::SectionHeader;
use crate::content::{CONTACT_BLURB, CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL, RESUME_PATH};

#[component]
pub fn ContactSection() -> Element {
    let mut controller = use_signal(ContactController::new);

    // the guard inside begin_submit is what keeps a double click from
    // sending two requests; the submit control is also disabled below
    let handle_submit = move |_| async move {
        let Some(req) = controller.with_mut(|c| c.begin_submit()) else {
            return;
        };

        let result = send_contact(&req).await;

        controller.with_mut(|c| c.finish_submit(result));
    };

    let draft = controller.read().draft().clone();
    let status = controller.read().status().clone();
    let submitting = controller.read().is_submitting();

    rsx! {
        section { class: "contact", id: "contact",
            div { class: "container",
                SectionHeader {
                    kicker: "Contact",
                    title: "Let's build something great",
                    subtitle: "I'm available for freelance and full-time opportunities",
                }

                div { class: "contact-grid",
                    form { class: "card", onsubmit: handle_submit,
                        match &status {
                            SubmitStatus::Success { id } => rsx! {
                                span { class: "form-status success", "Message sent. Reference: {id}" }
                            },
                            SubmitStatus::Failure { message } => rsx! {
                                span { class: "form-status failure", "{message}" }
                            },
                            SubmitStatus::Idle => rsx! {},
                        }

                        div { class: "form-group",
                            label { class: "form-label", "Name" }
                            input {
                                class: "form-input",
                                r#type: "text",
                                required: true,
                                value: "{draft.name}",
                                oninput: move |evt| {
                                    controller.with_mut(|c| c.update_field(ContactField::Name, evt.value()))
                                },
                                placeholder: "Your name",
                            }
                        }

                        div { class: "form-group",
                            label { class: "form-label", "Email" }
                            input {
                                class: "form-input",
                                r#type: "email",
                                required: true,
                                value: "{draft.email}",
                                oninput: move |evt| {
                                    controller.with_mut(|c| c.update_field(ContactField::Email, evt.value()))
                                },
                                placeholder: "you@example.com",
                            }
                        }

                        div { class: "form-group",
                            label { class: "form-label", "Message" }
                            textarea {
                                class: "form-textarea",
                                rows: 5,
                                required: true,
                                value: "{draft.message}",
                                oninput: move |evt| {
                                    controller.with_mut(|c| c.update_field(ContactField::Message, evt.value()))
                                },
                                placeholder: "What can I help you build?",
                            }
                        }

                        button {
                            class: "btn btn-primary btn-block",
                            r#type: "submit",
                            disabled: submitting,
                            if submitting {
                                "Sending..."
                            } else {
                                "Send Message"
                            }
                        }
                    }

                    div { class: "contact-aside",
                        a {
                            class: "btn btn-primary",
                            href: "mailto:{CONTACT_EMAIL}",
                            IconMail { size: 18 }
                            "Email Me"
                        }
                        a {
                            class: "btn btn-secondary",
                            href: LINKEDIN_URL,
                            target: "_blank",
                            rel: "noreferrer",
                            IconLinkedin { size: 18 }
                            "LinkedIn"
                        }
                        a {
                            class: "btn btn-secondary",
                            href: GITHUB_URL,
                            target: "_blank",
                            rel: "noreferrer",
                            IconGithub { size: 18 }
                            "GitHub"
                        }
                        a {
                            class: "btn btn-secondary",
                            href: RESUME_PATH,
                            download: "resume.pdf",
                            "Download Resume"
                        }
                        p { class: "contact-blurb", "{CONTACT_BLURB}" }
                    }
                }
            }
        }
    }
}
