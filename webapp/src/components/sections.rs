use dioxus::prelude::*;

use crate::components::icons::IconExternalLink;
use crate::content;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    kicker: &'static str,
    title: &'static str,
    subtitle: Option<&'static str>,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div { class: "section-head",
            p { class: "section-kicker", "{props.kicker}" }
            h2 { class: "section-title", "{props.title}" }
            match props.subtitle {
                Some(subtitle) => rsx! {
                    p { class: "section-subtitle", "{subtitle}" }
                },
                None => rsx! {},
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let aux_scene = content::aux_scene_url();

    rsx! {
        section { class: "about", id: "about",
            div { class: "container",
                SectionHeader {
                    kicker: "About",
                    title: "A bit about me",
                    subtitle: "Developer focused on clean code, DX, and product impact",
                }

                div { class: "about-grid",
                    for card in content::ABOUT_CARDS.iter() {
                        div { key: "{card.title}", class: "card",
                            h3 { class: "card-title", "{card.title}" }
                            p { style: "color: var(--text-secondary);", "{card.body}" }
                        }
                    }
                }

                // optional second scene, left out entirely when unconfigured
                if !aux_scene.is_empty() {
                    div { class: "aux-scene",
                        iframe {
                            class: "scene-frame",
                            src: aux_scene,
                            title: "Decorative 3D scene",
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { class: "skills", id: "skills",
            div { class: "container",
                SectionHeader { kicker: "Skills", title: "Technologies I work with" }

                div { class: "skills-grid",
                    for group in content::SKILL_GROUPS.iter() {
                        div { key: "{group.title}", class: "card",
                            h3 { class: "card-title", "{group.title}" }
                            div { class: "skill-chips",
                                for skill in group.skills.iter() {
                                    span { key: "{skill}", class: "chip", "{skill}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { class: "projects", id: "projects",
            div { class: "container",
                SectionHeader {
                    kicker: "Projects",
                    title: "Selected work",
                    subtitle: "A snapshot of things I've built and shipped",
                }

                div { class: "projects-grid",
                    for project in content::PROJECTS.iter() {
                        a {
                            key: "{project.title}",
                            class: "card project-card",
                            href: "{project.link}",
                            target: if project.link.starts_with("http") { "_blank" },
                            rel: if project.link.starts_with("http") { "noreferrer" },
                            div { class: "project-head",
                                h3 { class: "card-title", "{project.title}" }
                                IconExternalLink { size: 18 }
                            }
                            p { class: "project-desc", "{project.description}" }
                            div { class: "project-stack",
                                for tech in project.stack.iter() {
                                    span { key: "{tech}", class: "chip", "{tech}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
