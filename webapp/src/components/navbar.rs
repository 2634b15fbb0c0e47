use dioxus::prelude::*;

use common::theme::Theme;

use crate::components::icons::{
    IconClose, IconGithub, IconLinkedin, IconMail, IconMenu, IconMoon, IconSun,
};
use crate::content::{BRAND_NAME, BRAND_SUFFIX, CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL, NAV_ITEMS};
use crate::theme;

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    chrome_active: bool,
    progress_percent: f64,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut menu_open = use_signal(|| false);

    let theme = theme::active_theme();
    let toggle_label = theme.toggle_label();

    let progress = props.progress_percent;

    rsx! {
        header { class: if props.chrome_active { "site-header chrome" } else { "site-header" },
            nav { class: "nav-inner",
                a { class: "brand", href: "#home",
                    span { "{BRAND_NAME}" }
                    span { class: "brand-suffix", "{BRAND_SUFFIX}" }
                }

                div { class: "nav-links",
                    for item in NAV_ITEMS.iter() {
                        a {
                            key: "{item.anchor}",
                            class: "nav-link",
                            href: "{item.anchor}",
                            "{item.label}"
                        }
                    }
                }

                div { class: "nav-actions",
                    a {
                        class: "icon-button icon-link",
                        href: "mailto:{CONTACT_EMAIL}",
                        aria_label: "Email",
                        IconMail { size: 18 }
                    }
                    a {
                        class: "icon-button icon-link",
                        href: GITHUB_URL,
                        target: "_blank",
                        rel: "noreferrer",
                        aria_label: "GitHub",
                        IconGithub { size: 18 }
                    }
                    a {
                        class: "icon-button icon-link",
                        href: LINKEDIN_URL,
                        target: "_blank",
                        rel: "noreferrer",
                        aria_label: "LinkedIn",
                        IconLinkedin { size: 18 }
                    }

                    button {
                        class: "icon-button",
                        aria_label: toggle_label,
                        onclick: move |_| theme::toggle_theme(),
                        if theme == Theme::Light {
                            IconMoon { size: 18 }
                        } else {
                            IconSun { size: 18 }
                        }
                    }

                    button {
                        class: "icon-button menu-toggle",
                        aria_label: "Menu",
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(!open);
                        },
                        if menu_open() {
                            IconClose { size: 20 }
                        } else {
                            IconMenu { size: 20 }
                        }
                    }
                }
            }

            div { class: "scroll-progress", style: "width: {progress}%;" }

            if menu_open() {
                div { class: "mobile-menu",
                    for item in NAV_ITEMS.iter() {
                        a {
                            key: "{item.anchor}",
                            href: "{item.anchor}",
                            onclick: move |_| menu_open.set(false),
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
