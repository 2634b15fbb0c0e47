use dioxus::prelude::*;
use gloo_events::EventListener;

use crate::components::icons::{IconArrowRight, IconCode, IconMail, IconZap};
use crate::content::{
    hero_scene_url, HERO_AVAILABILITY, HERO_STACK_LINE, ROLE_BADGE, SITE_NAME, TAGLINE,
};

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    on_scene_ready: EventHandler<()>,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    // keeps the load listener alive until the component goes away, so a
    // slow scene cannot fire into a dead scope
    let mut load_listener = use_signal(|| None::<EventListener>);

    let scene = hero_scene_url();
    let on_scene_ready = props.on_scene_ready;

    rsx! {
        section { class: "hero", id: "home",
            div { class: "container",
                div { class: "hero-grid",
                    div { class: "hero-copy",
                        span { class: "badge",
                            IconZap { size: 14 }
                            "{ROLE_BADGE}"
                        }
                        h1 { class: "hero-title",
                            "Hi, I'm "
                            span { class: "hero-accent", "{SITE_NAME}" }
                        }
                        p { class: "hero-tagline", "{TAGLINE}" }

                        div { class: "hero-actions",
                            a { class: "btn btn-primary", href: "#projects",
                                "View Projects"
                                IconArrowRight { size: 18 }
                            }
                            a { class: "btn btn-secondary", href: "#contact",
                                "Contact Me"
                                IconMail { size: 18 }
                            }
                        }

                        div { class: "hero-meta",
                            span { style: "display: inline-flex; align-items: center; gap: var(--space-2);",
                                IconCode { size: 16 }
                                "{HERO_STACK_LINE}"
                            }
                            span { class: "divider" }
                            span { "{HERO_AVAILABILITY}" }
                        }
                    }

                    div { class: "hero-scene",
                        iframe {
                            class: "scene-frame",
                            src: scene,
                            title: "Interactive 3D scene",
                            onmounted: move |event| {
                                let data = event.data();
                                if let Some(el) = data.downcast::<web_sys::Element>() {
                                    let listener = EventListener::once(el, "load", move |_| {
                                        on_scene_ready.call(());
                                    });
                                    load_listener.set(Some(listener));
                                }
                            },
                        }
                        div { class: "scene-fade" }
                    }
                }
            }
        }
    }
}
