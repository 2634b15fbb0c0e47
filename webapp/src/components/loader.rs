use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct LoadingOverlayProps {
    visible: bool,
}

// full-viewport startup overlay; it stays mounted after dismissal so the
// fade can play, then stops intercepting input
#[component]
pub fn LoadingOverlay(props: LoadingOverlayProps) -> Element {
    rsx! {
        div { class: if props.visible { "loading-overlay" } else { "loading-overlay done" },
            div { class: "loading-stack",
                div { class: "loading-mark",
                    div { class: "loading-glow" }
                    div { class: "loading-cube" }
                }
                div {
                    div { class: "loading-track",
                        div { class: "loading-sweep" }
                    }
                    p { class: "loading-text", "Loading experience…" }
                }
            }
        }
    }
}
