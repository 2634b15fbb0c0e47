use dioxus::prelude::*;

use crate::components::icons::IconArrowUp;

#[derive(Clone, PartialEq, Props)]
pub struct BackToTopProps {
    visible: bool,
}

#[component]
pub fn BackToTop(props: BackToTopProps) -> Element {
    rsx! {
        if props.visible {
            button {
                class: "back-to-top",
                aria_label: "Back to top",
                onclick: move |_| {
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                },
                IconArrowUp { size: 20 }
            }
        }
    }
}
