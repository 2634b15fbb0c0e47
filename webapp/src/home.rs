use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use common::loader::{DismissReason, LOADER_FALLBACK_MS, LoaderGate};

use crate::components::back_to_top::BackToTop;
use crate::components::contact::ContactSection;
use crate::components::footer::SiteFooter;
use crate::components::hero::Hero;
use crate::components::loader::LoadingOverlay;
use crate::components::navbar::NavBar;
use crate::components::sections::{About, Projects, Skills};
use crate::hooks::use_scroll_state;

#[component]
pub fn Home() -> Element {
    let scroll = use_scroll_state();
    let mut gate = use_signal(LoaderGate::new);

    // fallback timer racing the scene's load event; dropping the handle on
    // unmount cancels a pending fire
    use_hook(|| {
        Rc::new(Timeout::new(LOADER_FALLBACK_MS, move || {
            gate.with_mut(|g| {
                g.dismiss(DismissReason::FallbackTimer);
            });
        }))
    });

    let state = scroll();
    let loader_visible = gate.read().is_visible();

    rsx! {
        div { class: "home-container",
            LoadingOverlay { visible: loader_visible }

            NavBar {
                chrome_active: state.chrome_active,
                progress_percent: state.progress_percent,
            }

            main {
                Hero {
                    on_scene_ready: move |_| {
                        gate.with_mut(|g| {
                            g.dismiss(DismissReason::SceneReady);
                        });
                    },
                }
                About {}
                Skills {}
                Projects {}
                ContactSection {}
            }

            SiteFooter {}

            BackToTop { visible: state.back_to_top_visible }
        }
    }
}
