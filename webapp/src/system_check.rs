use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::theme::THEME_STORAGE_KEY;

use crate::Route;
use crate::content;
use crate::storage::{get_local_storage, set_local_storage};
use crate::theme;

// out-of-band diagnostics page, linked from the footer
#[component]
pub fn SystemCheck() -> Element {
    // round-trip probe so a broken storage backend is visible at a glance
    let storage_ok = use_hook(|| {
        set_local_storage("probe", "ok");
        get_local_storage::<String>("probe").is_ok()
    });

    let backend = api::backend_base_url();
    let backend_display = if backend.is_empty() {
        "same-origin"
    } else {
        backend
    };

    let contact_endpoint = api::contact::contact_url();
    let scene = content::hero_scene_url();
    let version = env!("CARGO_PKG_VERSION");
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    let active_theme = theme::active_theme().storage_value();
    let stored_theme =
        get_local_storage::<String>(THEME_STORAGE_KEY).unwrap_or_else(|_| String::from("unset"));

    let storage_display = if storage_ok { "ok" } else { "unavailable" };

    rsx! {
        div { class: "system-check",
            h1 { class: "section-title", "System Check" }
            p { class: "section-subtitle",
                "Build and environment diagnostics for this deployment."
            }

            div { class: "check-list",
                div { class: "check-row",
                    span { "Version" }
                    span { class: "value", "{version}" }
                }
                div { class: "check-row",
                    span { "Build profile" }
                    span { class: "value", "{profile}" }
                }
                div { class: "check-row",
                    span { "Backend" }
                    span { class: "value", "{backend_display}" }
                }
                div { class: "check-row",
                    span { "Contact endpoint" }
                    span { class: "value", "{contact_endpoint}" }
                }
                div { class: "check-row",
                    span { "Hero scene" }
                    span { class: "value", "{scene}" }
                }
                div { class: "check-row",
                    span { "Local storage" }
                    span { class: "value", "{storage_display}" }
                }
                div { class: "check-row",
                    span { "Active theme" }
                    span { class: "value", "{active_theme}" }
                }
                div { class: "check-row",
                    span { "Stored theme" }
                    span { class: "value", "{stored_theme}" }
                }
            }

            p { style: "margin-top: var(--space-6);",
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to the site" }
            }
        }
    }
}
