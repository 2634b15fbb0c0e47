use chrono::{Datelike, Local};
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::content::SITE_NAME;

#[component]
pub fn SiteFooter() -> Element {
    let year = Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-inner",
                p { "© {year} {SITE_NAME}. All rights reserved." }
                div { class: "footer-links",
                    a { href: "#home", "Back to top" }
                    Link { to: Route::SystemCheck {}, "System Check" }
                }
            }
        }
    }
}
