#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod components;

mod content;

mod home;
use home::Home;

mod hooks;

mod storage;

mod style;

mod system_check;
use system_check::SystemCheck;

mod theme;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/test")]
    SystemCheck {},
}

#[component]
pub fn App() -> Element {
    let theme = theme::active_theme();
    let theme_class = theme.css_class();

    rsx! {
        style { "{style::LOADER_STYLES}" }
        style { "{style::SITE_STYLES}" }
        div { class: "site-root {theme_class}",
            Router::<Route> { config: RouterConfig::default }
        }
    }
}
