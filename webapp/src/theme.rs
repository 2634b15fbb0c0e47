use dioxus::prelude::*;

use common::theme::{self, Theme};

use crate::storage::BrowserPrefs;

// theme for the whole page, read from the persisted preference the first
// time anything looks at it
pub static ACTIVE_THEME: GlobalSignal<Theme> = Signal::global(|| theme::load_theme(&BrowserPrefs));

pub fn active_theme() -> Theme {
    *ACTIVE_THEME.read()
}

// flips the palette and persists the choice for the next visit
pub fn toggle_theme() {
    let next = active_theme().toggled();

    theme::store_theme(&BrowserPrefs, next);
    *ACTIVE_THEME.write() = next;
}
