use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::EventListener;

use common::scroll::ScrollState;

// current absolute scroll position and how far the page can scroll, read
// straight from the browser
pub fn window_scroll_state() -> ScrollState {
    let Some(window) = web_sys::window() else {
        return ScrollState::default();
    };

    let scroll_top = window.scroll_y().unwrap_or(0.0);

    let scrollable_height = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|el| (el.scroll_height() - el.client_height()) as f64)
        .unwrap_or(0.0);

    ScrollState::compute(scroll_top, scrollable_height)
}

// subscribes to window scroll events for the lifetime of the calling
// component; dropping the listener with the component unsubscribes, so a
// late event can never write into a dead scope
pub fn use_scroll_state() -> Signal<ScrollState> {
    let mut state = use_signal(ScrollState::default);

    // eager recompute so a page restored mid-scroll renders correctly
    // before the first scroll event arrives
    use_effect(move || {
        state.set(window_scroll_state());
    });

    use_hook(|| {
        let listener = web_sys::window().map(|window| {
            EventListener::new(&window, "scroll", move |_| {
                state.set(window_scroll_state());
            })
        });

        Rc::new(listener)
    });

    state
}
