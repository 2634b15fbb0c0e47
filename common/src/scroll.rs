// thresholds in css pixels, both compared with strict greater-than so a
// page resting exactly on one stays in the calm state
pub const CHROME_THRESHOLD_PX: f64 = 10.0;
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 600.0;

// derived projection of a single scroll position; recomputed wholesale on
// every scroll event instead of being mutated piecemeal
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_top: f64,
    pub progress_percent: f64,
    pub chrome_active: bool,
    pub back_to_top_visible: bool,
}

impl ScrollState {
    // scrollable_height is document height minus viewport height, which
    // browsers report as zero (or transiently negative) for short pages
    pub fn compute(scroll_top: f64, scrollable_height: f64) -> ScrollState {
        let scroll_top = scroll_top.max(0.0);

        let progress_percent = if scrollable_height > 0.0 {
            (100.0 * scroll_top / scrollable_height).clamp(0.0, 100.0)
        } else {
            0.0
        };

        ScrollState {
            scroll_top,
            progress_percent,
            chrome_active: scroll_top > CHROME_THRESHOLD_PX,
            back_to_top_visible: scroll_top > BACK_TO_TOP_THRESHOLD_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_is_calm() {
        let state = ScrollState::compute(0.0, 2000.0);

        assert_eq!(state.progress_percent, 0.0);
        assert!(!state.chrome_active);
        assert!(!state.back_to_top_visible);
    }

    #[test]
    fn thresholds_are_strict() {
        let at_chrome = ScrollState::compute(10.0, 2000.0);
        assert!(!at_chrome.chrome_active);

        let past_chrome = ScrollState::compute(10.5, 2000.0);
        assert!(past_chrome.chrome_active);

        let at_top_button = ScrollState::compute(600.0, 2000.0);
        assert!(!at_top_button.back_to_top_visible);

        let past_top_button = ScrollState::compute(600.5, 2000.0);
        assert!(past_top_button.back_to_top_visible);
    }

    #[test]
    fn progress_is_proportional() {
        let state = ScrollState::compute(500.0, 2000.0);

        assert_eq!(state.progress_percent, 25.0);
    }

    #[test]
    fn progress_saturates_at_both_ends() {
        // elastic overscroll past the bottom
        let over = ScrollState::compute(2400.0, 2000.0);
        assert_eq!(over.progress_percent, 100.0);

        // rubber-banding above the top
        let under = ScrollState::compute(-80.0, 2000.0);
        assert_eq!(under.progress_percent, 0.0);
        assert_eq!(under.scroll_top, 0.0);
        assert!(!under.chrome_active);
    }

    #[test]
    fn unscrollable_page_reports_zero_progress() {
        let state = ScrollState::compute(0.0, 0.0);
        assert_eq!(state.progress_percent, 0.0);

        // viewport taller than the document
        let negative = ScrollState::compute(0.0, -40.0);
        assert_eq!(negative.progress_percent, 0.0);
    }

    #[test]
    fn chrome_and_button_are_independent() {
        let state = ScrollState::compute(300.0, 2000.0);

        assert!(state.chrome_active);
        assert!(!state.back_to_top_visible);
    }
}
