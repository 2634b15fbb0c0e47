use tracing::debug;

// how long the startup overlay stays up when the scene never reports in
pub const LOADER_FALLBACK_MS: u32 = 1800;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    FallbackTimer,
    SceneReady,
}

// one-shot gate for the startup overlay
//
// the fallback timer and the scene load callback race to dismiss it; the
// first caller wins and later ones are no-ops, so visibility only ever
// moves from shown to hidden
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoaderGate {
    dismissed: Option<DismissReason>,
}

impl LoaderGate {
    pub fn new() -> LoaderGate {
        LoaderGate::default()
    }

    pub fn is_visible(&self) -> bool {
        self.dismissed.is_none()
    }

    pub fn dismissed_by(&self) -> Option<DismissReason> {
        self.dismissed
    }

    // returns whether this call was the one that hid the overlay
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if self.dismissed.is_some() {
            return false;
        }

        debug!("startup overlay dismissed: {reason:?}");

        self.dismissed = Some(reason);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible() {
        let gate = LoaderGate::new();

        assert!(gate.is_visible());
        assert_eq!(gate.dismissed_by(), None);
    }

    #[test]
    fn timer_dismisses_when_first() {
        let mut gate = LoaderGate::new();

        assert!(gate.dismiss(DismissReason::FallbackTimer));
        assert!(!gate.is_visible());
        assert_eq!(gate.dismissed_by(), Some(DismissReason::FallbackTimer));
    }

    #[test]
    fn scene_dismisses_when_first() {
        let mut gate = LoaderGate::new();

        assert!(gate.dismiss(DismissReason::SceneReady));
        assert_eq!(gate.dismissed_by(), Some(DismissReason::SceneReady));
    }

    #[test]
    fn second_dismissal_is_a_no_op() {
        let mut gate = LoaderGate::new();

        assert!(gate.dismiss(DismissReason::SceneReady));
        assert!(!gate.dismiss(DismissReason::FallbackTimer));

        // the winner is retained
        assert_eq!(gate.dismissed_by(), Some(DismissReason::SceneReady));
        assert!(!gate.is_visible());
    }

    #[test]
    fn repeated_scene_events_do_not_flicker() {
        let mut gate = LoaderGate::new();

        assert!(gate.dismiss(DismissReason::SceneReady));
        assert!(!gate.dismiss(DismissReason::SceneReady));
        assert!(!gate.is_visible());
    }
}
