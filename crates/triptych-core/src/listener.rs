#![forbid(unsafe_code)]

//! Observer interfaces for pane lifecycle events.
//!
//! Named-method listener traits instead of ad hoc closure fields, so
//! multi-consumer fan-out and callback ordering stay explicit and testable.
//! All methods have empty default bodies; implement only what you consume.
//!
//! # Ordering
//!
//! - `will_open` / `will_close` fire synchronously before the settle
//!   animation starts.
//! - `did_open` / `did_close` fire only when the animation reaches the
//!   fully-settled state, never on cancellation.

use crate::pane::PaneKind;

/// Observer for one pane's slide-over lifecycle.
pub trait SlideOverListener {
    /// The panel is about to animate toward open.
    fn will_open(&mut self, pane: PaneKind) {
        let _ = pane;
    }

    /// The panel settled fully open.
    fn did_open(&mut self, pane: PaneKind) {
        let _ = pane;
    }

    /// The panel is about to animate toward closed.
    fn will_close(&mut self, pane: PaneKind) {
        let _ = pane;
    }

    /// The panel settled fully closed.
    fn did_close(&mut self, pane: PaneKind) {
        let _ = pane;
    }
}

/// Observer for coordinator-level events.
pub trait CoordinatorListener {
    /// The tab selection changed to `index`.
    fn tab_selected(&mut self, index: usize) {
        let _ = index;
    }

    /// The detail pane was presented as (or dismissed from) a full-screen
    /// modal.
    fn detail_presentation_changed(&mut self, presented: bool) {
        let _ = presented;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        opens: usize,
    }

    impl SlideOverListener for Counter {
        fn did_open(&mut self, _pane: PaneKind) {
            self.opens += 1;
        }
    }

    #[test]
    fn defaults_are_no_ops() {
        let mut c = Counter::default();
        c.will_open(PaneKind::Master);
        c.will_close(PaneKind::Master);
        c.did_close(PaneKind::Master);
        assert_eq!(c.opens, 0);

        c.did_open(PaneKind::Master);
        assert_eq!(c.opens, 1);
    }
}
