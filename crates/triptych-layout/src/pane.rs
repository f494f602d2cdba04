#![forbid(unsafe_code)]

//! Pane presentation modes and visibility flags.
//!
//! [`PaneMode`] encodes the exactly-one-of placement invariant structurally:
//! a pane is inline, in side-bar mode, hidden behind a modal, or detached —
//! never two of those at once. [`VisibilityFlags`] is the policy output
//! naming which panes should leave the inline stack.
//!
//! # Invariants
//!
//! 1. `target_mode` maps a collapsed TabBar/Master to `SideBar` and a
//!    collapsed Detail to `ModalHidden`; Detail never becomes a side bar.
//! 2. Flags with both `master_collapsed` and `detail_collapsed` set are
//!    never *applied* — the policy rejects them before they reach layout.

use serde::{Deserialize, Serialize};
use triptych_core::PaneKind;

/// Where a pane currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaneMode {
    /// Not attached to the layout at all.
    #[default]
    Detached,
    /// Member of the ordered horizontal stack.
    Inline,
    /// Out of the stack, presented as a gesture-revealable side bar.
    SideBar,
    /// Fully removed from the in-window layout; the host presents it as a
    /// full-screen modal instead. Detail only.
    ModalHidden,
}

impl PaneMode {
    /// Whether the pane occupies inline stack space.
    #[must_use]
    pub const fn is_inline(self) -> bool {
        matches!(self, Self::Inline)
    }

    /// Whether the pane is collapsed out of the stack (side bar or modal).
    #[must_use]
    pub const fn is_collapsed(self) -> bool {
        matches!(self, Self::SideBar | Self::ModalHidden)
    }
}

/// Per-pane collapse decisions produced by one policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibilityFlags {
    /// Tab bar leaves the stack for a left-edge side bar.
    pub tab_bar_collapsed: bool,
    /// Master leaves the stack for a left-edge side bar.
    pub master_collapsed: bool,
    /// Detail leaves the layout for full-screen modal presentation.
    pub detail_collapsed: bool,
}

impl VisibilityFlags {
    /// All three panes inline.
    pub const INLINE: Self = Self {
        tab_bar_collapsed: false,
        master_collapsed: false,
        detail_collapsed: false,
    };

    /// Construct from the three collapse booleans in pane order.
    #[must_use]
    pub const fn new(tab_bar: bool, master: bool, detail: bool) -> Self {
        Self {
            tab_bar_collapsed: tab_bar,
            master_collapsed: master,
            detail_collapsed: detail,
        }
    }

    /// The collapse flag for one pane.
    #[must_use]
    pub const fn collapsed(self, pane: PaneKind) -> bool {
        match pane {
            PaneKind::TabBar => self.tab_bar_collapsed,
            PaneKind::Master => self.master_collapsed,
            PaneKind::Detail => self.detail_collapsed,
        }
    }

    /// The placement these flags imply for one pane.
    #[must_use]
    pub const fn target_mode(self, pane: PaneKind) -> PaneMode {
        if !self.collapsed(pane) {
            return PaneMode::Inline;
        }
        match pane {
            PaneKind::TabBar | PaneKind::Master => PaneMode::SideBar,
            PaneKind::Detail => PaneMode::ModalHidden,
        }
    }
}

impl std::fmt::Display for VisibilityFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for pane in PaneKind::ALL {
            if self.collapsed(pane) {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(pane.label())?;
                first = false;
            }
        }
        if first {
            f.write_str("inline")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_collapses_nothing() {
        for pane in PaneKind::ALL {
            assert!(!VisibilityFlags::INLINE.collapsed(pane));
            assert_eq!(VisibilityFlags::INLINE.target_mode(pane), PaneMode::Inline);
        }
    }

    #[test]
    fn tab_bar_and_master_collapse_to_side_bar() {
        let flags = VisibilityFlags::new(true, true, false);
        assert_eq!(flags.target_mode(PaneKind::TabBar), PaneMode::SideBar);
        assert_eq!(flags.target_mode(PaneKind::Master), PaneMode::SideBar);
        assert_eq!(flags.target_mode(PaneKind::Detail), PaneMode::Inline);
    }

    #[test]
    fn detail_collapses_to_modal() {
        let flags = VisibilityFlags::new(false, false, true);
        assert_eq!(flags.target_mode(PaneKind::Detail), PaneMode::ModalHidden);
    }

    #[test]
    fn mode_predicates() {
        assert!(PaneMode::Inline.is_inline());
        assert!(!PaneMode::SideBar.is_inline());
        assert!(PaneMode::SideBar.is_collapsed());
        assert!(PaneMode::ModalHidden.is_collapsed());
        assert!(!PaneMode::Detached.is_collapsed());
    }

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", VisibilityFlags::INLINE), "inline");
        assert_eq!(
            format!("{}", VisibilityFlags::new(true, false, true)),
            "tab-bar+detail"
        );
    }

    #[test]
    fn serde_round_trip() {
        let flags = VisibilityFlags::new(true, false, true);
        let json = serde_json::to_string(&flags).unwrap();
        let back: VisibilityFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(flags, back);
    }
}
