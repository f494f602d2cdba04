#![forbid(unsafe_code)]

//! Pane identity and ordering.
//!
//! The three logical panes form a fixed left-to-right stack order
//! (TabBar, Master, Detail) with the *reverse* z-order (Detail bottom,
//! Master middle, TabBar top). The reversal is load-bearing: a pane
//! sliding into side-bar mode must animate over the panes to its right.
//!
//! # Invariants
//!
//! 1. `ALL` lists panes in stack order; `stack_ordinal` is its index.
//! 2. `z_index() == 2 - stack_ordinal()` for every pane.

use serde::{Deserialize, Serialize};

/// One of the three logical panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaneKind {
    /// Primary tab selector, leftmost, topmost layer.
    TabBar,
    /// Master content pane, middle.
    Master,
    /// Detail content pane, rightmost, bottommost layer.
    Detail,
}

impl PaneKind {
    /// All panes in stack (left-to-right) order.
    pub const ALL: [Self; 3] = [Self::TabBar, Self::Master, Self::Detail];

    /// Position in the horizontal stack (0 = leftmost).
    #[must_use]
    pub const fn stack_ordinal(self) -> usize {
        match self {
            Self::TabBar => 0,
            Self::Master => 1,
            Self::Detail => 2,
        }
    }

    /// Layering position (0 = bottommost). Reverse of the stack order so
    /// sliding panes overlap the panes to their right.
    #[must_use]
    pub const fn z_index(self) -> usize {
        2 - self.stack_ordinal()
    }

    /// Short label for logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TabBar => "tab-bar",
            Self::Master => "master",
            Self::Detail => "detail",
        }
    }
}

impl std::fmt::Display for PaneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
