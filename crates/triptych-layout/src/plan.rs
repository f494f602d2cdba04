#![forbid(unsafe_code)]

//! Transition sequencing.
//!
//! [`plan`] diffs the currently applied pane modes against freshly
//! evaluated [`VisibilityFlags`] and produces the ordered operation list
//! for one coordinated size/trait-change transition. Plans are ephemeral:
//! computed, executed, and dropped per event, never persisted.
//!
//! # Ordering rules
//!
//! 1. Insertions into the inline stack come first; a pane entering the
//!    stack is snapped to an off-screen start synchronously and animated
//!    inward, never mixed with an already-in-place insert.
//! 2. Side-bar conversions run after the stack is finalized (their
//!    arranged-stack removal included), avoiding transient double-wide
//!    layouts.
//! 3. Modal hiding comes last; the modal presentation itself is deferred
//!    to animation completion by the executor.
//! 4. Within a phase, ops run in stack order (tab bar, master, detail).
//!
//! All ops of one plan execute inside a single host animation context.

use serde::{Deserialize, Serialize};
use triptych_core::PaneKind;

use crate::pane::{PaneMode, VisibilityFlags};

/// Execution phase of a pane operation. Ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransitionPhase {
    /// Pane joins the inline stack (off-screen snap, insert, slide in).
    Insert,
    /// Pane leaves the stack for side-bar mode (removal folded in).
    SideBar,
    /// Pane leaves the layout for modal presentation (deferred present).
    Modal,
}

/// One pane's mode change within a coordinated transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneOp {
    /// Which pane moves.
    pub pane: PaneKind,
    /// Mode before the transition.
    pub from: PaneMode,
    /// Mode after the transition.
    pub to: PaneMode,
}

impl PaneOp {
    /// The phase this op executes in.
    #[must_use]
    pub const fn phase(&self) -> TransitionPhase {
        match self.to {
            PaneMode::Inline | PaneMode::Detached => TransitionPhase::Insert,
            PaneMode::SideBar => TransitionPhase::SideBar,
            PaneMode::ModalHidden => TransitionPhase::Modal,
        }
    }
}

impl std::fmt::Display for PaneOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:?}→{:?}", self.pane, self.from, self.to)
    }
}

/// Ordered operation list for one size/trait-change event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionPlan {
    /// Operations in execution order.
    pub ops: Vec<PaneOp>,
}

impl TransitionPlan {
    /// Whether the transition changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Ops targeting a given phase, in order.
    pub fn phase_ops(&self, phase: TransitionPhase) -> impl Iterator<Item = &PaneOp> {
        self.ops.iter().filter(move |op| op.phase() == phase)
    }
}

/// Compute the ordered operations taking `current` to the modes implied by
/// `target`.
///
/// `current` is indexed by stack ordinal. Detached panes are not attached
/// to the layout and never move.
#[must_use]
pub fn plan(current: [PaneMode; 3], target: VisibilityFlags) -> TransitionPlan {
    let mut ops = Vec::new();
    for pane in PaneKind::ALL {
        let from = current[pane.stack_ordinal()];
        if from == PaneMode::Detached {
            continue;
        }
        let to = target.target_mode(pane);
        if from != to {
            ops.push(PaneOp { pane, from, to });
        }
    }
    ops.sort_by_key(|op| (op.phase(), op.pane.stack_ordinal()));

    let plan = TransitionPlan { ops };
    if !plan.is_empty() {
        tracing::debug!(ops = plan.ops.len(), %target, "transition planned");
    }
    plan
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
