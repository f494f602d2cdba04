#![forbid(unsafe_code)]

//! Pane visibility policy.
//!
//! [`evaluate`] maps one `(container size, trait descriptor, configuration)`
//! triple to [`VisibilityFlags`] by running the host-supplied decision
//! callbacks. It is a deterministic pure computation: no caching, each
//! callback invoked exactly once per evaluation, re-run from scratch on
//! every size/trait-change notification.
//!
//! # Invariants
//!
//! 1. Each decision callback is invoked at most once per evaluation.
//! 2. A missing callback yields `false` (never collapse) for its pane.
//! 3. Master and detail both voting to collapse is a configuration error:
//!    the evaluation is rejected and neither result is applied, because a
//!    layout with neither master nor detail inline has nowhere to show
//!    content.
//!
//! # Failure Modes
//!
//! - [`PolicyConflict::MasterDetailBothCollapsed`]: rejected evaluation.
//!   The caller logs it and retains the previously applied flags.

use triptych_core::{Size, TraitDescriptor};

use crate::config::Configuration;
use crate::pane::VisibilityFlags;

/// A rejected policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolicyConflict {
    /// The master and detail callbacks both requested collapse for the
    /// same inputs.
    MasterDetailBothCollapsed {
        /// Container size the conflicting evaluation ran against.
        size: Size,
    },
}

impl std::fmt::Display for PolicyConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MasterDetailBothCollapsed { size } => write!(
                f,
                "master and detail both requested collapse at {}x{}; evaluation rejected",
                size.width, size.height
            ),
        }
    }
}

/// Evaluate the three collapse decisions for the given inputs.
///
/// Tab-bar collapse may coexist with master collapse; the layout stacks
/// their side bars (tab bar inset by the master side-bar width). Master and
/// detail collapsing together is rejected.
pub fn evaluate(
    size: Size,
    traits: TraitDescriptor,
    config: &Configuration,
) -> Result<VisibilityFlags, PolicyConflict> {
    let tab_bar = config.decide_tab_bar(size, traits);
    let master = config.decide_master(size, traits);
    let detail = config.decide_detail(size, traits);

    if master && detail {
        return Err(PolicyConflict::MasterDetailBothCollapsed { size });
    }

    let flags = VisibilityFlags::new(tab_bar, master, detail);
    tracing::debug!(%flags, %traits, width = size.width, "visibility evaluated");
    Ok(flags)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
