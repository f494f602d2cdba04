#![forbid(unsafe_code)]

//! Adaptive three-pane layout for Triptych.
//!
//! # Role in Triptych
//! `triptych-layout` is the state-machine layer: the visibility policy that
//! decides which panes collapse at a given size, the slide-over controller
//! that runs one collapsed pane's gesture lifecycle, the transition
//! sequencer that phases multi-pane changes, and the layout coordinator
//! that owns the whole arrangement.
//!
//! # Primary responsibilities
//! - **policy**: pure `(size, traits, config) → VisibilityFlags` with the
//!   master/detail mutual-exclusion check.
//! - **slide_over**: gesture-driven open/close of one side-bar panel.
//! - **plan**: diff current pane modes against target flags into phased
//!   operations.
//! - **coordinator**: executes plans against a [`PaneHost`]
//!   (`triptych_core::PaneHost`), owns stack membership and controllers.
//! - **tabs**: the tab bar's item/selection model.
//!
//! # How it fits in the system
//! A host adapter implements `PaneHost`, attaches its three pane views,
//! then forwards size/trait changes, drag samples, and transition
//! completions to [`LayoutCoordinator`]. Everything in between is
//! deterministic and host-free, which is what the test suites lean on.
//!
//! [`PaneHost`]: triptych_core::PaneHost

pub mod config;
pub mod coordinator;
pub mod pane;
pub mod plan;
pub mod policy;
pub mod slide_over;
pub mod tabs;

pub use config::{CancelBehavior, CollapseDecision, Configuration};
pub use coordinator::LayoutCoordinator;
pub use pane::{PaneMode, VisibilityFlags};
pub use plan::{PaneOp, TransitionPhase, TransitionPlan, plan};
pub use policy::{PolicyConflict, evaluate};
pub use slide_over::{SlideOverController, SlideState};
pub use tabs::TabItemModel;
