#![forbid(unsafe_code)]

//! The framework seam: [`PaneHost`].
//!
//! The adaptive core never touches concrete view types. Every visual side
//! effect — stack membership, layering, constraint mutation, decoration
//! views, coordinated animation, modal presentation — goes through this
//! trait, implemented by a thin adapter per target UI framework. Tests
//! implement it with a recording double.
//!
//! # Coordinated transitions
//!
//! Mutations issued between [`begin_transition`](PaneHost::begin_transition)
//! and [`commit_transition`](PaneHost::commit_transition) belong to one
//! animation context and must settle together. The host animates the
//! committed changes and later reports completion to the calling component
//! with the committed [`TransitionToken`]. A non-animated transition
//! (`animated == false`) applies immediately; the host still reports
//! completion, after the call that committed the transition has returned.
//! The core never nests transitions.
//!
//! # Contract
//!
//! 1. All calls arrive on the host's UI thread; the trait is not `Sync`.
//! 2. `insert_arranged(view, index)` must clamp `index` to the current
//!    arranged count (the core keeps indices valid; clamping is the host's
//!    last line of defense, not an API the core relies on).
//! 3. Every committed token is eventually reported complete exactly once.
//! 4. `create_overlay` returns a fresh view id each call; destroying an
//!    overlay invalidates its id.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::TransitionToken;
use crate::geometry::Color;

/// Opaque identifier for a host-owned view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewId(u64);

impl ViewId {
    /// Wrap a raw host identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value, for diagnostics.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Host adapter surface for pane choreography.
///
/// One instance backs one window's three-pane arrangement. Methods are
/// infallible by design: the host absorbs impossible requests (unknown ids,
/// out-of-range z) as no-ops, matching production UI code that must not
/// crash on programming errors.
pub trait PaneHost {
    // --- arranged (horizontal stack) membership ---

    /// Insert `view` into the ordered horizontal stack at `index`.
    fn insert_arranged(&mut self, view: ViewId, index: usize);

    /// Remove `view` from the ordered horizontal stack, keeping it in the
    /// layering container.
    fn remove_arranged(&mut self, view: ViewId);

    // --- layering container membership ---

    /// Insert `view` into the layering container at `z_index`
    /// (0 = bottommost).
    fn insert_layered(&mut self, view: ViewId, z_index: usize);

    /// Remove `view` from the layering container entirely.
    fn remove_layered(&mut self, view: ViewId);

    // --- constraint mutation ---

    /// Pin `view` to a fixed panel width (leading-anchored, full height).
    fn set_panel_width(&mut self, view: ViewId, width: f32);

    /// Set the horizontal offset constraint for `view`.
    fn set_offset(&mut self, view: ViewId, offset: f32);

    /// Deactivate the panel constraints installed by `set_panel_width` /
    /// `set_offset`, returning the view to a constraint-free state.
    fn clear_panel_constraints(&mut self, view: ViewId);

    // --- decoration ---

    /// Set a view's opacity.
    fn set_alpha(&mut self, view: ViewId, alpha: f32);

    /// Toggle the panel drop shadow.
    fn set_shadow(&mut self, view: ViewId, visible: bool);

    /// Set a view's background color.
    fn set_background(&mut self, view: ViewId, color: Color);

    /// Create a full-container dimming overlay layered directly below
    /// `below`, filled with `color`, initially at alpha 0.
    fn create_overlay(&mut self, below: ViewId, color: Color) -> ViewId;

    /// Destroy a dimming overlay.
    fn destroy_overlay(&mut self, overlay: ViewId);

    // --- pane content children ---

    /// Insert `child` as the content of the pane container `container`.
    fn insert_content(&mut self, container: ViewId, child: ViewId);

    /// Remove `child` from the pane container `container`.
    fn remove_content(&mut self, container: ViewId, child: ViewId);

    /// Set a horizontal translation on a content child (slide-past swaps).
    fn set_content_translation(&mut self, child: ViewId, dx: f32);

    // --- coordinated animation ---

    /// Open an animation context. `duration` is advisory when
    /// `animated == false`.
    fn begin_transition(&mut self, animated: bool, duration: Duration);

    /// Close the current animation context and schedule it under `token`.
    fn commit_transition(&mut self, token: TransitionToken);

    // --- modal presentation delegate ---

    /// Present `view` as a full-screen modal.
    fn present_modal(&mut self, view: ViewId);

    /// Dismiss a previously presented modal.
    fn dismiss_modal(&mut self, view: ViewId);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
