#![forbid(unsafe_code)]

//! Slide-over animation math and transition tokens.
//!
//! Pure functions shared by the slide-over controller and the layout
//! coordinator: drag-offset clamping, dimming interpolation, and the
//! travel-proportional settle duration. All functions are deterministic
//! and side-effect free.
//!
//! # Offset convention
//!
//! A panel's horizontal offset is measured relative to its fully-open
//! position, shifted by `left_offset` (the stacking inset when a second
//! side bar sits inside the first):
//!
//! - fully open: `offset == left_offset`
//! - fully closed: `offset == -panel_width + left_offset`
//!
//! # Invariants
//!
//! 1. `clamp_drag_offset` output is always within
//!    `[-panel_width + left_offset, left_offset]`.
//! 2. `dim_alpha` output is always within `[MIN_DIM_ALPHA, MAX_DIM_ALPHA]`,
//!    reaching the max exactly at fully open and the min at fully closed.
//! 3. `settle_duration` never exceeds [`BASE_SETTLE_DURATION`] and is zero
//!    for zero travel or zero width.
//!
//! # Failure Modes
//!
//! - Zero or negative `panel_width`: clamping degenerates to `left_offset`,
//!   dimming to the minimum, durations to zero. No division by zero occurs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geometry::clamp_f32;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Settle duration for a full-width travel.
pub const BASE_SETTLE_DURATION: Duration = Duration::from_millis(350);

/// Dimming overlay alpha at fully open.
pub const MAX_DIM_ALPHA: f32 = 0.25;

/// Dimming overlay alpha at fully closed.
pub const MIN_DIM_ALPHA: f32 = 0.0;

// ---------------------------------------------------------------------------
// Offset math
// ---------------------------------------------------------------------------

/// Clamp a raw drag displacement to the panel's travel range.
///
/// `raw` is the un-offset displacement (`touch_x - reference_x - panel_width`
/// for an opening drag, `touch_x - reference_x` for a closing drag). The
/// result is the constraint offset to apply: clamped to
/// `[-panel_width, 0]`, then shifted by `left_offset`.
#[must_use]
pub fn clamp_drag_offset(raw: f32, panel_width: f32, left_offset: f32) -> f32 {
    let width = panel_width.max(0.0);
    clamp_f32(raw, -width, 0.0) + left_offset
}

/// Normalized distance from fully open, in `[0, 1]`.
///
/// 0 at fully open, 1 at fully closed.
#[must_use]
pub fn open_distance(offset: f32, left_offset: f32, panel_width: f32) -> f32 {
    if panel_width <= 0.0 {
        return 1.0;
    }
    clamp_f32((-offset + left_offset) / panel_width, 0.0, 1.0)
}

/// Dimming alpha for a panel offset: linear from [`MAX_DIM_ALPHA`] at fully
/// open to [`MIN_DIM_ALPHA`] at fully closed.
#[must_use]
pub fn dim_alpha(offset: f32, left_offset: f32, panel_width: f32) -> f32 {
    MAX_DIM_ALPHA * (1.0 - open_distance(offset, left_offset, panel_width))
}

/// Settle animation duration for a remaining travel distance.
///
/// Proportional to the distance left to the settle target, so drags that
/// ended near their target snap quickly while drags abandoned mid-way
/// animate a fuller distance: `base * (travel/2) / (panel_width/2)`,
/// capped at the base duration.
#[must_use]
pub fn settle_duration(travel: f32, panel_width: f32) -> Duration {
    if panel_width <= 0.0 || travel <= 0.0 {
        return Duration::ZERO;
    }
    if travel >= panel_width {
        return BASE_SETTLE_DURATION;
    }
    // f64 so the base duration round-trips exactly; 0.35s has no exact
    // f32-seconds representation.
    BASE_SETTLE_DURATION.mul_f64(f64::from(travel / panel_width))
}

// ---------------------------------------------------------------------------
// Transition tokens
// ---------------------------------------------------------------------------

/// Identifies one coordinated host transition.
///
/// The core mints a token when it commits a transition; the host hands it
/// back through `transition_completed` once the animation settles. Tokens
/// are process-unique so completions can be routed to whichever component
/// (coordinator or slide-over controller) is awaiting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionToken(u64);

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

impl TransitionToken {
    /// Mint a fresh token.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value, for diagnostics.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
