#![forbid(unsafe_code)]

//! Host-delivered horizontal drag samples.
//!
//! The slide-over controller consumes a stream of [`DragSample`]s from two
//! host-side recognizers (an edge recognizer on the container, a free
//! recognizer on the panel). Only the horizontal touch position matters;
//! vertical movement never affects panel offsets.
//!
//! # Ordering contract
//!
//! The host guarantees `Began` → `Changed`* → (`Ended` | `Cancelled`) per
//! recognizer. The core does not enforce this: a `Changed` or `Ended`
//! arriving with no grip in place is ignored by consumers, as is a second
//! `Began` mid-drag.
//!
//! # Failure Modes
//!
//! None — samples are plain data; misordered streams degrade to no-ops.

use serde::{Deserialize, Serialize};

/// Phase of a drag gesture, per the host's gesture-delivery contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    /// Touch down; the sample position becomes the reference point.
    Began,
    /// Touch moved while down.
    Changed,
    /// Touch lifted; the consumer settles to a resting position.
    Ended,
    /// Recognizer cancelled (incoming call, system gesture, focus loss).
    Cancelled,
}

/// One horizontal drag sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSample {
    /// Gesture phase.
    pub phase: DragPhase,
    /// Horizontal touch position in container coordinates.
    pub x: f32,
}

impl DragSample {
    /// Construct a sample.
    #[must_use]
    pub const fn new(phase: DragPhase, x: f32) -> Self {
        Self { phase, x }
    }

    /// A `Began` sample at `x`.
    #[must_use]
    pub const fn began(x: f32) -> Self {
        Self::new(DragPhase::Began, x)
    }

    /// A `Changed` sample at `x`.
    #[must_use]
    pub const fn changed(x: f32) -> Self {
        Self::new(DragPhase::Changed, x)
    }

    /// An `Ended` sample at `x`.
    #[must_use]
    pub const fn ended(x: f32) -> Self {
        Self::new(DragPhase::Ended, x)
    }

    /// A `Cancelled` sample at `x`.
    #[must_use]
    pub const fn cancelled(x: f32) -> Self {
        Self::new(DragPhase::Cancelled, x)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_phase() {
        assert_eq!(DragSample::began(1.0).phase, DragPhase::Began);
        assert_eq!(DragSample::changed(2.0).phase, DragPhase::Changed);
        assert_eq!(DragSample::ended(3.0).phase, DragPhase::Ended);
        assert_eq!(DragSample::cancelled(4.0).phase, DragPhase::Cancelled);
    }

    #[test]
    fn sample_carries_position() {
        let s = DragSample::changed(42.5);
        assert_eq!(s.x, 42.5);
    }

    #[test]
    fn serde_round_trip() {
        let s = DragSample::ended(120.0);
        let json = serde_json::to_string(&s).unwrap();
        let back: DragSample = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
