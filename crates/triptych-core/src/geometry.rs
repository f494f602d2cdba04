#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are host points (f32), not cells: the adaptive core reasons
//! about touch positions and pane widths, never about pixels or glyphs.

use serde::{Deserialize, Serialize};

/// A 2D size in host points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent in points.
    pub width: f32,
    /// Vertical extent in points.
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Check for zero area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A point in host coordinates (origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position in points.
    pub x: f32,
    /// Vertical position in points.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Clamp `v` to `[lo, hi]`.
///
/// Total for the NaN-free inputs the core produces; a NaN `v` propagates
/// unchanged rather than panicking.
#[inline]
#[must_use]
pub fn clamp_f32(v: f32, lo: f32, hi: f32) -> f32 {
    debug_assert!(lo <= hi);
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from all four channels.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a replaced alpha channel.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent.
    pub const CLEAR: Self = Self::rgba(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::CLEAR
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(Size::new(-1.0, 10.0).is_empty());
        assert!(!Size::new(320.0, 480.0).is_empty());
    }

    #[test]
    fn clamp_inside_range() {
        assert_eq!(clamp_f32(5.0, 0.0, 10.0), 5.0);
    }

    #[test]
    fn clamp_below_range() {
        assert_eq!(clamp_f32(-3.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn clamp_above_range() {
        assert_eq!(clamp_f32(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn clamp_at_bounds() {
        assert_eq!(clamp_f32(0.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_f32(10.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn color_with_alpha() {
        let c = Color::rgb(10, 20, 30).with_alpha(64);
        assert_eq!(c, Color::rgba(10, 20, 30, 64));
    }

    #[test]
    fn color_default_is_clear() {
        assert_eq!(Color::default(), Color::CLEAR);
    }

    #[test]
    fn size_serde_round_trip() {
        let s = Size::new(768.0, 1024.0);
        let json = serde_json::to_string(&s).unwrap();
        let back: Size = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
