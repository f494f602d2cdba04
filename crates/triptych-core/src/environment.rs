#![forbid(unsafe_code)]

//! Trait environment descriptors.
//!
//! A [`TraitDescriptor`] is the coarse environment classification (size
//! class + device idiom) handed to collapse-decision callbacks alongside the
//! container size. It deliberately carries no geometry: exact widths travel
//! separately so the descriptor stays stable across small resizes.
//!
//! # Invariants
//!
//! 1. Descriptors are plain values: `Copy`, order-free, no interior state.
//! 2. `Unspecified` compares unequal to both concrete variants; callbacks
//!    that care about a class must treat it as "unknown", not as a default.
//!
//! # Failure Modes
//!
//! None — all operations are infallible.

use serde::{Deserialize, Serialize};

/// Coarse horizontal or vertical size classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizeClass {
    /// Unknown or not yet determined by the host.
    #[default]
    Unspecified,
    /// Constrained extent (phone-width, split-screen slice).
    Compact,
    /// Generous extent (tablet, full-width window).
    Regular,
}

/// Device idiom analog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Idiom {
    /// Unknown or not yet determined by the host.
    #[default]
    Unspecified,
    /// Handheld form factor.
    Phone,
    /// Tablet form factor.
    Pad,
}

/// Coarse environment descriptor fed to collapse-decision callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitDescriptor {
    /// Horizontal size class.
    pub horizontal: SizeClass,
    /// Vertical size class.
    pub vertical: SizeClass,
    /// Device idiom.
    pub idiom: Idiom,
}

impl TraitDescriptor {
    /// Create a descriptor from all three components.
    #[must_use]
    pub const fn new(horizontal: SizeClass, vertical: SizeClass, idiom: Idiom) -> Self {
        Self {
            horizontal,
            vertical,
            idiom,
        }
    }

    /// Portrait phone: compact width, regular height.
    #[must_use]
    pub const fn phone_compact() -> Self {
        Self::new(SizeClass::Compact, SizeClass::Regular, Idiom::Phone)
    }

    /// Full-screen tablet: regular in both axes.
    #[must_use]
    pub const fn pad_regular() -> Self {
        Self::new(SizeClass::Regular, SizeClass::Regular, Idiom::Pad)
    }

    /// Whether the horizontal class is compact.
    #[must_use]
    pub const fn is_horizontally_compact(&self) -> bool {
        matches!(self.horizontal, SizeClass::Compact)
    }
}

impl std::fmt::Display for TraitDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}x{:?}/{:?}",
            self.horizontal, self.vertical, self.idiom
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
