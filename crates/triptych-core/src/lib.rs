#![forbid(unsafe_code)]

//! Core: host abstractions and pure primitives for Triptych.
//!
//! # Role in Triptych
//! `triptych-core` is the seam layer. It owns the [`PaneHost`] trait through
//! which the adaptive state machine touches a concrete UI framework, plus
//! the plain values that cross that seam: pane identity, trait environment
//! descriptors, drag samples, colors, and the slide-over animation math.
//!
//! # Primary responsibilities
//! - **PaneHost**: the only surface the layout core mutates views through.
//! - **TraitDescriptor / Size**: inputs to collapse-decision callbacks.
//! - **DragSample**: the host-delivered gesture feed.
//! - **animation**: clamp/dim/settle math and [`TransitionToken`]s.
//!
//! # How it fits in the system
//! `triptych-layout` consumes these types to run the visibility policy,
//! slide-over controllers, and transition sequencing. Host adapters
//! implement [`PaneHost`] and deliver size/trait/drag events inward; the
//! core never assumes an ambient animation context.

pub mod animation;
pub mod drag;
pub mod environment;
pub mod geometry;
pub mod host;
pub mod listener;
pub mod pane;

pub use animation::{
    BASE_SETTLE_DURATION, MAX_DIM_ALPHA, MIN_DIM_ALPHA, TransitionToken, clamp_drag_offset,
    dim_alpha, open_distance, settle_duration,
};
pub use drag::{DragPhase, DragSample};
pub use environment::{Idiom, SizeClass, TraitDescriptor};
pub use geometry::{Color, Point, Size, clamp_f32};
pub use host::{PaneHost, ViewId};
pub use listener::{CoordinatorListener, SlideOverListener};
pub use pane::PaneKind;
