#![forbid(unsafe_code)]

//! Slide-over panel controller.
//!
//! One [`SlideOverController`] owns one slidable panel: its offset
//! constraint, dimming overlay, shadow, open/closed state, and the two
//! drag feeds that reveal or conceal it. Created when a pane enters
//! side-bar mode, destroyed when it returns inline or goes modal. Never
//! shared, never reused across panes.
//!
//! # State Machine
//!
//! `Closed → Opening → Open → Closing → Closed` (cyclic, no terminal
//! state). Two host recognizers drive it:
//!
//! - the **edge** recognizer on the source (container) view feeds
//!   [`handle_edge_drag`](SlideOverController::handle_edge_drag), live only
//!   when `Closed`;
//! - the **panel** recognizer on the target view feeds
//!   [`handle_panel_drag`](SlideOverController::handle_panel_drag), live
//!   only when `Open`.
//!
//! While a settle animation is in flight the edge feed is disabled, so a
//! second open gesture cannot start mid-animation; the symmetric guard
//! covers closing.
//!
//! # Invariants
//!
//! 1. The panel offset never leaves
//!    `[-panel_width + left_offset, left_offset]` (no overshoot).
//! 2. `will_*` listener calls fire synchronously before a settle animation
//!    starts; `did_*` fire only on completion at the fully settled state.
//! 3. Decoration views are created once per controller; settling an
//!    already-settled panel re-fires callbacks but creates nothing.
//! 4. Teardown is idempotent and leaves the panel constraint-free:
//!    recognizers off → shadow off → overlay destroyed → constraints
//!    cleared.
//!
//! # Failure Modes
//!
//! - Drag samples arriving in the wrong state or order are ignored.
//! - A `Cancelled` sample under [`CancelBehavior::Hold`] leaves the panel
//!   at its partial position; neither recognizer is live there until an
//!   explicit `open`/`close` resolves it.

use std::time::Duration;

use triptych_core::{
    DragPhase, DragSample, MAX_DIM_ALPHA, MIN_DIM_ALPHA, PaneHost, PaneKind, SlideOverListener,
    TransitionToken, ViewId, clamp_drag_offset, dim_alpha, settle_duration,
};

use crate::config::CancelBehavior;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Lifecycle state of the slide-over panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    /// Fully concealed; edge recognizer live.
    Closed,
    /// Being dragged or animated toward open.
    Opening,
    /// Fully revealed; panel recognizer live.
    Open,
    /// Being dragged or animated toward closed.
    Closing,
}

/// Where a settle animation is headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettleTarget {
    Open,
    Closed,
}

/// Reference point captured at drag begin.
#[derive(Debug, Clone, Copy)]
struct DragGrip {
    reference_x: f32,
    /// Whether the grip belongs to an opening (edge) drag.
    opening: bool,
}

/// An in-flight settle animation awaiting host completion.
#[derive(Debug, Clone, Copy)]
struct PendingSettle {
    token: TransitionToken,
    target: SettleTarget,
}

// ---------------------------------------------------------------------------
// SlideOverController
// ---------------------------------------------------------------------------

/// Gesture-driven controller for one slide-over panel.
pub struct SlideOverController {
    pane: PaneKind,
    #[allow(dead_code)]
    source: ViewId,
    panel: ViewId,
    panel_width: f32,
    left_offset: f32,

    state: SlideState,
    /// Mirror of the host-side offset constraint.
    offset: f32,
    enabled: bool,
    /// Edge recognizer gate: true only when closed and not animating.
    edge_enabled: bool,
    shadow_on: bool,
    overlay: Option<ViewId>,

    grip: Option<DragGrip>,
    pending: Option<PendingSettle>,
    cancel_behavior: CancelBehavior,
    listeners: Vec<Box<dyn SlideOverListener>>,
    torn_down: bool,
}

impl std::fmt::Debug for SlideOverController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideOverController")
            .field("pane", &self.pane)
            .field("state", &self.state)
            .field("offset", &self.offset)
            .field("panel_width", &self.panel_width)
            .field("left_offset", &self.left_offset)
            .field("dragging", &self.grip.is_some())
            .field("settling", &self.pending.is_some())
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl SlideOverController {
    /// Create a controller for a panel that starts fully closed.
    ///
    /// Installs the panel width and off-screen offset constraints and the
    /// dimming overlay (at alpha 0) immediately; the panel becomes
    /// revealable through the edge drag feed or [`open`](Self::open).
    pub fn new(
        host: &mut dyn PaneHost,
        pane: PaneKind,
        source: ViewId,
        panel: ViewId,
        panel_width: f32,
        left_offset: f32,
        dimming_color: triptych_core::Color,
        cancel_behavior: CancelBehavior,
    ) -> Self {
        let offset = -panel_width + left_offset;
        host.set_panel_width(panel, panel_width);
        host.set_offset(panel, offset);
        let overlay = host.create_overlay(panel, dimming_color);
        host.set_alpha(overlay, MIN_DIM_ALPHA);

        tracing::debug!(pane = %pane, panel_width, left_offset, "slide-over created");
        Self {
            pane,
            source,
            panel,
            panel_width,
            left_offset,
            state: SlideState::Closed,
            offset,
            enabled: true,
            edge_enabled: true,
            shadow_on: false,
            overlay: Some(overlay),
            grip: None,
            pending: None,
            cancel_behavior,
            listeners: Vec::new(),
            torn_down: false,
        }
    }

    /// Register a lifecycle listener.
    pub fn add_listener(&mut self, listener: Box<dyn SlideOverListener>) {
        self.listeners.push(listener);
    }

    // --- queries ---

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SlideState {
        self.state
    }

    /// Whether the panel is fully open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == SlideState::Open
    }

    /// Current offset constraint value.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Panel width.
    #[must_use]
    pub fn panel_width(&self) -> f32 {
        self.panel_width
    }

    /// Stacking inset.
    #[must_use]
    pub fn left_offset(&self) -> f32 {
        self.left_offset
    }

    /// Whether the edge recognizer is currently live.
    #[must_use]
    pub fn is_edge_enabled(&self) -> bool {
        self.edge_enabled && self.enabled && !self.torn_down
    }

    /// The pane this controller animates.
    #[must_use]
    pub fn pane(&self) -> PaneKind {
        self.pane
    }

    /// The panel view this controller owns.
    #[must_use]
    pub fn panel(&self) -> ViewId {
        self.panel
    }

    /// Whether teardown has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Gate all gesture handling (explicit open/close still work).
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Refresh the panel width after a configuration change.
    ///
    /// Re-anchors a resting panel at its new closed/open offset; a panel
    /// mid-drag or mid-animation keeps its current offset until it next
    /// settles.
    pub fn set_panel_width(&mut self, host: &mut dyn PaneHost, width: f32) {
        if self.torn_down {
            return;
        }
        self.panel_width = width;
        host.set_panel_width(self.panel, width);
        if self.grip.is_none() && self.pending.is_none() {
            let resting = match self.state {
                SlideState::Closed => Some(self.closed_offset()),
                SlideState::Open => Some(self.open_offset()),
                _ => None,
            };
            if let Some(offset) = resting {
                self.offset = offset;
                host.set_offset(self.panel, offset);
            }
        }
    }

    // --- offsets ---

    fn open_offset(&self) -> f32 {
        self.left_offset
    }

    fn closed_offset(&self) -> f32 {
        -self.panel_width + self.left_offset
    }

    /// Distance from fully open, in points.
    fn open_remainder(&self) -> f32 {
        (self.offset - self.left_offset).abs()
    }

    // --- gesture feeds ---

    /// Feed from the edge recognizer on the source view. Begins an opening
    /// drag; live only when fully closed.
    pub fn handle_edge_drag(&mut self, host: &mut dyn PaneHost, sample: DragSample) {
        if self.torn_down || !self.enabled {
            return;
        }
        match sample.phase {
            DragPhase::Began => {
                if self.state != SlideState::Closed || !self.edge_enabled {
                    return;
                }
                self.begin_drag(host, sample.x, true);
            }
            _ => self.continue_drag(host, sample, true),
        }
    }

    /// Feed from the free recognizer on the panel view. Begins a closing
    /// drag; live only when fully open.
    pub fn handle_panel_drag(&mut self, host: &mut dyn PaneHost, sample: DragSample) {
        if self.torn_down || !self.enabled {
            return;
        }
        match sample.phase {
            DragPhase::Began => {
                if self.state != SlideState::Open {
                    return;
                }
                self.begin_drag(host, sample.x, false);
            }
            _ => self.continue_drag(host, sample, false),
        }
    }

    fn begin_drag(&mut self, host: &mut dyn PaneHost, x: f32, opening: bool) {
        self.grip = Some(DragGrip {
            reference_x: x,
            opening,
        });
        self.state = if opening {
            SlideState::Opening
        } else {
            SlideState::Closing
        };
        if !self.shadow_on {
            host.set_shadow(self.panel, true);
            self.shadow_on = true;
        }
        tracing::trace!(pane = %self.pane, opening, x, "drag began");
    }

    fn continue_drag(&mut self, host: &mut dyn PaneHost, sample: DragSample, opening: bool) {
        let Some(grip) = self.grip else {
            return;
        };
        if grip.opening != opening {
            return;
        }
        match sample.phase {
            DragPhase::Began => {}
            DragPhase::Changed => {
                let raw = if grip.opening {
                    sample.x - grip.reference_x - self.panel_width
                } else {
                    sample.x - grip.reference_x
                };
                self.apply_offset(host, clamp_drag_offset(raw, self.panel_width, self.left_offset));
            }
            DragPhase::Ended => {
                self.grip = None;
                self.settle_from_position(host);
            }
            DragPhase::Cancelled => {
                self.grip = None;
                match self.cancel_behavior {
                    CancelBehavior::Hold => {
                        // Panel stays wherever the drag left it; nothing is
                        // live here until an explicit open/close resolves it.
                        tracing::debug!(
                            pane = %self.pane,
                            offset = self.offset,
                            "drag cancelled, holding position"
                        );
                    }
                    CancelBehavior::SettleNearest => self.settle_from_position(host),
                }
            }
        }
    }

    fn apply_offset(&mut self, host: &mut dyn PaneHost, offset: f32) {
        self.offset = offset;
        host.set_offset(self.panel, offset);
        if let Some(overlay) = self.overlay {
            host.set_alpha(
                overlay,
                dim_alpha(offset, self.left_offset, self.panel_width),
            );
        }
    }

    /// Settle to whichever resting position is nearer.
    ///
    /// Under half-width from fully open settles open; at or beyond
    /// half-width settles closed.
    fn settle_from_position(&mut self, host: &mut dyn PaneHost) {
        let remainder = self.open_remainder();
        let target = if remainder < self.panel_width / 2.0 {
            SettleTarget::Open
        } else {
            SettleTarget::Closed
        };
        let travel = match target {
            SettleTarget::Open => remainder,
            SettleTarget::Closed => self.panel_width - remainder,
        };
        let duration = settle_duration(travel, self.panel_width);
        self.settle(host, target, duration, true);
    }

    // --- explicit operations ---

    /// Animate (or snap) to fully open. Identical animation and completion
    /// contract to gesture-driven settling.
    pub fn open(&mut self, host: &mut dyn PaneHost, animated: bool) {
        let duration = settle_duration(self.open_remainder(), self.panel_width);
        self.open_with_duration(host, duration, animated);
    }

    /// [`open`](Self::open) with an explicit duration.
    pub fn open_with_duration(
        &mut self,
        host: &mut dyn PaneHost,
        duration: Duration,
        animated: bool,
    ) {
        self.grip = None;
        self.settle(host, SettleTarget::Open, duration, animated);
    }

    /// Animate (or snap) to fully closed.
    pub fn close(&mut self, host: &mut dyn PaneHost, animated: bool) {
        let travel = self.panel_width - self.open_remainder();
        let duration = settle_duration(travel, self.panel_width);
        self.close_with_duration(host, duration, animated);
    }

    /// [`close`](Self::close) with an explicit duration.
    pub fn close_with_duration(
        &mut self,
        host: &mut dyn PaneHost,
        duration: Duration,
        animated: bool,
    ) {
        self.grip = None;
        self.settle(host, SettleTarget::Closed, duration, animated);
    }

    /// Tap on the dimming overlay: always closes.
    pub fn overlay_tapped(&mut self, host: &mut dyn PaneHost) {
        if self.torn_down {
            return;
        }
        self.close(host, true);
    }

    // --- settle machinery ---

    fn settle(
        &mut self,
        host: &mut dyn PaneHost,
        target: SettleTarget,
        duration: Duration,
        animated: bool,
    ) {
        if self.torn_down {
            return;
        }
        if self.pending.is_some() {
            // Mid-animation; a second settle cannot start.
            tracing::debug!(pane = %self.pane, ?target, "settle ignored, animation in flight");
            return;
        }

        self.notify_will(target);

        let settled = match target {
            SettleTarget::Open => self.state == SlideState::Open,
            SettleTarget::Closed => self.state == SlideState::Closed,
        };
        if settled {
            // Already at rest: no visible change, no new decorations; the
            // completion callback still fires once for this call.
            self.notify_did(target);
            return;
        }

        self.state = match target {
            SettleTarget::Open => SlideState::Opening,
            SettleTarget::Closed => SlideState::Closing,
        };
        self.edge_enabled = false;
        if target == SettleTarget::Open && !self.shadow_on {
            host.set_shadow(self.panel, true);
            self.shadow_on = true;
        }

        let final_offset = match target {
            SettleTarget::Open => self.open_offset(),
            SettleTarget::Closed => self.closed_offset(),
        };
        let final_alpha = match target {
            SettleTarget::Open => MAX_DIM_ALPHA,
            SettleTarget::Closed => MIN_DIM_ALPHA,
        };

        host.begin_transition(animated, duration);
        self.offset = final_offset;
        host.set_offset(self.panel, final_offset);
        if let Some(overlay) = self.overlay {
            host.set_alpha(overlay, final_alpha);
        }
        let token = TransitionToken::next();
        host.commit_transition(token);
        self.pending = Some(PendingSettle { token, target });
        tracing::debug!(pane = %self.pane, ?target, ?duration, token = token.get(), "settling");
    }

    /// Host callback: the transition committed under `token` finished.
    ///
    /// Returns `true` if the token belonged to this controller.
    pub fn transition_completed(&mut self, host: &mut dyn PaneHost, token: TransitionToken) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if pending.token != token {
            return false;
        }
        self.pending = None;

        match pending.target {
            SettleTarget::Open => {
                self.state = SlideState::Open;
                // Edge recognizer stays off while open; the panel
                // recognizer takes over.
                self.edge_enabled = false;
            }
            SettleTarget::Closed => {
                self.state = SlideState::Closed;
                self.edge_enabled = true;
                if self.shadow_on {
                    host.set_shadow(self.panel, false);
                    self.shadow_on = false;
                }
            }
        }
        self.notify_did(pending.target);
        true
    }

    fn notify_will(&mut self, target: SettleTarget) {
        let pane = self.pane;
        for listener in &mut self.listeners {
            match target {
                SettleTarget::Open => listener.will_open(pane),
                SettleTarget::Closed => listener.will_close(pane),
            }
        }
    }

    fn notify_did(&mut self, target: SettleTarget) {
        let pane = self.pane;
        for listener in &mut self.listeners {
            match target {
                SettleTarget::Open => listener.did_open(pane),
                SettleTarget::Closed => listener.did_close(pane),
            }
        }
    }

    // --- teardown ---

    /// Reverse every visual side effect, leaving the panel constraint-free.
    ///
    /// Ordered and idempotent: recognizers off, shadow off, overlay
    /// destroyed, panel constraints cleared. Safe to call more than once.
    pub fn teardown(&mut self, host: &mut dyn PaneHost) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.enabled = false;
        self.edge_enabled = false;
        self.grip = None;
        self.pending = None;

        if self.shadow_on {
            host.set_shadow(self.panel, false);
            self.shadow_on = false;
        }
        if let Some(overlay) = self.overlay.take() {
            host.destroy_overlay(overlay);
        }
        host.clear_panel_constraints(self.panel);
        tracing::debug!(pane = %self.pane, "slide-over torn down");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
