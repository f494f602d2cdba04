#![forbid(unsafe_code)]

//! Layout coordinator.
//!
//! [`LayoutCoordinator`] owns the three panes' arrangement: stack
//! membership and order, layering, per-pane presentation mode, and the
//! slide-over controllers it creates and destroys as panes enter and leave
//! side-bar mode. It is the single writer of stack membership; each
//! slide-over controller is the single writer of its own offset constraint
//! and overlay — no two components mutate the same constraint.
//!
//! # Event flow
//!
//! The host delivers `size_changed` on every geometry or trait change. The
//! coordinator evaluates the visibility policy, diffs against the applied
//! flags, sequences the resulting pane operations ([`plan`]), and executes
//! them inside one coordinated host transition. Completion arrives later
//! through `transition_completed`, which also finishes deferred work
//! (modal presentation, outgoing-content removal, constraint restoration).
//!
//! # Invariants
//!
//! 1. At most one [`SlideOverController`] exists per pane; installing a
//!    second tears down the first.
//! 2. A rejected policy evaluation changes nothing: prior flags and modes
//!    are retained, the conflict is logged at error level.
//! 3. Pane stack order is fixed (tab bar, master, detail) regardless of
//!    how panes come and go; layering stays reversed.
//!
//! # Failure Modes
//!
//! - Operations on unattached panes, or content swaps on the tab bar, are
//!   warn-logged no-ops. Production presentation code must not crash on
//!   host programming errors.

use rustc_hash::FxHashMap;
use triptych_core::{
    BASE_SETTLE_DURATION, CoordinatorListener, DragSample, PaneHost, PaneKind, Size,
    TraitDescriptor, TransitionToken, ViewId,
};

use crate::config::Configuration;
use crate::pane::{PaneMode, VisibilityFlags};
use crate::plan::{self, PaneOp, TransitionPhase, TransitionPlan};
use crate::slide_over::SlideOverController;

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// Everything the coordinator tracks for one pane.
#[derive(Default)]
struct PaneSlot {
    view: Option<ViewId>,
    mode: PaneMode,
    /// Current content child (master/detail only).
    content: Option<ViewId>,
    slide_over: Option<SlideOverController>,
}

/// Work deferred to the completion of an in-flight coordinated transition.
struct PendingTransition {
    token: TransitionToken,
    /// Detail view to hand to the modal delegate once layout settles.
    deferred_modal: Option<ViewId>,
    /// Outgoing content children to remove: (container, child).
    content_cleanup: Vec<(ViewId, ViewId)>,
    /// Panes that slid inline; their temporary offset constraints come off
    /// so the shared stack constraints take over again.
    restore_constraints: Vec<ViewId>,
}

// ---------------------------------------------------------------------------
// LayoutCoordinator
// ---------------------------------------------------------------------------

/// Owner of the three-pane arrangement and its adaptive transitions.
pub struct LayoutCoordinator {
    config: Configuration,
    /// The host's root container view (edge-drag source, overlay parent).
    container: ViewId,
    slots: [PaneSlot; 3],
    applied: VisibilityFlags,
    view_index: FxHashMap<ViewId, PaneKind>,
    pending: Option<PendingTransition>,
    listeners: Vec<Box<dyn CoordinatorListener>>,
}

impl std::fmt::Debug for LayoutCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutCoordinator")
            .field("applied", &self.applied)
            .field("attached", &self.view_index.len())
            .field("transition_in_flight", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

impl LayoutCoordinator {
    /// Create a coordinator for the given container view.
    #[must_use]
    pub fn new(config: Configuration, container: ViewId) -> Self {
        Self {
            config,
            container,
            slots: Default::default(),
            applied: VisibilityFlags::INLINE,
            view_index: FxHashMap::default(),
            pending: None,
            listeners: Vec::new(),
        }
    }

    /// Register a coordinator-level listener.
    pub fn add_listener(&mut self, listener: Box<dyn CoordinatorListener>) {
        self.listeners.push(listener);
    }

    // --- queries ---

    /// Last successfully applied visibility flags.
    #[must_use]
    pub fn applied_flags(&self) -> VisibilityFlags {
        self.applied
    }

    /// Current mode of one pane.
    #[must_use]
    pub fn mode(&self, pane: PaneKind) -> PaneMode {
        self.slots[pane.stack_ordinal()].mode
    }

    /// The view attached for one pane, if any.
    #[must_use]
    pub fn view(&self, pane: PaneKind) -> Option<ViewId> {
        self.slots[pane.stack_ordinal()].view
    }

    /// Current content child of one pane, if any.
    #[must_use]
    pub fn content(&self, pane: PaneKind) -> Option<ViewId> {
        self.slots[pane.stack_ordinal()].content
    }

    /// Reverse lookup: which pane does a host view belong to?
    ///
    /// Hosts use this to route recognizer events to the right pane.
    #[must_use]
    pub fn pane_for_view(&self, view: ViewId) -> Option<PaneKind> {
        self.view_index.get(&view).copied()
    }

    /// Mutable access to a pane's live slide-over controller, e.g. to add
    /// listeners after a transition installed one.
    pub fn slide_over_mut(&mut self, pane: PaneKind) -> Option<&mut SlideOverController> {
        self.slots[pane.stack_ordinal()].slide_over.as_mut()
    }

    fn slot(&self, pane: PaneKind) -> &PaneSlot {
        &self.slots[pane.stack_ordinal()]
    }

    fn slot_mut(&mut self, pane: PaneKind) -> &mut PaneSlot {
        &mut self.slots[pane.stack_ordinal()]
    }

    /// Side-bar (and snap) width for a pane.
    fn width_for(&self, pane: PaneKind) -> f32 {
        match pane {
            PaneKind::TabBar => self.config.tab_bar_width,
            PaneKind::Master => self.config.master_width,
            PaneKind::Detail => self.config.detail_min_width,
        }
    }

    fn background_for(&self, pane: PaneKind) -> triptych_core::Color {
        match pane {
            PaneKind::TabBar => self.config.tab_bar_background,
            PaneKind::Master => self.config.master_background,
            PaneKind::Detail => self.config.detail_background,
        }
    }

    /// Arranged index for a pane: count of inline panes to its left.
    fn arranged_index(&self, pane: PaneKind) -> usize {
        PaneKind::ALL
            .into_iter()
            .take(pane.stack_ordinal())
            .filter(|&other| self.slot(other).mode == PaneMode::Inline)
            .count()
    }

    // --- attachment ---

    /// Attach a pane view, inline, at its fixed stack position.
    ///
    /// Insertion is left-to-right in the arranged stack and reversed in the
    /// layering container (detail bottommost, tab bar topmost) so that
    /// later side-bar conversions animate panes sliding over their
    /// neighbors. Re-attaching an occupied pane is a warn-logged no-op.
    pub fn attach(&mut self, pane: PaneKind, view: ViewId, host: &mut dyn PaneHost) {
        if self.slot(pane).view.is_some() {
            tracing::warn!(pane = %pane, "attach ignored, pane already occupied");
            return;
        }
        let index = self.arranged_index(pane);
        host.insert_arranged(view, index);
        host.insert_layered(view, pane.z_index());
        host.set_background(view, self.background_for(pane));

        let slot = self.slot_mut(pane);
        slot.view = Some(view);
        slot.mode = PaneMode::Inline;
        self.view_index.insert(view, pane);
        tracing::debug!(pane = %pane, %view, index, "pane attached");
    }

    // --- size/trait-change entry point ---

    /// Evaluate policy for a size/trait change and execute the resulting
    /// transition. Returns the executed plan (empty when nothing changed
    /// or the evaluation was rejected).
    pub fn size_changed(
        &mut self,
        size: Size,
        traits: TraitDescriptor,
        host: &mut dyn PaneHost,
    ) -> TransitionPlan {
        let flags = match crate::policy::evaluate(size, traits, &self.config) {
            Ok(flags) => flags,
            Err(conflict) => {
                tracing::error!(%conflict, "configuration conflict, layout unchanged");
                return TransitionPlan::default();
            }
        };
        if flags == self.applied {
            return TransitionPlan::default();
        }

        let current = [
            self.slot(PaneKind::TabBar).mode,
            self.slot(PaneKind::Master).mode,
            self.slot(PaneKind::Detail).mode,
        ];
        let plan = plan::plan(current, flags);
        self.applied = flags;
        if plan.is_empty() {
            return plan;
        }

        self.finalize_stale_pending(host);
        self.execute(&plan, flags, host);
        plan
    }

    /// A transition superseded before its completion callback arrived is
    /// finalized eagerly so its deferred work is not lost.
    fn finalize_stale_pending(&mut self, host: &mut dyn PaneHost) {
        if let Some(stale) = self.pending.take() {
            tracing::warn!(
                token = stale.token.get(),
                "new transition before previous completed; finalizing previous"
            );
            self.finalize(stale, host);
        }
    }

    fn execute(&mut self, plan: &TransitionPlan, target: VisibilityFlags, host: &mut dyn PaneHost) {
        // Synchronous pre-pass: panes entering the stack snap to an
        // off-screen start before the animation context opens, so every
        // insertion slides in rather than popping in place.
        let inserts: Vec<PaneOp> = plan.phase_ops(TransitionPhase::Insert).copied().collect();
        for op in &inserts {
            self.prepare_insert(*op, host);
        }

        host.begin_transition(true, BASE_SETTLE_DURATION);

        let mut restore_constraints = Vec::new();
        for op in &inserts {
            if let Some(view) = self.slot(op.pane).view {
                host.set_offset(view, 0.0);
                restore_constraints.push(view);
            }
        }
        let side_bars: Vec<PaneOp> = plan.phase_ops(TransitionPhase::SideBar).copied().collect();
        for op in side_bars {
            let left_offset = if op.pane == PaneKind::TabBar && target.master_collapsed {
                // Stacked side bars: the tab bar sits inside the master's.
                self.config.master_width
            } else {
                0.0
            };
            let width = self.width_for(op.pane);
            if let Some(view) = self.slot(op.pane).view {
                host.remove_arranged(view);
            }
            self.install_side_bar(op.pane, width, left_offset, host);
        }

        let modals: Vec<PaneOp> = plan.phase_ops(TransitionPhase::Modal).copied().collect();

        let mut deferred_modal = None;
        for op in modals {
            deferred_modal = self.prepare_modal_hide(op.pane, host);
        }

        let token = TransitionToken::next();
        host.commit_transition(token);
        self.pending = Some(PendingTransition {
            token,
            deferred_modal,
            content_cleanup: Vec::new(),
            restore_constraints,
        });
    }

    fn prepare_insert(&mut self, op: PaneOp, host: &mut dyn PaneHost) {
        let Some(view) = self.slot(op.pane).view else {
            return;
        };
        match op.from {
            PaneMode::SideBar => {
                if let Some(mut controller) = self.slot_mut(op.pane).slide_over.take() {
                    controller.teardown(host);
                }
            }
            PaneMode::ModalHidden => {
                host.dismiss_modal(view);
                host.insert_layered(view, op.pane.z_index());
                self.notify_modal_changed(false);
            }
            PaneMode::Inline | PaneMode::Detached => {}
        }
        // Off-screen start, then insert at the fixed stack position.
        host.set_panel_width(view, self.width_for(op.pane));
        host.set_offset(view, -self.width_for(op.pane));
        self.slot_mut(op.pane).mode = PaneMode::Inline;
        let index = self.arranged_index(op.pane);
        host.insert_arranged(view, index);
    }

    fn prepare_modal_hide(&mut self, pane: PaneKind, host: &mut dyn PaneHost) -> Option<ViewId> {
        let view = self.slot(pane).view?;
        if let Some(mut controller) = self.slot_mut(pane).slide_over.take() {
            controller.teardown(host);
        }
        host.remove_arranged(view);
        host.remove_layered(view);
        self.slot_mut(pane).mode = PaneMode::ModalHidden;
        Some(view)
    }

    // --- direct pane operations ---

    /// Convert a pane to side-bar mode: out of the arranged stack (still
    /// layered), pinned off-screen at `width`, with a fresh slide-over
    /// controller. A second controller for the same pane tears down the
    /// first.
    pub fn move_to_side_bar(
        &mut self,
        pane: PaneKind,
        width: f32,
        left_offset: f32,
        host: &mut dyn PaneHost,
    ) {
        let Some(view) = self.slot(pane).view else {
            tracing::warn!(pane = %pane, "move_to_side_bar ignored, pane not attached");
            return;
        };
        host.remove_arranged(view);
        self.install_side_bar(pane, width, left_offset, host);
    }

    fn install_side_bar(
        &mut self,
        pane: PaneKind,
        width: f32,
        left_offset: f32,
        host: &mut dyn PaneHost,
    ) {
        let Some(view) = self.slot(pane).view else {
            return;
        };
        if let Some(mut previous) = self.slot_mut(pane).slide_over.take() {
            previous.teardown(host);
        }
        let controller = SlideOverController::new(
            host,
            pane,
            self.container,
            view,
            width,
            left_offset,
            self.config.dimming_color,
            self.config.cancel_behavior,
        );
        let slot = self.slot_mut(pane);
        slot.slide_over = Some(controller);
        slot.mode = PaneMode::SideBar;
    }

    /// Return a side-bar pane to the inline stack at its fixed position,
    /// destroying its controller and every decoration it installed.
    pub fn return_from_side_bar(&mut self, pane: PaneKind, host: &mut dyn PaneHost) {
        if self.slot(pane).mode != PaneMode::SideBar {
            tracing::warn!(pane = %pane, "return_from_side_bar ignored, pane not in side-bar mode");
            return;
        }
        if let Some(mut controller) = self.slot_mut(pane).slide_over.take() {
            controller.teardown(host);
        }
        let Some(view) = self.slot(pane).view else {
            return;
        };
        self.slot_mut(pane).mode = PaneMode::Inline;
        let index = self.arranged_index(pane);
        host.insert_arranged(view, index);
    }

    /// Detach a pane from the in-window layout entirely; the host presents
    /// it full-screen instead.
    pub fn hide_for_modal(&mut self, pane: PaneKind, host: &mut dyn PaneHost) {
        if self.slot(pane).view.is_none() {
            tracing::warn!(pane = %pane, "hide_for_modal ignored, pane not attached");
            return;
        }
        if let Some(view) = self.prepare_modal_hide(pane, host) {
            host.present_modal(view);
            self.notify_modal_changed(true);
        }
    }

    /// Reattach a modal-hidden pane to the inline layout.
    pub fn restore_from_modal(&mut self, pane: PaneKind, host: &mut dyn PaneHost) {
        if self.slot(pane).mode != PaneMode::ModalHidden {
            tracing::warn!(pane = %pane, "restore_from_modal ignored, pane not modal-hidden");
            return;
        }
        let Some(view) = self.slot(pane).view else {
            return;
        };
        host.dismiss_modal(view);
        host.insert_layered(view, pane.z_index());
        self.slot_mut(pane).mode = PaneMode::Inline;
        let index = self.arranged_index(pane);
        host.insert_arranged(view, index);
        self.notify_modal_changed(false);
    }

    // --- content replacement ---

    /// Swap a master/detail pane's content child.
    ///
    /// With both an old and a new child: a horizontal slide-past when
    /// animated, an immediate swap otherwise. Insert-only fades the new
    /// child in; remove-only fades the old child out. Outgoing children
    /// are removed at animation completion.
    pub fn replace_content(
        &mut self,
        pane: PaneKind,
        new: Option<ViewId>,
        animated: bool,
        host: &mut dyn PaneHost,
    ) {
        if pane == PaneKind::TabBar {
            tracing::warn!("replace_content ignored for the tab bar");
            return;
        }
        let Some(container) = self.slot(pane).view else {
            tracing::warn!(pane = %pane, "replace_content ignored, pane not attached");
            return;
        };
        let old = self.slot(pane).content;
        if old == new {
            return;
        }
        self.slot_mut(pane).content = new;
        let width = self.width_for(pane);

        match (old, new) {
            (Some(old), Some(new)) if animated => {
                // Slide-past: new enters from the trailing edge while the
                // old departs through the leading edge.
                host.set_content_translation(new, width);
                host.insert_content(container, new);
                self.finalize_stale_pending(host);
                host.begin_transition(true, BASE_SETTLE_DURATION);
                host.set_content_translation(new, 0.0);
                host.set_content_translation(old, -width);
                let token = TransitionToken::next();
                host.commit_transition(token);
                self.pending = Some(PendingTransition {
                    token,
                    deferred_modal: None,
                    content_cleanup: vec![(container, old)],
                    restore_constraints: Vec::new(),
                });
            }
            (Some(old), Some(new)) => {
                host.insert_content(container, new);
                host.remove_content(container, old);
            }
            (None, Some(new)) => {
                host.set_alpha(new, 0.0);
                host.insert_content(container, new);
                self.finalize_stale_pending(host);
                host.begin_transition(animated, BASE_SETTLE_DURATION);
                host.set_alpha(new, 1.0);
                let token = TransitionToken::next();
                host.commit_transition(token);
                self.pending = Some(PendingTransition {
                    token,
                    deferred_modal: None,
                    content_cleanup: Vec::new(),
                    restore_constraints: Vec::new(),
                });
            }
            (Some(old), None) => {
                self.finalize_stale_pending(host);
                host.begin_transition(animated, BASE_SETTLE_DURATION);
                host.set_alpha(old, 0.0);
                let token = TransitionToken::next();
                host.commit_transition(token);
                self.pending = Some(PendingTransition {
                    token,
                    deferred_modal: None,
                    content_cleanup: vec![(container, old)],
                    restore_constraints: Vec::new(),
                });
            }
            (None, None) => {}
        }
    }

    // --- configuration ---

    /// Replace the configuration, refreshing widths and colors.
    ///
    /// Does not re-run the visibility policy; only size/trait events do.
    pub fn set_configuration(&mut self, config: Configuration, host: &mut dyn PaneHost) {
        self.config = config;
        for pane in PaneKind::ALL {
            let background = self.background_for(pane);
            let width = self.width_for(pane);
            let slot = self.slot_mut(pane);
            if let Some(view) = slot.view {
                host.set_background(view, background);
            }
            if let Some(controller) = slot.slide_over.as_mut() {
                controller.set_panel_width(host, width);
            }
        }
    }

    // --- event routing ---

    /// Route an edge-recognizer sample to a pane's slide-over controller.
    pub fn edge_drag(&mut self, pane: PaneKind, sample: DragSample, host: &mut dyn PaneHost) {
        if let Some(controller) = self.slot_mut(pane).slide_over.as_mut() {
            controller.handle_edge_drag(host, sample);
        }
    }

    /// Route a panel-recognizer sample to a pane's slide-over controller.
    pub fn panel_drag(&mut self, pane: PaneKind, sample: DragSample, host: &mut dyn PaneHost) {
        if let Some(controller) = self.slot_mut(pane).slide_over.as_mut() {
            controller.handle_panel_drag(host, sample);
        }
    }

    /// A tap landed on a pane's dimming overlay.
    pub fn overlay_tapped(&mut self, pane: PaneKind, host: &mut dyn PaneHost) {
        if let Some(controller) = self.slot_mut(pane).slide_over.as_mut() {
            controller.overlay_tapped(host);
        }
    }

    /// The host's tab UI changed selection.
    pub fn select_tab(&mut self, index: usize) {
        for listener in &mut self.listeners {
            listener.tab_selected(index);
        }
    }

    // --- completion ---

    /// Host callback: the transition committed under `token` finished.
    ///
    /// Routed first to the coordinator's own pending work, then to
    /// whichever slide-over controller awaits the token. Returns whether
    /// anyone consumed it.
    pub fn transition_completed(&mut self, token: TransitionToken, host: &mut dyn PaneHost) -> bool {
        if let Some(pending) = self.pending.take() {
            if pending.token == token {
                self.finalize(pending, host);
                return true;
            }
            self.pending = Some(pending);
        }
        for slot in &mut self.slots {
            if let Some(controller) = slot.slide_over.as_mut()
                && controller.transition_completed(host, token)
            {
                return true;
            }
        }
        tracing::debug!(token = token.get(), "unrecognized transition token");
        false
    }

    fn finalize(&mut self, pending: PendingTransition, host: &mut dyn PaneHost) {
        for view in pending.restore_constraints {
            host.clear_panel_constraints(view);
        }
        for (container, child) in pending.content_cleanup {
            host.remove_content(container, child);
        }
        if let Some(view) = pending.deferred_modal {
            host.present_modal(view);
            self.notify_modal_changed(true);
        }
    }

    fn notify_modal_changed(&mut self, presented: bool) {
        for listener in &mut self.listeners {
            listener.detail_presentation_changed(presented);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
