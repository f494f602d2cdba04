//! End-to-end adaptive layout scenarios.
//!
//! This suite drives a [`LayoutCoordinator`] through the shipped size/trait
//! table against a recording host, asserting stack membership, deferred
//! modal presentation, side-bar decoration lifecycles, and the
//! master/detail mutual-exclusion rule.

use std::time::Duration;

use triptych_core::{
    Color, DragSample, PaneHost, PaneKind, Size, TraitDescriptor, TransitionToken, ViewId,
};
use triptych_layout::{Configuration, LayoutCoordinator, PaneMode, SlideState, VisibilityFlags};

// ---------------------------------------------------------------------------
// Recording host
// ---------------------------------------------------------------------------

/// Host double that models stack and layer membership and journals every
/// decoration side effect, so tests can assert teardown left no residue.
#[derive(Default)]
struct RecordingHost {
    arranged: Vec<ViewId>,
    layered: Vec<(ViewId, usize)>,
    presented_modals: Vec<ViewId>,
    live_overlays: Vec<ViewId>,
    shadows_on: Vec<ViewId>,
    constrained: Vec<ViewId>,
    committed: Vec<TransitionToken>,
    next_overlay: u64,
}

impl RecordingHost {
    fn last_token(&self) -> TransitionToken {
        *self.committed.last().expect("a committed transition")
    }

    fn arranged_ids(&self) -> Vec<u64> {
        self.arranged.iter().map(|v| v.get()).collect()
    }

    fn is_layered(&self, view: ViewId) -> bool {
        self.layered.iter().any(|&(v, _)| v == view)
    }
}

impl PaneHost for RecordingHost {
    fn insert_arranged(&mut self, view: ViewId, index: usize) {
        let index = index.min(self.arranged.len());
        self.arranged.insert(index, view);
    }
    fn remove_arranged(&mut self, view: ViewId) {
        self.arranged.retain(|&v| v != view);
    }
    fn insert_layered(&mut self, view: ViewId, z_index: usize) {
        self.layered.push((view, z_index));
    }
    fn remove_layered(&mut self, view: ViewId) {
        self.layered.retain(|&(v, _)| v != view);
    }
    fn set_panel_width(&mut self, view: ViewId, _width: f32) {
        if !self.constrained.contains(&view) {
            self.constrained.push(view);
        }
    }
    fn set_offset(&mut self, view: ViewId, _offset: f32) {
        if !self.constrained.contains(&view) {
            self.constrained.push(view);
        }
    }
    fn clear_panel_constraints(&mut self, view: ViewId) {
        self.constrained.retain(|&v| v != view);
    }
    fn set_alpha(&mut self, _view: ViewId, _alpha: f32) {}
    fn set_shadow(&mut self, view: ViewId, visible: bool) {
        if visible {
            if !self.shadows_on.contains(&view) {
                self.shadows_on.push(view);
            }
        } else {
            self.shadows_on.retain(|&v| v != view);
        }
    }
    fn set_background(&mut self, _view: ViewId, _color: Color) {}
    fn create_overlay(&mut self, _below: ViewId, _color: Color) -> ViewId {
        self.next_overlay += 1;
        let overlay = ViewId::new(5000 + self.next_overlay);
        self.live_overlays.push(overlay);
        overlay
    }
    fn destroy_overlay(&mut self, overlay: ViewId) {
        self.live_overlays.retain(|&v| v != overlay);
    }
    fn insert_content(&mut self, _container: ViewId, _child: ViewId) {}
    fn remove_content(&mut self, _container: ViewId, _child: ViewId) {}
    fn set_content_translation(&mut self, _child: ViewId, _dx: f32) {}
    fn begin_transition(&mut self, _animated: bool, _duration: Duration) {}
    fn commit_transition(&mut self, token: TransitionToken) {
        self.committed.push(token);
    }
    fn present_modal(&mut self, view: ViewId) {
        self.presented_modals.push(view);
    }
    fn dismiss_modal(&mut self, view: ViewId) {
        self.presented_modals.retain(|&v| v != view);
    }
}

// ---------------------------------------------------------------------------
// Scenario plumbing
// ---------------------------------------------------------------------------

const CONTAINER: ViewId = ViewId::new(1);
const TAB_VIEW: ViewId = ViewId::new(10);
const MASTER_VIEW: ViewId = ViewId::new(11);
const DETAIL_VIEW: ViewId = ViewId::new(12);

fn attached(host: &mut RecordingHost) -> LayoutCoordinator {
    let mut coordinator = LayoutCoordinator::new(Configuration::adaptive_defaults(), CONTAINER);
    coordinator.attach(PaneKind::TabBar, TAB_VIEW, host);
    coordinator.attach(PaneKind::Master, MASTER_VIEW, host);
    coordinator.attach(PaneKind::Detail, DETAIL_VIEW, host);
    coordinator
}

fn resize(
    coordinator: &mut LayoutCoordinator,
    host: &mut RecordingHost,
    width: f32,
    traits: TraitDescriptor,
) {
    let before = host.committed.len();
    coordinator.size_changed(Size::new(width, 700.0), traits, host);
    if host.committed.len() > before {
        let token = host.last_token();
        assert!(coordinator.transition_completed(token, host));
    }
}

// ---------------------------------------------------------------------------
// Shipped configuration table
// ---------------------------------------------------------------------------

#[test]
fn compact_phone_collapses_tab_bar_and_detail() {
    let mut host = RecordingHost::default();
    let mut coordinator = attached(&mut host);

    resize(
        &mut coordinator,
        &mut host,
        320.0,
        TraitDescriptor::phone_compact(),
    );

    assert_eq!(
        coordinator.applied_flags(),
        VisibilityFlags {
            tab_bar_collapsed: true,
            master_collapsed: false,
            detail_collapsed: true,
        }
    );
    // Master alone holds the stack; the detail is fully detached and
    // presented modally, the tab bar waits collapsed at the edge.
    assert_eq!(host.arranged_ids(), vec![11]);
    assert!(!host.is_layered(DETAIL_VIEW));
    assert_eq!(host.presented_modals, vec![DETAIL_VIEW]);
    assert_eq!(coordinator.mode(PaneKind::TabBar), PaneMode::SideBar);
}

#[test]
fn regular_pad_768_collapses_master_only() {
    let mut host = RecordingHost::default();
    let mut coordinator = attached(&mut host);

    resize(
        &mut coordinator,
        &mut host,
        768.0,
        TraitDescriptor::pad_regular(),
    );

    assert_eq!(
        coordinator.applied_flags(),
        VisibilityFlags {
            tab_bar_collapsed: false,
            master_collapsed: true,
            detail_collapsed: false,
        }
    );
    assert_eq!(host.arranged_ids(), vec![10, 12]);
    assert!(host.presented_modals.is_empty());
    assert_eq!(coordinator.mode(PaneKind::Master), PaneMode::SideBar);
}

#[test]
fn regular_pad_1024_is_fully_inline() {
    let mut host = RecordingHost::default();
    let mut coordinator = attached(&mut host);

    resize(
        &mut coordinator,
        &mut host,
        1024.0,
        TraitDescriptor::pad_regular(),
    );

    assert_eq!(coordinator.applied_flags(), VisibilityFlags::INLINE);
    assert_eq!(host.arranged_ids(), vec![10, 11, 12]);
    assert!(host.presented_modals.is_empty());
    assert!(host.live_overlays.is_empty());
}

// ---------------------------------------------------------------------------
// Rotation round trips
// ---------------------------------------------------------------------------

#[test]
fn rotation_round_trip_leaves_no_residue() {
    let mut host = RecordingHost::default();
    let mut coordinator = attached(&mut host);

    // 1024 → 768 → 1024: master collapses to a side bar and returns.
    resize(
        &mut coordinator,
        &mut host,
        1024.0,
        TraitDescriptor::pad_regular(),
    );
    resize(
        &mut coordinator,
        &mut host,
        768.0,
        TraitDescriptor::pad_regular(),
    );
    assert_eq!(host.live_overlays.len(), 1);
    assert_eq!(host.arranged_ids(), vec![10, 12]);

    resize(
        &mut coordinator,
        &mut host,
        1024.0,
        TraitDescriptor::pad_regular(),
    );

    // Initial stack order restored, every decoration reversed.
    assert_eq!(host.arranged_ids(), vec![10, 11, 12]);
    assert!(host.live_overlays.is_empty());
    assert!(host.shadows_on.is_empty());
    // The returning pane's temporary offset constraints came off at
    // transition completion; the stack owns it again.
    assert!(!host.constrained.contains(&MASTER_VIEW));
    for pane in PaneKind::ALL {
        assert_eq!(coordinator.mode(pane), PaneMode::Inline);
    }
}

#[test]
fn phone_to_pad_restores_modal_detail_inline() {
    let mut host = RecordingHost::default();
    let mut coordinator = attached(&mut host);

    resize(
        &mut coordinator,
        &mut host,
        320.0,
        TraitDescriptor::phone_compact(),
    );
    assert_eq!(host.presented_modals, vec![DETAIL_VIEW]);

    resize(
        &mut coordinator,
        &mut host,
        1024.0,
        TraitDescriptor::pad_regular(),
    );
    assert!(host.presented_modals.is_empty());
    assert!(host.is_layered(DETAIL_VIEW));
    assert_eq!(host.arranged_ids(), vec![10, 11, 12]);
}

// ---------------------------------------------------------------------------
// Mutual exclusion
// ---------------------------------------------------------------------------

#[test]
fn master_detail_double_collapse_is_rejected() {
    let mut host = RecordingHost::default();
    let config = Configuration::new()
        .on_collapse_master(|_, _, _| true)
        .on_collapse_detail(|_, _, _| true);
    let mut coordinator = LayoutCoordinator::new(config, CONTAINER);
    coordinator.attach(PaneKind::TabBar, TAB_VIEW, &mut host);
    coordinator.attach(PaneKind::Master, MASTER_VIEW, &mut host);
    coordinator.attach(PaneKind::Detail, DETAIL_VIEW, &mut host);

    let plan = coordinator.size_changed(
        Size::new(640.0, 480.0),
        TraitDescriptor::default(),
        &mut host,
    );

    // Rejected evaluation applies neither flag: layout untouched.
    assert!(plan.is_empty());
    assert_eq!(host.arranged_ids(), vec![10, 11, 12]);
    assert!(host.committed.is_empty());
    assert_eq!(coordinator.applied_flags(), VisibilityFlags::INLINE);
}

// ---------------------------------------------------------------------------
// Gestures through the coordinator
// ---------------------------------------------------------------------------

#[test]
fn collapsed_master_opens_by_edge_drag_and_closes_by_overlay_tap() {
    let mut host = RecordingHost::default();
    let mut coordinator = attached(&mut host);
    resize(
        &mut coordinator,
        &mut host,
        768.0,
        TraitDescriptor::pad_regular(),
    );

    // Edge drag past half-width, release: settles open.
    coordinator.edge_drag(PaneKind::Master, DragSample::began(0.0), &mut host);
    coordinator.edge_drag(PaneKind::Master, DragSample::changed(200.0), &mut host);
    coordinator.edge_drag(PaneKind::Master, DragSample::ended(200.0), &mut host);
    let token = host.last_token();
    assert!(coordinator.transition_completed(token, &mut host));
    {
        let master = coordinator
            .slide_over_mut(PaneKind::Master)
            .expect("collapsed master has a controller");
        assert_eq!(master.state(), SlideState::Open);
    }

    // Tap the dimming overlay: settles closed again.
    coordinator.overlay_tapped(PaneKind::Master, &mut host);
    let token = host.last_token();
    assert!(coordinator.transition_completed(token, &mut host));
    let master = coordinator
        .slide_over_mut(PaneKind::Master)
        .expect("controller survives close");
    assert_eq!(master.state(), SlideState::Closed);
}

#[test]
fn stacked_side_bars_when_tab_bar_and_master_both_collapse() {
    let mut host = RecordingHost::default();
    let config = Configuration::adaptive_defaults()
        .on_collapse_tab_bar(|_, _, _| true)
        .on_collapse_master(|_, _, _| true)
        .on_collapse_detail(|_, _, _| false);
    let mut coordinator = LayoutCoordinator::new(config, CONTAINER);
    coordinator.attach(PaneKind::TabBar, TAB_VIEW, &mut host);
    coordinator.attach(PaneKind::Master, MASTER_VIEW, &mut host);
    coordinator.attach(PaneKind::Detail, DETAIL_VIEW, &mut host);

    resize(
        &mut coordinator,
        &mut host,
        480.0,
        TraitDescriptor::default(),
    );

    // Detail alone stays inline; two side bars exist, the tab bar's inset
    // by the master side bar's width so it sits "inside" it.
    assert_eq!(host.arranged_ids(), vec![12]);
    assert_eq!(host.live_overlays.len(), 2);
    let tab = coordinator
        .slide_over_mut(PaneKind::TabBar)
        .expect("collapsed tab bar has a controller");
    assert_eq!(tab.left_offset(), 320.0);
    assert_eq!(tab.offset(), 320.0 - 70.0);
}
