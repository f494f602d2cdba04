#![forbid(unsafe_code)]

//! Layout configuration: widths, colors, and collapse-decision callbacks.
//!
//! A [`Configuration`] is immutable per transition. The host supplies one
//! at construction and may replace it at runtime; replacement refreshes
//! widths and colors but does not re-run the visibility policy — only
//! size/trait-change events do that.
//!
//! Decision callbacks must be pure (`Fn`, no interior mutation of layout
//! state) and are invoked at most once per policy evaluation. A missing
//! callback means "never collapse" for that pane. Hosts should avoid
//! callback pairs where tab-bar and master collapse simultaneously unless
//! they want stacked side bars; master and detail collapsing simultaneously
//! is rejected outright by the policy.

use triptych_core::{Color, Size, TraitDescriptor};

/// A collapse-decision callback.
///
/// Receives the container size, the trait descriptor, and the configuration
/// it is stored in; returns whether the pane should collapse.
pub type CollapseDecision = dyn Fn(Size, TraitDescriptor, &Configuration) -> bool;

/// What a cancelled drag does to a partially dragged panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancelBehavior {
    /// Leave the panel at the position the cancelled drag left it.
    #[default]
    Hold,
    /// Treat the cancellation like a normal drag end: settle to whichever
    /// of open/closed is nearer.
    SettleNearest,
}

/// Immutable-per-transition layout configuration.
pub struct Configuration {
    /// Inline (and side-bar) width of the tab bar.
    pub tab_bar_width: f32,
    /// Inline (and side-bar) width of the master pane.
    pub master_width: f32,
    /// Minimum inline width the detail pane is willing to accept.
    pub detail_min_width: f32,
    /// Tab bar background.
    pub tab_bar_background: Color,
    /// Master pane background.
    pub master_background: Color,
    /// Detail pane background.
    pub detail_background: Color,
    /// Dimming overlay fill (alpha is animated separately).
    pub dimming_color: Color,
    /// Cancelled-drag policy for slide-over panels.
    pub cancel_behavior: CancelBehavior,
    collapse_tab_bar: Option<Box<CollapseDecision>>,
    collapse_master: Option<Box<CollapseDecision>>,
    collapse_detail: Option<Box<CollapseDecision>>,
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("tab_bar_width", &self.tab_bar_width)
            .field("master_width", &self.master_width)
            .field("detail_min_width", &self.detail_min_width)
            .field("cancel_behavior", &self.cancel_behavior)
            .field("has_tab_bar_callback", &self.collapse_tab_bar.is_some())
            .field("has_master_callback", &self.collapse_master.is_some())
            .field("has_detail_callback", &self.collapse_detail.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            tab_bar_width: 70.0,
            master_width: 320.0,
            detail_min_width: 400.0,
            tab_bar_background: Color::WHITE,
            master_background: Color::WHITE,
            detail_background: Color::WHITE,
            dimming_color: Color::BLACK,
            cancel_behavior: CancelBehavior::Hold,
            collapse_tab_bar: None,
            collapse_master: None,
            collapse_detail: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Configuration {
    /// Configuration with no collapse callbacks: nothing ever collapses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped adaptive rule set.
    ///
    /// - tab bar collapses at compact horizontal size class;
    /// - master collapses at regular horizontal size class when the width
    ///   remaining beside the tab bar and master is below the detail
    ///   minimum;
    /// - detail collapses (to modal) at compact horizontal size class.
    ///
    /// With default widths: 320pt compact phone collapses tab bar and
    /// detail; 768pt regular pad collapses master only; 1024pt regular pad
    /// collapses nothing.
    #[must_use]
    pub fn adaptive_defaults() -> Self {
        Self::new()
            .on_collapse_tab_bar(|_, traits, _| traits.is_horizontally_compact())
            .on_collapse_master(|size, traits, config| {
                !traits.is_horizontally_compact()
                    && size.width - config.tab_bar_width - config.master_width
                        < config.detail_min_width
            })
            .on_collapse_detail(|_, traits, _| traits.is_horizontally_compact())
    }

    /// Set the tab bar width (builder pattern).
    #[must_use]
    pub fn with_tab_bar_width(mut self, width: f32) -> Self {
        self.tab_bar_width = width;
        self
    }

    /// Set the master pane width (builder pattern).
    #[must_use]
    pub fn with_master_width(mut self, width: f32) -> Self {
        self.master_width = width;
        self
    }

    /// Set the detail minimum width (builder pattern).
    #[must_use]
    pub fn with_detail_min_width(mut self, width: f32) -> Self {
        self.detail_min_width = width;
        self
    }

    /// Set the cancelled-drag policy (builder pattern).
    #[must_use]
    pub fn with_cancel_behavior(mut self, behavior: CancelBehavior) -> Self {
        self.cancel_behavior = behavior;
        self
    }

    /// Install the tab-bar collapse callback (builder pattern).
    #[must_use]
    pub fn on_collapse_tab_bar(
        mut self,
        decide: impl Fn(Size, TraitDescriptor, &Configuration) -> bool + 'static,
    ) -> Self {
        self.collapse_tab_bar = Some(Box::new(decide));
        self
    }

    /// Install the master collapse callback (builder pattern).
    #[must_use]
    pub fn on_collapse_master(
        mut self,
        decide: impl Fn(Size, TraitDescriptor, &Configuration) -> bool + 'static,
    ) -> Self {
        self.collapse_master = Some(Box::new(decide));
        self
    }

    /// Install the detail collapse callback (builder pattern).
    #[must_use]
    pub fn on_collapse_detail(
        mut self,
        decide: impl Fn(Size, TraitDescriptor, &Configuration) -> bool + 'static,
    ) -> Self {
        self.collapse_detail = Some(Box::new(decide));
        self
    }
}

// ---------------------------------------------------------------------------
// Callback access (policy side)
// ---------------------------------------------------------------------------

impl Configuration {
    /// Run the tab-bar callback; absent means "never collapse".
    #[must_use]
    pub fn decide_tab_bar(&self, size: Size, traits: TraitDescriptor) -> bool {
        self.collapse_tab_bar
            .as_deref()
            .is_some_and(|decide| decide(size, traits, self))
    }

    /// Run the master callback; absent means "never collapse".
    #[must_use]
    pub fn decide_master(&self, size: Size, traits: TraitDescriptor) -> bool {
        self.collapse_master
            .as_deref()
            .is_some_and(|decide| decide(size, traits, self))
    }

    /// Run the detail callback; absent means "never collapse".
    #[must_use]
    pub fn decide_detail(&self, size: Size, traits: TraitDescriptor) -> bool {
        self.collapse_detail
            .as_deref()
            .is_some_and(|decide| decide(size, traits, self))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
