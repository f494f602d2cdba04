#![forbid(unsafe_code)]

//! Tab bar item model.
//!
//! [`TabItemModel`] is the coordinator-side model of the tab bar's
//! contents: an ordered run of selectable tab items followed by a trailing
//! run of action items (settings, search and the like) that are tappable
//! but never selected. The model knows nothing about rendering; the host
//! reads it back to rebuild the bar after each mutation.
//!
//! # Failure Modes
//!
//! Out-of-bounds inserts, removes, and selections are host programming
//! errors; production UI code must not crash on them. Every such call is a
//! warn-logged no-op.

use triptych_core::ViewId;

/// Ordered tab items plus trailing action items, with one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabItemModel {
    items: Vec<ViewId>,
    actions: Vec<ViewId>,
    selected: Option<usize>,
}

impl TabItemModel {
    /// An empty model with no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- queries ---

    /// Selectable tab items, in bar order.
    #[must_use]
    pub fn items(&self) -> &[ViewId] {
        &self.items
    }

    /// Trailing action items, in bar order.
    #[must_use]
    pub fn actions(&self) -> &[ViewId] {
        &self.actions
    }

    /// Index of the selected tab item, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    // --- tab items ---

    /// Insert a tab item at `index` (`0..=len`). The selection tracks its
    /// item: inserting before it shifts it right.
    pub fn insert_item(&mut self, index: usize, item: ViewId) {
        if index > self.items.len() {
            tracing::warn!(index, len = self.items.len(), "insert_item out of bounds");
            return;
        }
        self.items.insert(index, item);
        if let Some(selected) = self.selected
            && index <= selected
        {
            self.selected = Some(selected + 1);
        }
    }

    /// Remove the tab item at `index`. Removing the selected item clears
    /// the selection; removing before it shifts it left.
    pub fn remove_item(&mut self, index: usize) {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "remove_item out of bounds");
            return;
        }
        self.items.remove(index);
        self.selected = match self.selected {
            Some(selected) if index < selected => Some(selected - 1),
            Some(selected) if index == selected => None,
            other => other,
        };
    }

    // --- action items ---

    /// Insert an action item at `index` (`0..=len`) in the trailing run.
    pub fn insert_action(&mut self, index: usize, item: ViewId) {
        if index > self.actions.len() {
            tracing::warn!(index, len = self.actions.len(), "insert_action out of bounds");
            return;
        }
        self.actions.insert(index, item);
    }

    /// Remove the action item at `index`.
    pub fn remove_action(&mut self, index: usize) {
        if index >= self.actions.len() {
            tracing::warn!(index, len = self.actions.len(), "remove_action out of bounds");
            return;
        }
        self.actions.remove(index);
    }

    // --- selection ---

    /// Select the tab item at `index`.
    ///
    /// Returns `true` when the selection actually changed, so callers know
    /// whether to fan the change out to listeners. Re-selecting the
    /// current item and out-of-range indices return `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "select out of bounds");
            return false;
        }
        if self.selected == Some(index) {
            return false;
        }
        self.selected = Some(index);
        true
    }
}
