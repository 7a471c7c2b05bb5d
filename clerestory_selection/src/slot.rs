// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One context's selection: at most one item plus a revision counter.

/// The selection of a single context.
///
/// A slot holds at most one selected item. Mutations follow single-selection
/// semantics: setting an item displaces the previous one, and toggling an
/// unselected item replaces rather than extends. All mutating methods return
/// `true` only when the selection actually changed, and the revision counter
/// bumps exactly on those calls — a no-op (selecting the already-selected
/// item, clearing an empty slot) leaves both untouched.
///
/// The revision is local to one slot and monotonically increasing; observers
/// can compare revisions instead of item values to detect movement.
#[derive(Clone, Debug)]
pub struct SelectionSlot<T> {
    selected: Option<T>,
    revision: u64,
}

impl<T> SelectionSlot<T> {
    /// Creates an empty slot with revision 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            revision: 0,
        }
    }

    /// Returns a reference to the selected item, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Returns the current revision counter.
    ///
    /// Starts at 0 and bumps once per semantic change.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Clears the selection.
    ///
    /// Returns `true` if an item was deselected, `false` if the slot was
    /// already empty.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.selected = None;
        self.bump();
        true
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> SelectionSlot<T>
where
    T: PartialEq,
{
    /// Returns `true` if `item` is the selected item.
    #[must_use]
    pub fn is_selected(&self, item: &T) -> bool {
        self.selected.as_ref() == Some(item)
    }

    /// Replaces the selection with `item`, or clears it for `None`.
    ///
    /// Any previously selected item is displaced. Returns `true` if the
    /// selection changed.
    pub fn set(&mut self, item: Option<T>) -> bool {
        if self.selected == item {
            return false;
        }
        self.selected = item;
        self.bump();
        true
    }

    /// Selects `item`, displacing any previous selection.
    ///
    /// Equivalent to `set(Some(item))`; this is the typical mapping for a
    /// plain pick.
    pub fn select(&mut self, item: T) -> bool {
        self.set(Some(item))
    }

    /// Toggles `item` under single-selection semantics.
    ///
    /// - If `item` is the selected item, the slot is cleared.
    /// - Otherwise `item` becomes the selection, displacing whatever was
    ///   selected before. Toggling never accumulates a second item.
    ///
    /// Always returns `true`: a toggle changes the selection by definition.
    pub fn toggle(&mut self, item: T) -> bool {
        if self.is_selected(&item) {
            self.selected = None;
        } else {
            self.selected = Some(item);
        }
        self.bump();
        true
    }
}

impl<T> Default for SelectionSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_basics() {
        let slot = SelectionSlot::<u32>::new();
        assert!(slot.is_empty());
        assert_eq!(slot.selected(), None);
        assert_eq!(slot.revision(), 0);
    }

    #[test]
    fn set_and_no_op_suppression() {
        let mut slot = SelectionSlot::new();

        assert!(slot.set(Some(1)));
        assert_eq!(slot.selected(), Some(&1));
        assert_eq!(slot.revision(), 1);

        // Re-selecting the same item is a no-op.
        assert!(!slot.set(Some(1)));
        assert_eq!(slot.revision(), 1);

        assert!(slot.set(Some(2)));
        assert_eq!(slot.selected(), Some(&2));
        assert_eq!(slot.revision(), 2);

        assert!(slot.set(None));
        assert!(slot.is_empty());
        assert!(!slot.set(None));
        assert_eq!(slot.revision(), 3);
    }

    #[test]
    fn clear_only_bumps_when_occupied() {
        let mut slot = SelectionSlot::<u32>::new();
        assert!(!slot.clear());
        assert_eq!(slot.revision(), 0);

        slot.select(5);
        assert!(slot.clear());
        assert!(slot.is_empty());
        assert_eq!(slot.revision(), 2);
    }

    #[test]
    fn toggle_replaces_then_clears() {
        let mut slot = SelectionSlot::new();

        assert!(slot.toggle(1));
        assert_eq!(slot.selected(), Some(&1));

        // Toggling a different item replaces, never accumulates.
        assert!(slot.toggle(2));
        assert_eq!(slot.selected(), Some(&2));

        assert!(slot.toggle(2));
        assert!(slot.is_empty());
        assert_eq!(slot.revision(), 3);
    }
}
