// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The workbench: panel registry + selection store + broadcast, combined.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use clerestory_scope::{ContextKey, Mode, Scope};
use clerestory_selection::SelectionStore;

use crate::observer::{ObserverRegistry, SelectionObserver};
use crate::panel::{Panel, PanelId, Presentation};

/// The coordinator for a set of panels sharing selections by context.
///
/// A `Workbench` owns all coordination state: the open panels, the
/// per-context [`SelectionStore`], and the [`ObserverRegistry`] that routes
/// change notifications. It is an explicitly constructed value — create one
/// per editor session, or one per test — rather than process-wide state.
///
/// Every selection mutation that changes anything is broadcast to the
/// observers of exactly the affected context before the mutating call
/// returns. Observers are plain callbacks without access to the workbench
/// (it is exclusively borrowed during the call), so a broadcast can neither
/// re-enter the coordinator nor observe half-applied state.
///
/// # Type Parameters
///
/// - `T`: the selected item identifier, typically a domain node id. Only
///   `PartialEq` is required.
///
/// # Example
///
/// ```rust
/// use clerestory_panels::{Presentation, Workbench, observer};
/// use clerestory_scope::{Mode, Scope, ScopeKind};
/// use kurbo::Rect;
///
/// let mut bench: Workbench<&str> = Workbench::new();
///
/// let place = Scope::new(ScopeKind::Place, "p1");
/// let tree = bench.open_panel(
///     place.clone(),
///     Mode::Edit,
///     Presentation::Tree,
///     Rect::new(0.0, 0.0, 240.0, 600.0),
///     observer::<&str, _>(|_, _| {}),
/// );
///
/// // A pick in the tree is visible to every panel in the same context.
/// bench.select_in_panel(tree, "instance-7");
/// let context = bench.panel(tree).unwrap().context().clone();
/// assert_eq!(bench.selection(&context), Some(&"instance-7"));
/// ```
pub struct Workbench<T> {
    panels: Vec<Panel>,
    store: SelectionStore<ContextKey, T>,
    observers: ObserverRegistry<T>,
    next_id: u32,
}

impl<T> Workbench<T> {
    /// Creates a workbench with no panels and no selections.
    #[must_use]
    pub fn new() -> Self {
        Self {
            panels: Vec::new(),
            store: SelectionStore::new(),
            observers: ObserverRegistry::new(),
            next_id: 0,
        }
    }

    /// Returns the number of open panels.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Returns `true` if no panels are open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Returns the panel with the given id, if it is open.
    #[must_use]
    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.id() == id)
    }

    /// Returns the open panels, in opening order.
    pub fn panels(&self) -> core::slice::Iter<'_, Panel> {
        self.panels.iter()
    }

    /// Returns the open panels bound to `context`, in opening order.
    pub fn panels_in_context<'a>(
        &'a self,
        context: &'a ContextKey,
    ) -> impl Iterator<Item = &'a Panel> {
        self.panels
            .iter()
            .filter(move |panel| panel.context() == context)
    }

    /// Returns a read-only view of the selection store.
    ///
    /// There is deliberately no mutable counterpart: mutating the store
    /// without going through the workbench would skip the broadcast.
    #[must_use]
    pub fn store(&self) -> &SelectionStore<ContextKey, T> {
        &self.store
    }

    fn position(&self, id: PanelId) -> Option<usize> {
        self.panels.iter().position(|panel| panel.id() == id)
    }

    // -------------------------------------------------------------------------
    // Panel lifecycle
    // -------------------------------------------------------------------------

    /// Opens a panel over `scope` in `mode`.
    ///
    /// The panel's context key is derived from the two axes, the observer is
    /// registered under it, and — before this call returns — the observer is
    /// invoked once with the context's current selection, so a panel joining
    /// a live context reflects shared state immediately. `frame` is the
    /// layout hint the window chrome starts from.
    ///
    /// Returns the new panel's id. Ids are monotonically assigned and never
    /// reused.
    pub fn open_panel(
        &mut self,
        scope: Scope,
        mode: Mode,
        presentation: Presentation,
        frame: Rect,
        observer: impl SelectionObserver<T> + 'static,
    ) -> PanelId {
        let id = PanelId::new(self.next_id);
        self.next_id += 1;

        let context = scope.in_mode(mode);
        self.panels
            .push(Panel::new(id, context.clone(), presentation, frame));
        self.observers
            .register(context.clone(), id, Box::new(observer));

        let selected = self.store.selected(&context);
        self.observers.notify_panel(&context, id, selected);
        id
    }

    /// Closes a panel, returning its final record.
    ///
    /// The panel's observer is dropped with its registration. The context's
    /// selection is left untouched: other panels may still share it, and a
    /// context with no panels keeps its selection dormant for reuse.
    pub fn close_panel(&mut self, id: PanelId) -> Option<Panel> {
        let at = self.position(id)?;
        let panel = self.panels.remove(at);
        self.observers.unregister(panel.context(), id);
        Some(panel)
    }

    /// Reassigns a panel's mode, migrating it to the new context.
    ///
    /// Only the mode axis changes; scope, presentation, and frame stay.
    /// The panel's observer moves to the recomputed context key and is
    /// invoked once with that context's current selection. Mutations on the
    /// old context no longer reach the panel afterwards.
    ///
    /// Returns `false` if the panel is not open. Reassigning a panel to the
    /// mode it already has is a no-op.
    pub fn reassign_mode(&mut self, id: PanelId, mode: Mode) -> bool {
        let Some(at) = self.position(id) else {
            return false;
        };
        if self.panels[at].mode() == mode {
            return true;
        }

        let old_context = self.panels[at].context().clone();
        self.panels[at].set_mode(mode);
        let new_context = self.panels[at].context().clone();

        self.observers.migrate(id, &old_context, new_context.clone());
        let selected = self.store.selected(&new_context);
        self.observers.notify_panel(&new_context, id, selected);
        true
    }

    /// Records a panel's frame as computed by the window chrome.
    ///
    /// Purely bookkeeping; no broadcast. Returns `false` if the panel is
    /// not open.
    pub fn set_frame(&mut self, id: PanelId, frame: Rect) -> bool {
        let Some(at) = self.position(id) else {
            return false;
        };
        self.panels[at].set_frame(frame);
        true
    }

    /// Returns the selection of a context, if any.
    #[must_use]
    pub fn selection(&self, context: &ContextKey) -> Option<&T> {
        self.store.selected(context)
    }

    /// Returns the revision of a context's selection (0 if untouched).
    #[must_use]
    pub fn selection_revision(&self, context: &ContextKey) -> u64 {
        self.store.revision(context)
    }
}

impl<T> Workbench<T>
where
    T: PartialEq,
{
    // -------------------------------------------------------------------------
    // Selection mutation
    // -------------------------------------------------------------------------

    /// Replaces the selection in `context` with `item`, or clears it for
    /// `None`, then notifies the context's observers.
    ///
    /// Single-selection semantics: any previous selection is displaced.
    /// Returns `true` if the selection changed; a no-op (setting the value
    /// already selected) notifies nobody.
    pub fn set_selection(&mut self, context: &ContextKey, item: Option<T>) -> bool {
        if !self.store.set(context.clone(), item) {
            return false;
        }
        self.broadcast(context);
        true
    }

    /// Toggles `item` in `context`, then notifies the context's observers.
    ///
    /// If `item` is selected there it is deselected; otherwise it becomes
    /// the selection, displacing whatever was selected before.
    pub fn toggle_selection(&mut self, context: &ContextKey, item: T) {
        self.store.toggle(context.clone(), item);
        self.broadcast(context);
    }

    /// Clears the selection in `context`, notifying its observers if an
    /// item was deselected.
    ///
    /// Returns `true` if the selection changed.
    pub fn clear_selection(&mut self, context: &ContextKey) -> bool {
        if !self.store.clear(context) {
            return false;
        }
        self.broadcast(context);
        true
    }

    /// Replaces the selection in a panel's context (a plain pick in that
    /// panel), notifying every panel sharing the context.
    ///
    /// Returns `false` if the panel is not open.
    pub fn select_in_panel(&mut self, id: PanelId, item: T) -> bool {
        let Some(context) = self.panel(id).map(|panel| panel.context().clone()) else {
            return false;
        };
        self.set_selection(&context, Some(item));
        true
    }

    /// Toggles `item` in a panel's context (a modified pick in that panel).
    ///
    /// Returns `false` if the panel is not open.
    pub fn toggle_in_panel(&mut self, id: PanelId, item: T) -> bool {
        let Some(context) = self.panel(id).map(|panel| panel.context().clone()) else {
            return false;
        };
        self.toggle_selection(&context, item);
        true
    }

    /// Delivers the context's current selection to its observers.
    fn broadcast(&mut self, context: &ContextKey) {
        let selected = self.store.selected(context);
        self.observers.notify(context, selected);
    }
}

impl<T> Default for Workbench<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Workbench<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workbench")
            .field("panels", &self.panels)
            .field("observers", &self.observers)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
