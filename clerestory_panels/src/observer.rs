// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection-change observers and the per-context broadcast registry.

use alloc::boxed::Box;
use core::fmt;

use hashbrown::HashMap;
use smallvec::SmallVec;

use clerestory_scope::ContextKey;

use crate::panel::PanelId;

/// Receives selection-change notifications for one panel.
///
/// Implementations are typically the rendering side of a panel: on each
/// call they re-render whatever of their appearance depends on the
/// selection. The blanket impl lets plain closures serve as observers; use
/// [`observer`] to pin a closure literal's signature:
///
/// ```rust
/// use clerestory_panels::{SelectionObserver, observer};
///
/// fn takes_observer(_: impl SelectionObserver<u32>) {}
///
/// takes_observer(observer::<u32, _>(|_context, selected| {
///     let _ = selected.copied(); // repaint here
/// }));
/// ```
pub trait SelectionObserver<T> {
    /// Called after the selection of the observed context changed, and once
    /// on registration so a new panel reflects current shared state.
    ///
    /// `selected` is the context's selection after the change.
    fn selection_changed(&mut self, context: &ContextKey, selected: Option<&T>);
}

impl<T, F> SelectionObserver<T> for F
where
    F: FnMut(&ContextKey, Option<&T>),
{
    fn selection_changed(&mut self, context: &ContextKey, selected: Option<&T>) {
        self(context, selected);
    }
}

/// Pins a closure's signature so it can serve as a [`SelectionObserver`].
///
/// Closure signatures are only deduced from direct `FnMut` bounds, not
/// through the blanket impl; routing a closure literal through this helper
/// gives the compiler that direct bound.
pub fn observer<T, F>(f: F) -> F
where
    F: FnMut(&ContextKey, Option<&T>),
{
    f
}

/// Most contexts have one or two panels; keep the common case inline.
type ObserverList<T> = SmallVec<[(PanelId, Box<dyn SelectionObserver<T>>); 2]>;

/// Observer registrations, keyed by context.
///
/// A broadcast for a context walks exactly that context's list — observers
/// registered elsewhere are never touched, which is the isolation the whole
/// model rests on. Within one context, observers run in registration order;
/// callers must not rely on any order between panels.
pub struct ObserverRegistry<T> {
    by_context: HashMap<ContextKey, ObserverList<T>>,
}

impl<T> ObserverRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_context: HashMap::new(),
        }
    }

    /// Registers `observer` for `panel` under `context`.
    pub fn register(
        &mut self,
        context: ContextKey,
        panel: PanelId,
        observer: Box<dyn SelectionObserver<T>>,
    ) {
        self.by_context
            .entry(context)
            .or_default()
            .push((panel, observer));
    }

    /// Removes `panel`'s registration under `context`.
    ///
    /// Returns `true` if a registration was removed. Empty per-context
    /// lists are dropped so dormant contexts cost nothing here.
    pub fn unregister(&mut self, context: &ContextKey, panel: PanelId) -> bool {
        let Some(list) = self.by_context.get_mut(context) else {
            return false;
        };
        let Some(at) = list.iter().position(|(id, _)| *id == panel) else {
            return false;
        };
        list.remove(at);
        if list.is_empty() {
            self.by_context.remove(context);
        }
        true
    }

    /// Moves `panel`'s registration from one context to another.
    ///
    /// Returns `true` if the panel was registered under `from`. After a
    /// migration, broadcasts on `from` no longer reach the panel and
    /// broadcasts on `to` do.
    pub fn migrate(&mut self, panel: PanelId, from: &ContextKey, to: ContextKey) -> bool {
        let Some(list) = self.by_context.get_mut(from) else {
            return false;
        };
        let Some(at) = list.iter().position(|(id, _)| *id == panel) else {
            return false;
        };
        let entry = list.remove(at);
        if list.is_empty() {
            self.by_context.remove(from);
        }
        self.by_context.entry(to).or_default().push(entry);
        true
    }

    /// Invokes every observer registered under `context`, exactly once each.
    pub fn notify(&mut self, context: &ContextKey, selected: Option<&T>) {
        if let Some(list) = self.by_context.get_mut(context) {
            for (_, observer) in list.iter_mut() {
                observer.selection_changed(context, selected);
            }
        }
    }

    /// Invokes only `panel`'s observer under `context`.
    ///
    /// Used for the initial callback when a panel joins a context.
    pub fn notify_panel(&mut self, context: &ContextKey, panel: PanelId, selected: Option<&T>) {
        if let Some(list) = self.by_context.get_mut(context)
            && let Some((_, observer)) = list.iter_mut().find(|(id, _)| *id == panel)
        {
            observer.selection_changed(context, selected);
        }
    }

    /// Returns the number of observers registered under `context`.
    #[must_use]
    pub fn observer_count(&self, context: &ContextKey) -> usize {
        self.by_context.get(context).map_or(0, ObserverList::len)
    }

    /// Returns the total number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_context.values().map(ObserverList::len).sum()
    }

    /// Returns `true` if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_context.is_empty()
    }
}

impl<T> Default for ObserverRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Observers are opaque callables; report shape only.
impl<T> fmt::Debug for ObserverRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("contexts", &self.by_context.len())
            .field("observers", &self.len())
            .finish_non_exhaustive()
    }
}
