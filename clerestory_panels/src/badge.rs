// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable per-context badge assignment.

use core::fmt;

use hashbrown::HashMap;

use clerestory_scope::ContextKey;

/// A palette slot assigned to a context.
///
/// The badge is an index into whatever palette the chrome draws with; this
/// crate only hands out the indices.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Badge(u8);

impl Badge {
    /// Returns the palette index of this badge.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Badge").field(&self.0).finish()
    }
}

/// Hands out one stable badge per context.
///
/// Panels tint part of their chrome so panels sharing a context read as
/// linked. The allocator assigns palette slots in rotation: the first time
/// a context is seen it receives the next slot (wrapping at the palette
/// size), and the same context keeps its badge for the allocator's
/// lifetime. Like the selection store, this is injected state — one
/// allocator per workbench session, not a process-wide table.
///
/// # Example
///
/// ```rust
/// use clerestory_panels::BadgeAllocator;
/// use clerestory_scope::{Mode, Scope, ScopeKind};
///
/// let mut badges = BadgeAllocator::new(4);
/// let edit = Scope::new(ScopeKind::Place, "p1").in_mode(Mode::Edit);
/// let preview = Scope::new(ScopeKind::Place, "p1").in_mode(Mode::Preview);
///
/// let a = badges.badge_for(&edit);
/// let b = badges.badge_for(&preview);
/// assert_ne!(a, b);
///
/// // Stable: asking again returns the same badge.
/// assert_eq!(badges.badge_for(&edit), a);
/// ```
#[derive(Clone, Debug)]
pub struct BadgeAllocator {
    by_context: HashMap<ContextKey, Badge>,
    palette_len: u8,
    next: u8,
}

impl BadgeAllocator {
    /// Creates an allocator rotating through `palette_len` slots.
    ///
    /// # Panics
    ///
    /// Panics if `palette_len` is 0.
    #[must_use]
    pub fn new(palette_len: u8) -> Self {
        assert!(palette_len > 0, "palette must have at least one slot");
        Self {
            by_context: HashMap::new(),
            palette_len,
            next: 0,
        }
    }

    /// Returns the badge for `context`, assigning the next slot on first
    /// sight.
    pub fn badge_for(&mut self, context: &ContextKey) -> Badge {
        if let Some(&badge) = self.by_context.get(context) {
            return badge;
        }
        let badge = Badge(self.next);
        self.next = (self.next + 1) % self.palette_len;
        self.by_context.insert(context.clone(), badge);
        badge
    }

    /// Returns the badge already assigned to `context`, if any.
    #[must_use]
    pub fn get(&self, context: &ContextKey) -> Option<Badge> {
        self.by_context.get(context).copied()
    }

    /// Returns the number of contexts with assigned badges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_context.len()
    }

    /// Returns `true` if no badges have been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_context.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clerestory_scope::{Mode, Scope, ScopeKind};

    fn ctx(id: &str) -> ContextKey {
        Scope::new(ScopeKind::Game, id).in_mode(Mode::Edit)
    }

    #[test]
    fn assignment_is_stable() {
        let mut badges = BadgeAllocator::new(8);
        let first = badges.badge_for(&ctx("g1"));

        badges.badge_for(&ctx("g2"));
        badges.badge_for(&ctx("g3"));

        assert_eq!(badges.badge_for(&ctx("g1")), first);
        assert_eq!(badges.len(), 3);
    }

    #[test]
    fn slots_rotate_and_wrap() {
        let mut badges = BadgeAllocator::new(2);

        assert_eq!(badges.badge_for(&ctx("g1")).index(), 0);
        assert_eq!(badges.badge_for(&ctx("g2")).index(), 1);
        // Palette exhausted: the third context reuses slot 0.
        assert_eq!(badges.badge_for(&ctx("g3")).index(), 0);
        // Reuse of a slot does not disturb earlier assignments.
        assert_eq!(badges.badge_for(&ctx("g1")).index(), 0);
        assert_eq!(badges.get(&ctx("g2")).map(Badge::index), Some(1));
    }

    #[test]
    #[should_panic(expected = "palette must have at least one slot")]
    fn empty_palette_is_rejected() {
        let _ = BadgeAllocator::new(0);
    }
}
