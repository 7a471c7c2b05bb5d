// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=clerestory_scope --heading-base-level=0

//! Clerestory Scope: scope references, panel modes, and context keys.
//!
//! A panel in a clerestory UI is bound to two axes: **what** it looks at
//! (a [`Scope`], a reference to one domain object) and **how** it operates
//! (a [`Mode`] such as edit or browse). The pair of the two is the panel's
//! **context**, represented by [`ContextKey`]. Panels whose context keys are
//! equal share one selection; panels whose keys differ are fully independent.
//!
//! The key is a plain value type with structural equality, so two panels
//! agree on a context exactly when they agree on both axes — there is no
//! string parsing and no way for distinct (scope, mode) pairs to collide.
//! A stable text rendering is still available through
//! [`ContextKey::canonical`] for display and diagnostics.
//!
//! ## Minimal example
//!
//! ```rust
//! use clerestory_scope::{ContextKey, Mode, Scope, ScopeKind};
//!
//! let place = Scope::new(ScopeKind::Place, "p-100");
//!
//! // A tree panel and a viewport panel editing the same place share a context.
//! let tree = place.clone().in_mode(Mode::Edit);
//! let viewport = ContextKey::new(place.clone(), Mode::Edit);
//! assert_eq!(tree, viewport);
//!
//! // The same place previewed is a different context.
//! assert_ne!(tree, place.in_mode(Mode::Preview));
//!
//! assert_eq!(tree.canonical(), "place:p-100|edit");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// The kind of domain object a [`Scope`] refers to.
///
/// The set of kinds is closed: a scope always names one of these, and code
/// matching on a kind never needs an "unknown kind" fallback arm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// A principal that owns games and an inventory.
    Owner,
    /// An account-flavored principal; interchangeable with [`ScopeKind::Owner`]
    /// as a hierarchy root.
    Account,
    /// A game owned by a principal.
    Game,
    /// A place inside a game.
    Place,
    /// An instance inside a place.
    Instance,
    /// A principal's inventory of assets.
    Inventory,
    /// An asset inside an inventory.
    Asset,
}

impl ScopeKind {
    /// All kinds, in hierarchy order.
    pub const ALL: [Self; 7] = [
        Self::Owner,
        Self::Account,
        Self::Game,
        Self::Place,
        Self::Instance,
        Self::Inventory,
        Self::Asset,
    ];

    /// Returns the lowercase token for this kind, as used in canonical keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Account => "account",
            Self::Game => "game",
            Self::Place => "place",
            Self::Instance => "instance",
            Self::Inventory => "inventory",
            Self::Asset => "asset",
        }
    }

    /// Returns `true` for the principal kinds that may root a hierarchy.
    #[must_use]
    pub const fn is_principal(self) -> bool {
        matches!(self, Self::Owner | Self::Account)
    }

    /// Returns `true` if a node of this kind may own a child of `child` kind.
    ///
    /// Ownership edges are fixed: principals own games and inventories,
    /// games own places, places own instances, and inventories own assets.
    #[must_use]
    pub const fn may_own(self, child: Self) -> bool {
        match self {
            Self::Owner | Self::Account => matches!(child, Self::Game | Self::Inventory),
            Self::Game => matches!(child, Self::Place),
            Self::Place => matches!(child, Self::Instance),
            Self::Inventory => matches!(child, Self::Asset),
            Self::Instance | Self::Asset => false,
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mode a panel (and therefore its context) operates in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Authoring: the scope's content is being edited.
    Edit,
    /// Read-only navigation of the scope's content.
    Browse,
    /// A live preview of the scope's content.
    Preview,
    /// The client half of a running session.
    Client,
    /// The server half of a running session.
    Server,
}

impl Mode {
    /// All modes.
    pub const ALL: [Self; 5] = [
        Self::Edit,
        Self::Browse,
        Self::Preview,
        Self::Client,
        Self::Server,
    ];

    /// Returns the lowercase token for this mode, as used in canonical keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Browse => "browse",
            Self::Preview => "preview",
            Self::Client => "client",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to one domain object: a kind plus an identifier.
///
/// `Scope` is an immutable value type. Two scopes are equal iff both the
/// kind and the id match; the id is opaque to this crate and is resolved
/// against a domain graph elsewhere.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    kind: ScopeKind,
    id: String,
}

impl Scope {
    /// Creates a scope referring to the object of `kind` with identifier `id`.
    #[must_use]
    pub fn new(kind: ScopeKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Returns the kind of object this scope refers to.
    #[must_use]
    pub const fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// Returns the identifier of the referred-to object.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Combines this scope with a mode into a [`ContextKey`].
    #[must_use]
    pub fn in_mode(self, mode: Mode) -> ContextKey {
        ContextKey::new(self, mode)
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scope({}:{})", self.kind, self.id)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// The unit of shared selection: a (scope, mode) pair.
///
/// `ContextKey` is the key every selection store and observer registry is
/// indexed by. It is a structural key: derivation from a scope and a mode is
/// pure and deterministic, equal inputs always produce equal keys, and
/// distinct inputs always produce distinct keys.
///
/// [`canonical`](Self::canonical) renders the stable text form
/// `"{kind}:{id}|{mode}"`; [`Display`](fmt::Display) shows the same. The
/// text form exists for humans — maps should key on the `ContextKey` value
/// itself.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ContextKey {
    scope: Scope,
    mode: Mode,
}

impl ContextKey {
    /// Derives the context key for `scope` operated on in `mode`.
    #[must_use]
    pub const fn new(scope: Scope, mode: Mode) -> Self {
        Self { scope, mode }
    }

    /// Returns the scope axis of this context.
    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Returns the mode axis of this context.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns a context with the same scope but a different mode.
    ///
    /// This is the key a panel migrates to when its mode is reassigned.
    #[must_use]
    pub fn with_mode(&self, mode: Mode) -> Self {
        Self {
            scope: self.scope.clone(),
            mode,
        }
    }

    /// Renders the stable canonical form `"{kind}:{id}|{mode}"`.
    #[must_use]
    pub fn canonical(&self) -> String {
        use alloc::string::ToString;
        self.to_string()
    }
}

impl fmt::Debug for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContextKey({self})")
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.scope, self.mode)
    }
}
