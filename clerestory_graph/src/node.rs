// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain node storage.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use clerestory_scope::{Scope, ScopeKind};

/// One object in the domain hierarchy.
///
/// Nodes are owned by the [`DomainGraph`](crate::DomainGraph): the parent's
/// child list is the owning edge, while the parent link held here is a
/// non-owning back-reference used only for upward lookups.
#[derive(Clone)]
pub struct DomainNode {
    id: String,
    kind: ScopeKind,
    name: String,
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
}

impl DomainNode {
    pub(crate) fn new(
        id: String,
        kind: ScopeKind,
        name: String,
        parent: Option<usize>,
    ) -> Self {
        Self {
            id,
            kind,
            name,
            parent,
            children: Vec::new(),
        }
    }

    /// Returns the node's identifier, unique across the whole graph.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the node's kind.
    #[must_use]
    pub const fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// Returns the node's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a [`Scope`] referring to this node.
    #[must_use]
    pub fn scope(&self) -> Scope {
        Scope::new(self.kind, self.id.clone())
    }

    /// Returns the number of children this node owns.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this node is a hierarchy root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl fmt::Debug for DomainNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainNode")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}
