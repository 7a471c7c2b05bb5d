// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The domain graph: build-once hierarchy, id index, and queries.

use alloc::string::String;
use core::fmt;

use alloc::vec::Vec;
use hashbrown::HashMap;

use clerestory_scope::{Scope, ScopeKind};

use crate::node::DomainNode;
use crate::usage::UsageTable;

const NO_SLOTS: &[usize] = &[];

/// Error returned when an insertion or usage recording is malformed.
///
/// Lookups never produce these: a scope that resolves to nothing is an
/// ordinary `None`. Errors only arise while building the graph.
#[derive(Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node with this id is already registered.
    DuplicateId {
        /// The offending id.
        id: String,
    },
    /// The named parent is not in the graph.
    UnknownParent {
        /// Id of the node being inserted.
        child: String,
        /// Id of the missing parent.
        parent: String,
    },
    /// The hierarchy does not allow this ownership edge.
    InvalidEdge {
        /// Kind of the would-be parent.
        parent: ScopeKind,
        /// Kind of the would-be child.
        child: ScopeKind,
    },
    /// Roots must be principal kinds (owner or account).
    InvalidRoot {
        /// The non-principal kind.
        kind: ScopeKind,
    },
    /// A usage endpoint id is not in the graph.
    UnknownEndpoint {
        /// The missing id.
        id: String,
    },
    /// A usage endpoint resolved to a node of the wrong kind.
    InvalidUsage {
        /// Id of the ill-kinded endpoint.
        id: String,
        /// The kind it actually has.
        kind: ScopeKind,
    },
}

impl fmt::Debug for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "node id {id:?} is already registered"),
            Self::UnknownParent { child, parent } => {
                write!(f, "cannot insert {child:?}: parent {parent:?} is not in the graph")
            }
            Self::InvalidEdge { parent, child } => {
                write!(f, "a {parent} node cannot own a {child} node")
            }
            Self::InvalidRoot { kind } => {
                write!(f, "a {kind} node cannot root a hierarchy")
            }
            Self::UnknownEndpoint { id } => {
                write!(f, "usage endpoint {id:?} is not in the graph")
            }
            Self::InvalidUsage { id, kind } => {
                write!(f, "usage endpoint {id:?} is a {kind} node")
            }
        }
    }
}

impl core::error::Error for GraphError {}

/// The static domain hierarchy.
///
/// Nodes live in a slot vector; the parent's child list (slot indices, in
/// insertion order) is the owning edge, and a global id → slot index serves
/// lookups. Every node reachable from a root is registered in the index at
/// insertion time and is never removed.
///
/// See the [crate docs](crate) for an overview and examples.
#[derive(Clone, Default)]
pub struct DomainGraph {
    nodes: Vec<DomainNode>,
    index: HashMap<String, usize>,
    usages: UsageTable,
}

impl DomainGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a hierarchy root.
    ///
    /// Roots must be principal kinds ([`ScopeKind::Owner`] or
    /// [`ScopeKind::Account`]).
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidRoot`] if `kind` is not principal.
    /// - [`GraphError::DuplicateId`] if `id` is already registered.
    pub fn insert_root(
        &mut self,
        kind: ScopeKind,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(), GraphError> {
        if !kind.is_principal() {
            return Err(GraphError::InvalidRoot { kind });
        }
        self.insert(None, kind, id.into(), name.into())
    }

    /// Inserts a node under the named parent.
    ///
    /// The edge must be one the hierarchy allows (see
    /// [`ScopeKind::may_own`]).
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownParent`] if `parent_id` is not registered.
    /// - [`GraphError::InvalidEdge`] if the parent's kind cannot own `kind`.
    /// - [`GraphError::DuplicateId`] if `id` is already registered.
    pub fn insert_child(
        &mut self,
        parent_id: &str,
        kind: ScopeKind,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(), GraphError> {
        let id = id.into();
        let Some(&parent_slot) = self.index.get(parent_id) else {
            return Err(GraphError::UnknownParent {
                child: id,
                parent: String::from(parent_id),
            });
        };
        let parent_kind = self.nodes[parent_slot].kind();
        if !parent_kind.may_own(kind) {
            return Err(GraphError::InvalidEdge {
                parent: parent_kind,
                child: kind,
            });
        }
        self.insert(Some(parent_slot), kind, id, name.into())
    }

    fn insert(
        &mut self,
        parent: Option<usize>,
        kind: ScopeKind,
        id: String,
        name: String,
    ) -> Result<(), GraphError> {
        if self.index.contains_key(id.as_str()) {
            return Err(GraphError::DuplicateId { id });
        }

        let slot = self.nodes.len();
        self.index.insert(id.clone(), slot);
        self.nodes.push(DomainNode::new(id, kind, name, parent));
        if let Some(parent_slot) = parent {
            self.nodes[parent_slot].children.push(slot);
        }
        Ok(())
    }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, DomainNode> {
        self.nodes.iter()
    }

    /// Resolves a scope to its node.
    ///
    /// Both the id and the kind must match; a stale scope whose id now
    /// belongs to nothing, or to a node of another kind, is a lookup miss.
    #[must_use]
    pub fn node(&self, scope: &Scope) -> Option<&DomainNode> {
        self.node_by_id(scope.id())
            .filter(|node| node.kind() == scope.kind())
    }

    /// Looks up a node by bare id, ignoring kind.
    #[must_use]
    pub fn node_by_id(&self, id: &str) -> Option<&DomainNode> {
        self.index.get(id).map(|&slot| &self.nodes[slot])
    }

    /// Returns the parent of the node with the given id.
    #[must_use]
    pub fn parent_of(&self, id: &str) -> Option<&DomainNode> {
        let node = self.node_by_id(id)?;
        node.parent.map(|slot| &self.nodes[slot])
    }

    /// Returns the ordered children of a scope.
    ///
    /// A scope that does not resolve yields an empty iterator.
    #[must_use]
    pub fn children(&self, scope: &Scope) -> NodeIter<'_> {
        let slots = self
            .node(scope)
            .map_or(NO_SLOTS, |node| node.children.as_slice());
        NodeIter {
            graph: self,
            slots: slots.iter(),
        }
    }

    /// Visits the ordered children of a scope.
    pub fn visit_children<F: FnMut(&DomainNode)>(&self, scope: &Scope, mut f: F) {
        for node in self.children(scope) {
            f(node);
        }
    }

    /// Records that an instance consumes an asset.
    ///
    /// Recording the same pair twice is a no-op; returns `true` if the edge
    /// was newly added.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownEndpoint`] if either id is not registered.
    /// - [`GraphError::InvalidUsage`] if `instance_id` is not an instance
    ///   or `asset_id` is not an asset.
    pub fn record_usage(
        &mut self,
        instance_id: &str,
        asset_id: &str,
    ) -> Result<bool, GraphError> {
        let instance = self.usage_endpoint(instance_id, ScopeKind::Instance)?;
        let asset = self.usage_endpoint(asset_id, ScopeKind::Asset)?;
        Ok(self.usages.record(instance, asset))
    }

    fn usage_endpoint(&self, id: &str, expected: ScopeKind) -> Result<usize, GraphError> {
        let Some(&slot) = self.index.get(id) else {
            return Err(GraphError::UnknownEndpoint {
                id: String::from(id),
            });
        };
        let kind = self.nodes[slot].kind();
        if kind != expected {
            return Err(GraphError::InvalidUsage {
                id: String::from(id),
                kind,
            });
        }
        Ok(slot)
    }

    /// Returns the instances consuming an asset, in recording order.
    ///
    /// An id that is not a registered asset yields an empty iterator.
    #[must_use]
    pub fn usages_of(&self, asset_id: &str) -> NodeIter<'_> {
        let slots = match self.index.get(asset_id) {
            Some(&slot) if self.nodes[slot].kind() == ScopeKind::Asset => {
                self.usages.instances_of(slot)
            }
            _ => NO_SLOTS,
        };
        NodeIter {
            graph: self,
            slots: slots.iter(),
        }
    }

    /// Returns the assets consumed by an instance, in recording order.
    ///
    /// An id that is not a registered instance yields an empty iterator.
    #[must_use]
    pub fn assets_used_by(&self, instance_id: &str) -> NodeIter<'_> {
        let slots = match self.index.get(instance_id) {
            Some(&slot) if self.nodes[slot].kind() == ScopeKind::Instance => {
                self.usages.assets_of(slot)
            }
            _ => NO_SLOTS,
        };
        NodeIter {
            graph: self,
            slots: slots.iter(),
        }
    }

    /// Returns the number of distinct usage edges recorded.
    #[must_use]
    pub fn usage_count(&self) -> usize {
        self.usages.len()
    }
}

impl fmt::Debug for DomainGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainGraph")
            .field("nodes", &self.nodes.len())
            .field("usages", &self.usages.len())
            .finish_non_exhaustive()
    }
}

/// The two queries panels and renderers need from world data.
///
/// [`DomainGraph`] implements this; tests and alternative backing stores
/// can provide their own implementation. The trait is dyn-compatible so a
/// renderer can hold a `&dyn DomainSource`.
pub trait DomainSource {
    /// Resolves a scope to its node, if present and kind-matching.
    fn node_at(&self, scope: &Scope) -> Option<&DomainNode>;

    /// Visits the ordered children of `scope`.
    ///
    /// Scopes that resolve to nothing visit nothing.
    fn visit_children(&self, scope: &Scope, f: &mut dyn FnMut(&DomainNode));
}

impl DomainSource for DomainGraph {
    fn node_at(&self, scope: &Scope) -> Option<&DomainNode> {
        self.node(scope)
    }

    fn visit_children(&self, scope: &Scope, f: &mut dyn FnMut(&DomainNode)) {
        for node in self.children(scope) {
            f(node);
        }
    }
}

/// An iterator over graph nodes referenced by a slot list.
///
/// Returned by [`DomainGraph::children`], [`DomainGraph::usages_of`], and
/// [`DomainGraph::assets_used_by`].
#[derive(Clone, Debug)]
pub struct NodeIter<'g> {
    graph: &'g DomainGraph,
    slots: core::slice::Iter<'g, usize>,
}

impl<'g> Iterator for NodeIter<'g> {
    type Item = &'g DomainNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|&slot| &self.graph.nodes[slot])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl ExactSizeIterator for NodeIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_world() -> DomainGraph {
        let mut graph = DomainGraph::new();
        graph.insert_root(ScopeKind::Owner, "o1", "Studio").unwrap();
        graph
            .insert_child("o1", ScopeKind::Game, "g1", "Skyline")
            .unwrap();
        graph
            .insert_child("g1", ScopeKind::Place, "p1", "Lobby")
            .unwrap();
        graph
            .insert_child("p1", ScopeKind::Instance, "i1", "SpawnPad")
            .unwrap();
        graph
            .insert_child("o1", ScopeKind::Inventory, "inv1", "Inventory")
            .unwrap();
        graph
            .insert_child("inv1", ScopeKind::Asset, "m1", "BrickMesh")
            .unwrap();
        graph
    }

    #[test]
    fn lookup_checks_kind_and_id() {
        let graph = tiny_world();

        assert!(graph.node(&Scope::new(ScopeKind::Game, "g1")).is_some());
        assert!(graph.node(&Scope::new(ScopeKind::Place, "g1")).is_none());
        assert!(graph.node(&Scope::new(ScopeKind::Game, "nope")).is_none());
    }

    #[test]
    fn children_are_ordered() {
        let mut graph = tiny_world();
        graph
            .insert_child("g1", ScopeKind::Place, "p2", "Arena")
            .unwrap();

        let ids: Vec<&str> = graph
            .children(&Scope::new(ScopeKind::Game, "g1"))
            .map(DomainNode::id)
            .collect();
        assert_eq!(ids, ["p1", "p2"]);
    }

    #[test]
    fn unresolvable_scope_has_no_children() {
        let graph = tiny_world();
        assert_eq!(graph.children(&Scope::new(ScopeKind::Game, "nope")).len(), 0);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut graph = tiny_world();
        let err = graph
            .insert_child("g1", ScopeKind::Place, "p1", "Again")
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateId {
                id: "p1".into()
            }
        );
    }

    #[test]
    fn illegal_edges_are_rejected() {
        let mut graph = tiny_world();

        let err = graph
            .insert_child("g1", ScopeKind::Instance, "i9", "Stray")
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidEdge {
                parent: ScopeKind::Game,
                child: ScopeKind::Instance
            }
        );

        let err = graph
            .insert_root(ScopeKind::Game, "g9", "Rootless")
            .unwrap_err();
        assert_eq!(err, GraphError::InvalidRoot { kind: ScopeKind::Game });
    }

    #[test]
    fn parent_links_resolve_upward() {
        let graph = tiny_world();
        assert_eq!(graph.parent_of("p1").map(DomainNode::id), Some("g1"));
        assert_eq!(graph.parent_of("o1").map(DomainNode::id), None);
        assert_eq!(graph.parent_of("nope").map(DomainNode::id), None);
    }

    #[test]
    fn usage_queries_both_directions() {
        let mut graph = tiny_world();

        assert!(graph.record_usage("i1", "m1").unwrap());
        assert!(!graph.record_usage("i1", "m1").unwrap());
        assert_eq!(graph.usage_count(), 1);

        let users: Vec<&str> = graph.usages_of("m1").map(DomainNode::id).collect();
        assert_eq!(users, ["i1"]);
        let assets: Vec<&str> = graph.assets_used_by("i1").map(DomainNode::id).collect();
        assert_eq!(assets, ["m1"]);

        // Misses read as empty, not errors.
        assert_eq!(graph.usages_of("nope").len(), 0);
        assert_eq!(graph.usages_of("i1").len(), 0);
    }

    #[test]
    fn usage_endpoints_are_validated() {
        let mut graph = tiny_world();

        assert_eq!(
            graph.record_usage("i1", "nope").unwrap_err(),
            GraphError::UnknownEndpoint { id: "nope".into() }
        );
        assert_eq!(
            graph.record_usage("m1", "m1").unwrap_err(),
            GraphError::InvalidUsage {
                id: "m1".into(),
                kind: ScopeKind::Asset
            }
        );
    }
}
