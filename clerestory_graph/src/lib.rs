// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=clerestory_graph --heading-base-level=0

//! Clerestory Graph: the static domain hierarchy panels look into.
//!
//! [`DomainGraph`] holds the world a clerestory UI browses: principals
//! (owners or accounts) own games and inventories, games own places, places
//! own instances, and inventories own assets. The graph is built once at
//! startup and only ever grows — nodes are registered in a global id → node
//! index at insertion time and are never removed.
//!
//! Construction is validated: duplicate ids, references to unknown parents,
//! and ownership edges the hierarchy does not allow are rejected with a
//! [`GraphError`]. Lookups, by contrast, never fail loudly — resolving a
//! [`Scope`] that points at a missing or differently-kinded node is a plain
//! `None`, which callers surface as empty-state content.
//!
//! ## Minimal example
//!
//! ```rust
//! use clerestory_graph::DomainGraph;
//! use clerestory_scope::{Scope, ScopeKind};
//!
//! let mut graph = DomainGraph::new();
//! graph.insert_root(ScopeKind::Owner, "o1", "Studio").unwrap();
//! graph.insert_child("o1", ScopeKind::Game, "g1", "Skyline").unwrap();
//! graph.insert_child("g1", ScopeKind::Place, "p1", "Lobby").unwrap();
//! graph.insert_child("p1", ScopeKind::Instance, "i1", "SpawnPad").unwrap();
//!
//! let game = Scope::new(ScopeKind::Game, "g1");
//! assert_eq!(graph.node(&game).map(|n| n.name()), Some("Skyline"));
//!
//! let places: Vec<_> = graph.children(&game).map(|n| n.id()).collect();
//! assert_eq!(places, ["p1"]);
//!
//! // A scope with the right id but the wrong kind is a lookup miss.
//! assert!(graph.node(&Scope::new(ScopeKind::Place, "g1")).is_none());
//! ```
//!
//! ## Usage cross-references
//!
//! Instances can consume assets from an inventory. The graph records these
//! as usage edges, powering "where is this used" queries in both
//! directions: [`DomainGraph::usages_of`] lists the instances consuming an
//! asset, [`DomainGraph::assets_used_by`] the assets an instance consumes.
//!
//! ## The `DomainSource` seam
//!
//! Rendering code does not need the concrete graph: the [`DomainSource`]
//! trait exposes the two queries panels rely on (resolve a scope, walk a
//! scope's children), so tests and alternative data sources can stand in
//! for the real world.
//!
//! ## JSON loading
//!
//! With the `json` feature, [`DomainGraph::from_json_str`] builds a graph
//! from a world document (the `owners.json` shape); see the [`json`]
//! module.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod graph;
#[cfg(feature = "json")]
pub mod json;
mod node;
mod usage;

pub use graph::{DomainGraph, DomainSource, GraphError, NodeIter};
pub use node::DomainNode;
