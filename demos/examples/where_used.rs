// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where-is-this-used queries.
//!
//! Walk the sample world the way a properties panel would: resolve the
//! selected identifier back to a node, list its children, and follow the
//! usage cross-references between instances and inventory assets.
//!
//! Run:
//! - `cargo run -p clerestory_demos --example where_used`

use clerestory_demos::sample_world;
use clerestory_graph::{DomainNode, DomainSource};
use clerestory_scope::{Scope, ScopeKind};

fn main() {
    let graph = sample_world();

    let inventory = Scope::new(ScopeKind::Inventory, "inv1");
    println!("Assets in {inventory}:");
    for asset in graph.children(&inventory) {
        let users: Vec<&str> = graph.usages_of(asset.id()).map(DomainNode::id).collect();
        println!("  {} ({}) used by {users:?}", asset.id(), asset.name());
    }

    println!("Assets consumed by the door instance:");
    for asset in graph.assets_used_by("i2") {
        println!("  {} ({})", asset.id(), asset.name());
    }

    // A stale scope resolves to empty content, not an error.
    let gone = Scope::new(ScopeKind::Place, "p-deleted");
    let source: &dyn DomainSource = &graph;
    match source.node_at(&gone) {
        Some(node) => println!("{gone} -> {}", node.name()),
        None => println!("{gone} -> (no longer resolvable; showing empty state)"),
    }
}
