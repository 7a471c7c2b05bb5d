// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared sample data for the clerestory examples.

use clerestory_graph::DomainGraph;
use clerestory_scope::ScopeKind;

/// Builds the small world the examples walk around in.
///
/// One studio owner with a game (two places, a few instances) and an
/// inventory of assets, some of which the instances consume.
#[must_use]
pub fn sample_world() -> DomainGraph {
    let mut graph = DomainGraph::new();

    graph
        .insert_root(ScopeKind::Owner, "o1", "Skyline Studio")
        .expect("fresh graph accepts the root");

    let nodes: [(&str, ScopeKind, &str, &str); 9] = [
        ("o1", ScopeKind::Game, "g1", "Skyline"),
        ("g1", ScopeKind::Place, "p1", "Lobby"),
        ("g1", ScopeKind::Place, "p2", "Arena"),
        ("p1", ScopeKind::Instance, "i1", "SpawnPad"),
        ("p1", ScopeKind::Instance, "i2", "Door"),
        ("p2", ScopeKind::Instance, "i3", "Scoreboard"),
        ("o1", ScopeKind::Inventory, "inv1", "Inventory"),
        ("inv1", ScopeKind::Asset, "m1", "BrickMesh"),
        ("inv1", ScopeKind::Asset, "m2", "DoorSound"),
    ];
    for (parent, kind, id, name) in nodes {
        graph
            .insert_child(parent, kind, id, name)
            .expect("sample hierarchy is well-formed");
    }

    for (instance, asset) in [("i1", "m1"), ("i2", "m1"), ("i2", "m2")] {
        graph
            .record_usage(instance, asset)
            .expect("sample usages reference sample nodes");
    }

    graph
}
