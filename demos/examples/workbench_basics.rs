// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Workbench basics.
//!
//! Open a few panels over the sample world, pick items, and watch which
//! panels hear about it: panels sharing a (scope, mode) context move
//! together, panels in other contexts stay silent.
//!
//! Run:
//! - `cargo run -p clerestory_demos --example workbench_basics`

use clerestory_demos::sample_world;
use clerestory_panels::{BadgeAllocator, Presentation, Workbench, observer};
use clerestory_scope::{Mode, Scope, ScopeKind};
use kurbo::Rect;

fn main() {
    let graph = sample_world();
    let mut bench: Workbench<String> = Workbench::new();
    let mut badges = BadgeAllocator::new(6);

    // A stand-in for rendering: each panel prints what it would repaint.
    let repaint = |label: &'static str| {
        observer::<String, _>(move |context, selected| {
            println!("  [{label}] {context} -> {selected:?}");
        })
    };

    let lobby = Scope::new(ScopeKind::Place, "p1");
    let frame = Rect::new(0.0, 0.0, 320.0, 480.0);

    println!("Opening tree + viewport over {lobby} in edit mode:");
    let tree = bench.open_panel(lobby.clone(), Mode::Edit, Presentation::Tree, frame, repaint("tree"));
    let viewport = bench.open_panel(
        lobby.clone(),
        Mode::Edit,
        Presentation::Viewport,
        frame,
        repaint("viewport"),
    );

    println!("Picking the spawn pad in the tree (both panels react):");
    bench.select_in_panel(tree, "i1".to_string());

    println!("Opening the same place in preview mode (independent context):");
    let preview = bench.open_panel(
        lobby.clone(),
        Mode::Preview,
        Presentation::Viewport,
        frame,
        repaint("preview"),
    );

    println!("Picking the door in the preview (edit panels stay silent):");
    bench.select_in_panel(preview, "i2".to_string());

    println!("Reassigning the viewport panel to preview mode (it catches up):");
    bench.reassign_mode(viewport, Mode::Preview);

    println!("Context badges (shared context, shared badge):");
    for panel in bench.panels() {
        let badge = badges.badge_for(panel.context());
        println!("  {} {} -> badge {}", panel.id(), panel.context(), badge.index());
    }

    println!("Closing the tree; the edit context keeps its selection:");
    bench.close_panel(tree);
    let edit_ctx = lobby.in_mode(Mode::Edit);
    let kept = bench.selection(&edit_ctx).cloned();
    let name = kept
        .as_deref()
        .and_then(|id| graph.node_by_id(id))
        .map_or("nothing", |node| node.name());
    println!("  {edit_ctx} still selects {kept:?} ({name})");
}
