// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `clerestory_panels` crate.
//!
//! These drive the workbench the way an interaction layer would: open
//! panels, pick items, reassign modes, close panels — and assert on what
//! the registered observers saw.

use std::cell::RefCell;
use std::rc::Rc;

use clerestory_panels::{Presentation, SelectionObserver, Workbench};
use clerestory_scope::{ContextKey, Mode, Scope, ScopeKind};
use kurbo::Rect;

/// Stand-in for a panel's renderer: records every notification.
#[derive(Clone, Default)]
struct Repaints(Rc<RefCell<Vec<Option<&'static str>>>>);

impl SelectionObserver<&'static str> for Repaints {
    fn selection_changed(&mut self, _context: &ContextKey, selected: Option<&&'static str>) {
        self.0.borrow_mut().push(selected.copied());
    }
}

impl Repaints {
    fn calls(&self) -> usize {
        self.0.borrow().len()
    }

    fn last(&self) -> Option<&'static str> {
        self.0.borrow().last().copied().flatten()
    }
}

fn frame() -> Rect {
    Rect::new(0.0, 0.0, 320.0, 480.0)
}

fn game(id: &str) -> Scope {
    Scope::new(ScopeKind::Game, id)
}

#[test]
fn open_panel_reflects_current_selection_immediately() {
    let mut bench: Workbench<&str> = Workbench::new();

    let first = Repaints::default();
    let a = bench.open_panel(game("g1"), Mode::Edit, Presentation::Tree, frame(), first.clone());
    // A panel opening into an untouched context sees "nothing selected".
    assert_eq!(first.0.borrow().as_slice(), &[None]);

    bench.select_in_panel(a, "instance-7");

    // A panel opening into a live context sees the shared selection at once.
    let second = Repaints::default();
    bench.open_panel(game("g1"), Mode::Edit, Presentation::Viewport, frame(), second.clone());
    assert_eq!(second.0.borrow().as_slice(), &[Some("instance-7")]);
}

#[test]
fn panels_sharing_a_context_are_notified_exactly_once_each() {
    let mut bench: Workbench<&str> = Workbench::new();

    let tree = Repaints::default();
    let viewport = Repaints::default();
    bench.open_panel(game("g1"), Mode::Edit, Presentation::Tree, frame(), tree.clone());
    bench.open_panel(game("g1"), Mode::Edit, Presentation::Viewport, frame(), viewport.clone());

    let context = game("g1").in_mode(Mode::Edit);
    bench.set_selection(&context, Some("instance-7"));

    // One initial call each, one broadcast each.
    assert_eq!(tree.calls(), 2);
    assert_eq!(viewport.calls(), 2);
    assert_eq!(tree.last(), Some("instance-7"));
    assert_eq!(viewport.last(), Some("instance-7"));
    assert_eq!(bench.selection(&context), Some(&"instance-7"));
}

#[test]
fn different_contexts_are_isolated() {
    let mut bench: Workbench<&str> = Workbench::new();

    let edit = Repaints::default();
    let preview = Repaints::default();
    bench.open_panel(game("g1"), Mode::Edit, Presentation::Tree, frame(), edit.clone());
    bench.open_panel(game("g1"), Mode::Preview, Presentation::Tree, frame(), preview.clone());

    let edit_ctx = game("g1").in_mode(Mode::Edit);
    let preview_ctx = game("g1").in_mode(Mode::Preview);
    bench.set_selection(&edit_ctx, Some("instance-7"));

    assert_eq!(bench.selection(&edit_ctx), Some(&"instance-7"));
    assert_eq!(bench.selection(&preview_ctx), None);
    // The preview panel only ever saw its initial empty state.
    assert_eq!(preview.calls(), 1);
}

#[test]
fn no_op_mutations_notify_nobody() {
    let mut bench: Workbench<&str> = Workbench::new();

    let log = Repaints::default();
    bench.open_panel(game("g1"), Mode::Edit, Presentation::Tree, frame(), log.clone());
    let context = game("g1").in_mode(Mode::Edit);

    assert!(bench.set_selection(&context, Some("a")));
    assert!(!bench.set_selection(&context, Some("a")));
    assert!(!bench.clear_selection(&game("g2").in_mode(Mode::Edit)));

    // Initial call + one effective change.
    assert_eq!(log.calls(), 2);
}

#[test]
fn toggle_in_panel_replaces_then_clears() {
    let mut bench: Workbench<&str> = Workbench::new();

    let log = Repaints::default();
    let panel = bench.open_panel(game("g1"), Mode::Edit, Presentation::List, frame(), log.clone());
    let context = game("g1").in_mode(Mode::Edit);

    bench.toggle_in_panel(panel, "a");
    assert_eq!(bench.selection(&context), Some(&"a"));

    // Toggling another item displaces rather than extends.
    bench.toggle_in_panel(panel, "b");
    assert_eq!(bench.selection(&context), Some(&"b"));

    bench.toggle_in_panel(panel, "b");
    assert_eq!(bench.selection(&context), None);
    assert_eq!(log.last(), None);
}

#[test]
fn reassignment_migrates_the_subscription() {
    let mut bench: Workbench<&str> = Workbench::new();

    let log = Repaints::default();
    let panel = bench.open_panel(game("g1"), Mode::Edit, Presentation::Tree, frame(), log.clone());
    let edit_ctx = game("g1").in_mode(Mode::Edit);
    let server_ctx = game("g1").in_mode(Mode::Server);

    assert!(bench.reassign_mode(panel, Mode::Server));
    assert_eq!(bench.panel(panel).unwrap().mode(), Mode::Server);
    assert_eq!(bench.panel(panel).unwrap().context(), &server_ctx);

    let calls_after_reassign = log.calls();

    // Mutations on the old context no longer reach the panel…
    bench.set_selection(&edit_ctx, Some("stale"));
    assert_eq!(log.calls(), calls_after_reassign);

    // …while the new context does.
    bench.set_selection(&server_ctx, Some("fresh"));
    assert_eq!(log.calls(), calls_after_reassign + 1);
    assert_eq!(log.last(), Some("fresh"));
}

#[test]
fn reassignment_sees_the_new_context_selection() {
    let mut bench: Workbench<&str> = Workbench::new();

    // Seed the server context through another panel.
    let seed = bench.open_panel(
        game("g1"),
        Mode::Server,
        Presentation::Viewport,
        frame(),
        Repaints::default(),
    );
    bench.select_in_panel(seed, "instance-3");

    let log = Repaints::default();
    let panel = bench.open_panel(game("g1"), Mode::Edit, Presentation::Tree, frame(), log.clone());
    bench.reassign_mode(panel, Mode::Server);

    // The migration callback carried the server context's selection.
    assert_eq!(log.last(), Some("instance-3"));
}

#[test]
fn scenario_shared_tree_and_viewport_with_unrelated_text_panel() {
    let mut bench: Workbench<&str> = Workbench::new();

    let a = Repaints::default();
    let b = Repaints::default();
    let c = Repaints::default();

    let tree = bench.open_panel(game("g1"), Mode::Edit, Presentation::Tree, frame(), a.clone());
    bench.open_panel(game("g1"), Mode::Edit, Presentation::Viewport, frame(), b.clone());
    bench.open_panel(
        Scope::new(ScopeKind::Asset, "m1"),
        Mode::Edit,
        Presentation::Text,
        frame(),
        c.clone(),
    );

    bench.set_selection(&game("g1").in_mode(Mode::Edit), Some("instance-7"));

    assert_eq!(a.last(), Some("instance-7"));
    assert_eq!(b.last(), Some("instance-7"));
    assert_eq!(c.calls(), 1); // initial state only
    assert_eq!(
        bench.selection(&Scope::new(ScopeKind::Asset, "m1").in_mode(Mode::Edit)),
        None
    );

    // Closing the tree leaves the shared selection with the viewport.
    let closed = bench.close_panel(tree).unwrap();
    assert_eq!(closed.presentation(), Presentation::Tree);
    assert_eq!(
        bench.selection(&game("g1").in_mode(Mode::Edit)),
        Some(&"instance-7")
    );

    // And the viewport still hears subsequent changes.
    bench.set_selection(&game("g1").in_mode(Mode::Edit), None);
    assert_eq!(b.last(), None);
}

#[test]
fn dormant_context_selection_survives_for_reuse() {
    let mut bench: Workbench<&str> = Workbench::new();

    let panel = bench.open_panel(
        game("g1"),
        Mode::Edit,
        Presentation::Tree,
        frame(),
        Repaints::default(),
    );
    bench.select_in_panel(panel, "instance-7");
    bench.close_panel(panel);

    // No panel is left in the context, but the selection is dormant, not gone.
    let context = game("g1").in_mode(Mode::Edit);
    assert_eq!(bench.selection(&context), Some(&"instance-7"));

    let log = Repaints::default();
    bench.open_panel(game("g1"), Mode::Edit, Presentation::Grid, frame(), log.clone());
    assert_eq!(log.0.borrow().as_slice(), &[Some("instance-7")]);
}

#[test]
fn ids_are_monotonic_and_never_reused() {
    let mut bench: Workbench<&str> = Workbench::new();

    let a = bench.open_panel(game("g1"), Mode::Edit, Presentation::Tree, frame(), Repaints::default());
    let b = bench.open_panel(game("g2"), Mode::Edit, Presentation::Tree, frame(), Repaints::default());
    bench.close_panel(a);
    let c = bench.open_panel(game("g3"), Mode::Edit, Presentation::Tree, frame(), Repaints::default());

    assert!(a < b && b < c);
    assert!(bench.panel(a).is_none());
    assert_eq!(bench.panel_count(), 2);
}

#[test]
fn frames_are_recorded_without_broadcast() {
    let mut bench: Workbench<&str> = Workbench::new();

    let log = Repaints::default();
    let panel = bench.open_panel(game("g1"), Mode::Edit, Presentation::Tree, frame(), log.clone());

    let moved = Rect::new(40.0, 20.0, 360.0, 500.0);
    assert!(bench.set_frame(panel, moved));
    assert_eq!(bench.panel(panel).unwrap().frame(), moved);
    assert_eq!(log.calls(), 1); // only the initial callback

    assert!(!bench.set_frame(missing_panel(), moved));
}

/// An id no panel of a fresh workbench will ever have.
fn missing_panel() -> clerestory_panels::PanelId {
    clerestory_panels::PanelId::new(u32::MAX)
}

#[test]
fn operations_on_unknown_panels_are_inert() {
    let mut bench: Workbench<&str> = Workbench::new();

    assert!(bench.close_panel(missing_panel()).is_none());
    assert!(!bench.reassign_mode(missing_panel(), Mode::Edit));
    assert!(!bench.select_in_panel(missing_panel(), "x"));
    assert!(!bench.toggle_in_panel(missing_panel(), "x"));
}

#[test]
fn panels_in_context_filters_by_key() {
    let mut bench: Workbench<&str> = Workbench::new();

    bench.open_panel(game("g1"), Mode::Edit, Presentation::Tree, frame(), Repaints::default());
    bench.open_panel(game("g1"), Mode::Edit, Presentation::Viewport, frame(), Repaints::default());
    bench.open_panel(game("g1"), Mode::Preview, Presentation::Tree, frame(), Repaints::default());

    let context = game("g1").in_mode(Mode::Edit);
    let presentations: Vec<_> = bench
        .panels_in_context(&context)
        .map(|panel| panel.presentation())
        .collect();
    assert_eq!(presentations, [Presentation::Tree, Presentation::Viewport]);
}
