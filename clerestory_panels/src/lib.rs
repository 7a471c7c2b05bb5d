// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=clerestory_panels --heading-base-level=0

//! Clerestory Panels: panel registry and shared-selection coordination.
//!
//! A panel is one open view, bound to a scope (what it looks at), a mode
//! (how it operates), and a presentation (how it draws). The first two axes
//! derive the panel's **context**; panels with equal contexts share one
//! selection, panels with different contexts are fully independent. That
//! one rule is the entire coordination model:
//!
//! - a tree and a viewport editing the same place stay in lockstep;
//! - the same place open in edit and in preview are separate worlds;
//! - closing a panel never clears what its siblings still share.
//!
//! The [`Workbench`] is the coordinator: it owns the open panels, the
//! per-context selection store, and the observer registry, and it is an
//! ordinary value you construct — one per session, or one per test. Every
//! mutation that changes a context's selection is delivered to that
//! context's observers synchronously, before the mutating call returns;
//! observers in other contexts are never invoked.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use clerestory_panels::{Presentation, SelectionObserver, Workbench};
//! use clerestory_scope::{ContextKey, Mode, Scope, ScopeKind};
//! use kurbo::Rect;
//!
//! // Stand-in for a renderer: records what it would repaint.
//! #[derive(Clone, Default)]
//! struct Repaints(Rc<RefCell<Vec<Option<String>>>>);
//!
//! impl SelectionObserver<String> for Repaints {
//!     fn selection_changed(&mut self, _context: &ContextKey, selected: Option<&String>) {
//!         self.0.borrow_mut().push(selected.cloned());
//!     }
//! }
//!
//! let mut bench: Workbench<String> = Workbench::new();
//! let place = Scope::new(ScopeKind::Place, "p1");
//! let frame = Rect::new(0.0, 0.0, 320.0, 480.0);
//!
//! let tree_log = Repaints::default();
//! let tree = bench.open_panel(
//!     place.clone(),
//!     Mode::Edit,
//!     Presentation::Tree,
//!     frame,
//!     tree_log.clone(),
//! );
//! let viewport_log = Repaints::default();
//! bench.open_panel(
//!     place.clone(),
//!     Mode::Edit,
//!     Presentation::Viewport,
//!     frame,
//!     viewport_log.clone(),
//! );
//!
//! // Both panels saw their initial (empty) state on open.
//! assert_eq!(tree_log.0.borrow().as_slice(), &[None]);
//!
//! // A pick in the tree reaches the viewport too — same context.
//! bench.select_in_panel(tree, "instance-7".to_string());
//! assert_eq!(
//!     viewport_log.0.borrow().last().unwrap().as_deref(),
//!     Some("instance-7")
//! );
//!
//! // A preview panel over the same place is a different context: opening
//! // it sees an empty selection, and picks there stay there.
//! let preview_log = Repaints::default();
//! let preview = bench.open_panel(
//!     place.clone(),
//!     Mode::Preview,
//!     Presentation::Viewport,
//!     frame,
//!     preview_log.clone(),
//! );
//! assert_eq!(preview_log.0.borrow().as_slice(), &[None]);
//!
//! bench.select_in_panel(preview, "instance-9".to_string());
//! let edit_context = place.clone().in_mode(Mode::Edit);
//! assert_eq!(bench.selection(&edit_context).map(String::as_str), Some("instance-7"));
//! ```
//!
//! ## Using components separately
//!
//! [`Workbench`] is a convenience facade. The pieces compose on their own:
//! [`ObserverRegistry`] is the per-context broadcast table,
//! [`BadgeAllocator`] hands out the stable per-context chrome badges, and
//! the selection bookkeeping lives in `clerestory_selection` — useful when
//! a host application already has its own notion of panels.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod badge;
mod observer;
mod panel;
mod workbench;

pub use badge::{Badge, BadgeAllocator};
pub use observer::{ObserverRegistry, SelectionObserver, observer};
pub use panel::{Panel, PanelId, Presentation};
pub use workbench::Workbench;
