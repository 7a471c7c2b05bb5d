// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=clerestory_selection --heading-base-level=0

//! Clerestory Selection: per-context single-selection bookkeeping.
//!
//! This crate tracks which item is selected in each **context** of a UI.
//! A context is whatever unit of sharing the application chooses (for
//! clerestory, a scope + mode pair); this crate only requires that it is
//! usable as a hash-map key. Items carry no hashing or ordering
//! constraints — equality is enough, so application ID types plug in
//! directly.
//!
//! Two types cooperate:
//!
//! - [`SelectionSlot`]: one context's selection. A slot holds **at most one
//!   selected item** and a monotonically increasing revision counter that
//!   bumps only when the selection actually changes.
//! - [`SelectionStore`]: the mapping from context key to slot. Slots are
//!   created lazily on the first effective mutation of a context and are
//!   never removed; reading an untouched context is free of side effects
//!   and simply reports an empty selection.
//!
//! The single-item restriction is deliberate: in this model, toggling an
//! item that is not selected **replaces** whatever was selected before, and
//! toggling the selected item clears the slot. Multi-select is
//! unrepresentable rather than merely unused.
//!
//! ## Minimal example
//!
//! ```rust
//! use clerestory_selection::SelectionStore;
//!
//! // Contexts keyed by &str here; any Eq + Hash key works.
//! let mut store: SelectionStore<&str, u32> = SelectionStore::new();
//!
//! // Untouched contexts read as empty, without allocating anything.
//! assert_eq!(store.selected(&"place:p1|edit"), None);
//! assert!(store.is_empty());
//!
//! // A pick in one context does not disturb another.
//! store.set("place:p1|edit", Some(7));
//! store.set("place:p2|edit", Some(9));
//! assert_eq!(store.selected(&"place:p1|edit"), Some(&7));
//! assert_eq!(store.selected(&"place:p2|edit"), Some(&9));
//!
//! // Toggle replaces, then clears.
//! store.toggle("place:p1|edit", 8);
//! assert_eq!(store.selected(&"place:p1|edit"), Some(&8));
//! store.toggle("place:p1|edit", 8);
//! assert_eq!(store.selected(&"place:p1|edit"), None);
//! ```
//!
//! Mutating methods report whether anything changed, and the per-slot
//! revision gives observers a cheap "did this context move?" marker —
//! broadcast layers use both to avoid notifying on no-ops.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod slot;
mod store;

pub use slot::SelectionSlot;
pub use store::SelectionStore;
