// Copyright 2026 the Clerestory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instance → asset usage cross-references.

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Slot lists are short for typical worlds; keep the common case inline.
type SlotList = SmallVec<[usize; 4]>;

/// Bidirectional usage edges between instance slots and asset slots.
///
/// Both directions are indexed so "which instances use this asset" and
/// "which assets does this instance use" are single map lookups.
#[derive(Clone, Debug, Default)]
pub(crate) struct UsageTable {
    by_asset: HashMap<usize, SlotList>,
    by_instance: HashMap<usize, SlotList>,
    edges: usize,
}

impl UsageTable {
    /// Records that `instance` consumes `asset`.
    ///
    /// Recording the same edge again is a no-op; returns `true` if the edge
    /// was newly added.
    pub(crate) fn record(&mut self, instance: usize, asset: usize) -> bool {
        let instances = self.by_asset.entry(asset).or_default();
        if instances.contains(&instance) {
            return false;
        }
        instances.push(instance);
        self.by_instance.entry(instance).or_default().push(asset);
        self.edges += 1;
        true
    }

    /// Slots of the instances consuming `asset`, in recording order.
    pub(crate) fn instances_of(&self, asset: usize) -> &[usize] {
        self.by_asset.get(&asset).map_or(&[], SlotList::as_slice)
    }

    /// Slots of the assets consumed by `instance`, in recording order.
    pub(crate) fn assets_of(&self, instance: usize) -> &[usize] {
        self.by_instance
            .get(&instance)
            .map_or(&[], SlotList::as_slice)
    }

    /// Number of distinct usage edges recorded.
    pub(crate) fn len(&self) -> usize {
        self.edges
    }
}
