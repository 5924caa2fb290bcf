//! # Least Frequently Used (LFU) eviction
//!
//! Each tracked key carries an access frequency that starts at 0 on
//! admission and grows by one on every read hit and every overwrite. The
//! victim is the key with the lowest frequency; ties are broken according to
//! the policy's [`TieBreak`]:
//!
//! | Constructor           | Tie-break              | Reported kind     |
//! |-----------------------|------------------------|-------------------|
//! | [`LfuPolicy::new`]    | earliest admitted      | `PolicyKind::Lfu` |
//! | [`LfuPolicy::lrfu`]   | least recently touched | `PolicyKind::Lrfu`|
//!
//! ## Architecture
//!
//! ```text
//!   FrequencyBuckets<K>
//!
//!   min_freq ─► freq 0: {k2, k3}      ← victim = first of lowest level
//!                 │
//!               freq 2: {k1}
//! ```
//!
//! Moving a key between levels and finding the lowest level are O(1); the
//! ordered membership of a level costs O(log b) for a level of `b` keys.
//!
//! ## Example
//!
//! ```
//! use cachecore::policy::{EvictionPolicy, LfuPolicy};
//!
//! let mut lfu = LfuPolicy::new();
//! let a = lfu.admit("a");
//! lfu.admit("b");
//! lfu.on_get(a);
//!
//! assert_eq!(lfu.frequency(a), Some(1));
//! assert_eq!(lfu.evict(), Some("b"));
//! ```
use crate::ds::{FrequencyBuckets, SlotId, TieBreak};
use crate::policy::{EvictionPolicy, PolicyKind};

/// Frequency-ordered index.
#[derive(Debug)]
pub struct LfuPolicy<K> {
    buckets: FrequencyBuckets<K>,
}

impl<K> LfuPolicy<K> {
    /// LFU with insertion-order tie-break.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_tie_break(capacity, TieBreak::Insertion)
    }

    /// LFU with recency tie-break (LRFU).
    pub fn lrfu() -> Self {
        Self::lrfu_with_capacity(0)
    }

    pub fn lrfu_with_capacity(capacity: usize) -> Self {
        Self::with_tie_break(capacity, TieBreak::Recency)
    }

    pub fn with_tie_break(capacity: usize, tie_break: TieBreak) -> Self {
        Self {
            buckets: FrequencyBuckets::with_capacity(capacity, tie_break),
        }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.buckets.tie_break()
    }

    /// Lowest frequency currently tracked.
    pub fn min_frequency(&self) -> Option<u64> {
        self.buckets.min_freq()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.buckets.debug_validate_invariants();
    }
}

impl<K> Default for LfuPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LfuPolicy<K> {
    #[inline]
    fn admit(&mut self, key: K) -> SlotId {
        self.buckets.insert(key)
    }

    #[inline]
    fn on_get(&mut self, slot: SlotId) {
        self.buckets.touch(slot);
    }

    #[inline]
    fn on_put(&mut self, slot: SlotId) {
        self.buckets.touch(slot);
    }

    #[inline]
    fn select_victim(&self) -> Option<SlotId> {
        self.buckets.peek_min()
    }

    #[inline]
    fn evict(&mut self) -> Option<K> {
        self.buckets.pop_min().map(|(key, _)| key)
    }

    #[inline]
    fn forget(&mut self, slot: SlotId) -> Option<K> {
        self.buckets.remove(slot).map(|(key, _)| key)
    }

    #[inline]
    fn key(&self, slot: SlotId) -> Option<&K> {
        self.buckets.key(slot)
    }

    #[inline]
    fn frequency(&self, slot: SlotId) -> Option<u64> {
        self.buckets.frequency(slot)
    }

    #[inline]
    fn len(&self) -> usize {
        self.buckets.len()
    }

    fn clear(&mut self) {
        self.buckets.clear();
    }

    fn kind(&self) -> PolicyKind {
        match self.buckets.tie_break() {
            TieBreak::Insertion => PolicyKind::Lfu,
            TieBreak::Recency => PolicyKind::Lrfu,
        }
    }
}
