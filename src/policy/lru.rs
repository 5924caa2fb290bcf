//! # Least Recently Used (LRU) eviction
//!
//! Recency order lives in an [`IntrusiveList`]: the front is the most
//! recently used key, the back is the victim. The cache keeps each key's
//! list handle beside its value, so promoting a key on a hit is a handle
//! lookup plus an O(1) relink rather than a scan.
//!
//! ```text
//!   head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!            MRU                LRU (victim)
//!
//!   on_get(B):  head ──► [B] ◄──► [A] ◄──► [C] ◄── tail
//!   admit(D):   evict C first when full, then
//!               head ──► [D] ◄──► [B] ◄──► [A] ◄── tail
//! ```
//!
//! Writes to an existing key count as a use, same as reads.
//!
//! | Operation       | Time |
//! |-----------------|------|
//! | `admit`         | O(1) |
//! | `on_get/on_put` | O(1) |
//! | `evict`         | O(1) |
//! | `forget`        | O(1) |
use crate::ds::{IntrusiveList, SlotId};
use crate::policy::{EvictionPolicy, PolicyKind};

/// Recency-order index.
#[derive(Debug)]
pub struct LruPolicy<K> {
    recency: IntrusiveList<K>,
}

impl<K> LruPolicy<K> {
    pub fn new() -> Self {
        Self {
            recency: IntrusiveList::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            recency: IntrusiveList::with_capacity(capacity),
        }
    }

    /// Keys from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.recency.iter()
    }

    /// Most recently used key.
    pub fn peek_mru(&self) -> Option<&K> {
        self.recency.front()
    }

    /// Position of `slot` in recency order, 0 being the most recent.
    pub fn recency_rank(&self, slot: SlotId) -> Option<usize> {
        self.recency
            .iter_entries()
            .position(|(id, _)| id == slot)
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.recency.debug_validate_invariants();
    }
}

impl<K> Default for LruPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for LruPolicy<K> {
    #[inline]
    fn admit(&mut self, key: K) -> SlotId {
        self.recency.push_front(key)
    }

    #[inline]
    fn on_get(&mut self, slot: SlotId) {
        self.recency.move_to_front(slot);
    }

    #[inline]
    fn on_put(&mut self, slot: SlotId) {
        self.recency.move_to_front(slot);
    }

    #[inline]
    fn select_victim(&self) -> Option<SlotId> {
        self.recency.back_id()
    }

    #[inline]
    fn evict(&mut self) -> Option<K> {
        self.recency.pop_back()
    }

    #[inline]
    fn forget(&mut self, slot: SlotId) -> Option<K> {
        self.recency.remove(slot)
    }

    #[inline]
    fn key(&self, slot: SlotId) -> Option<&K> {
        self.recency.get(slot)
    }

    #[inline]
    fn len(&self) -> usize {
        self.recency.len()
    }

    fn clear(&mut self) {
        self.recency.clear();
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }
}
