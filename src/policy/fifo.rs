//! First-In, First-Out eviction.
//!
//! Keys are kept in an [`IntrusiveList`] in admission order: new keys go to
//! the back, the victim is always the front. Reads and value updates leave
//! the order untouched, so the victim is the oldest key still present.
//!
//! ```text
//!   front (victim)                         back (newest)
//!     [k1] ◄──► [k2] ◄──► [k3] ◄──► [k4]
//!
//!   get(k1)       → order unchanged
//!   put(k2, v')   → order unchanged
//!   admit(k5)     → evict k1, push k5 at the back
//! ```
//!
//! Explicit removal unlinks the node in O(1) through its handle, so removed
//! keys never linger in the order index.
use crate::ds::{IntrusiveList, SlotId};
use crate::policy::{EvictionPolicy, PolicyKind};

/// Insertion-order index.
#[derive(Debug)]
pub struct FifoPolicy<K> {
    order: IntrusiveList<K>,
}

impl<K> FifoPolicy<K> {
    pub fn new() -> Self {
        Self {
            order: IntrusiveList::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: IntrusiveList::with_capacity(capacity),
        }
    }

    /// Keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.order.debug_validate_invariants();
    }
}

impl<K> Default for FifoPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> EvictionPolicy<K> for FifoPolicy<K> {
    #[inline]
    fn admit(&mut self, key: K) -> SlotId {
        self.order.push_back(key)
    }

    #[inline]
    fn on_get(&mut self, _slot: SlotId) {}

    #[inline]
    fn on_put(&mut self, _slot: SlotId) {}

    #[inline]
    fn select_victim(&self) -> Option<SlotId> {
        self.order.front_id()
    }

    #[inline]
    fn evict(&mut self) -> Option<K> {
        self.order.pop_front()
    }

    #[inline]
    fn forget(&mut self, slot: SlotId) -> Option<K> {
        self.order.remove(slot)
    }

    #[inline]
    fn key(&self, slot: SlotId) -> Option<&K> {
        self.order.get(slot)
    }

    #[inline]
    fn len(&self) -> usize {
        self.order.len()
    }

    fn clear(&mut self) {
        self.order.clear();
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_victim_is_oldest_admitted() {
        let mut fifo = FifoPolicy::new();
        let a = fifo.admit("a");
        fifo.admit("b");
        fifo.admit("c");

        assert_eq!(fifo.select_victim(), Some(a));
        assert_eq!(fifo.evict(), Some("a"));
        assert_eq!(fifo.evict(), Some("b"));
        assert_eq!(fifo.evict(), Some("c"));
        assert_eq!(fifo.evict(), None);
    }

    #[test]
    fn test_access_does_not_reorder() {
        let mut fifo = FifoPolicy::new();
        let a = fifo.admit(1);
        let b = fifo.admit(2);
        fifo.on_get(a);
        fifo.on_put(a);
        fifo.on_get(b);

        assert_eq!(fifo.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(fifo.select_victim(), Some(a));
        fifo.debug_validate_invariants();
    }

    #[test]
    fn test_forget_unlinks_middle() {
        let mut fifo = FifoPolicy::new();
        fifo.admit(1);
        let b = fifo.admit(2);
        fifo.admit(3);

        assert_eq!(fifo.forget(b), Some(2));
        assert_eq!(fifo.forget(b), None);
        assert_eq!(fifo.len(), 2);
        assert_eq!(fifo.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        fifo.debug_validate_invariants();
    }

    #[test]
    fn test_oldest_survivor_after_eviction() {
        let mut fifo = FifoPolicy::new();
        fifo.admit(1);
        fifo.admit(2);
        fifo.evict();
        fifo.admit(3);
        // 1 is gone; 2 is now the oldest.
        assert_eq!(fifo.evict(), Some(2));
    }

    #[test]
    fn test_clear_and_kind() {
        let mut fifo = FifoPolicy::with_capacity(4);
        fifo.admit(1);
        fifo.clear();
        assert!(fifo.is_empty());
        assert_eq!(fifo.select_victim(), None);
        assert_eq!(fifo.kind(), PolicyKind::Fifo);
        assert_eq!(fifo.frequency(SlotId(0)), None);
    }
}
