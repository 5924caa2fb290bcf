//! Entry storage for the cache facade.
//!
//! Stores focus on key/value ownership and lookup; policies manage eviction
//! order. A [`CacheEntry`] pairs the cached value with the handle its policy
//! assigned, which is all the facade needs to route bookkeeping calls.

pub mod hashmap;
pub mod traits;

use crate::ds::SlotId;

/// Upper bound on up-front allocation; larger capacities grow on demand.
const MAX_PREALLOC: usize = 1 << 16;

/// Number of slots worth reserving for a cache of `capacity` entries.
pub(crate) fn prealloc_hint(capacity: usize) -> usize {
    capacity.min(MAX_PREALLOC)
}

/// Value plus the policy handle for one cached key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<V> {
    pub value: V,
    pub slot: SlotId,
}

impl<V> CacheEntry<V> {
    pub fn new(value: V, slot: SlotId) -> Self {
        Self { value, slot }
    }
}
