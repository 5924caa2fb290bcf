//! # Cache trait hierarchy
//!
//! Generic code that only needs the shared operation surface can take any
//! cache through these traits, whichever eviction policy backs it.
//!
//! ```text
//!   ┌─────────────────────────────────────┐
//!   │          CoreCache<K, V>            │
//!   │  put(&mut, K, V)                    │
//!   │  get(&mut, &K) → Option<&V>         │
//!   │  contains / len / is_empty          │
//!   │  capacity / clear                   │
//!   └──────────────────┬──────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────┐
//!   │         MutableCache<K, V>          │
//!   │  remove(&K) → Option<V>             │
//!   │  remove_batch(&[K]) → Vec<Option<V>>│
//!   └─────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use cachecore::traits::{CoreCache, MutableCache};
//! use cachecore::{FifoCache, LfuCache};
//!
//! fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, &str)]) {
//!     for (key, value) in data {
//!         cache.put(*key, value.to_string());
//!     }
//! }
//!
//! fn invalidate<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
//!     cache.remove_batch(keys);
//! }
//!
//! let mut fifo: FifoCache<u64, String> = FifoCache::new(8);
//! let mut lfu: LfuCache<u64, String> = LfuCache::new(8);
//! warm(&mut fifo, &[(1, "a"), (2, "b")]);
//! warm(&mut lfu, &[(1, "a"), (2, "b")]);
//! invalidate(&mut lfu, &[1]);
//! assert_eq!(CoreCache::len(&fifo), 2);
//! assert_eq!(CoreCache::len(&lfu), 1);
//! ```
//!
//! Caches are not internally synchronized; see
//! `ConcurrentCache` (feature `concurrency`) for a locked wrapper.
use std::hash::Hash;

use crate::cache::Cache;
use crate::policy::EvictionPolicy;

/// Operations every cache supports.
pub trait CoreCache<K, V> {
    /// Inserts or replaces the value for `key`, evicting if full.
    fn put(&mut self, key: K, value: V);

    /// Returns the value for `key`, updating policy metadata on a hit.
    fn get(&mut self, key: &K) -> Option<&V>;

    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;

    fn clear(&mut self);
}

/// Adds arbitrary key removal.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes each key in turn, returning the values in the same order.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

impl<K, V, P> CoreCache<K, V> for Cache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    #[inline]
    fn put(&mut self, key: K, value: V) {
        Cache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        Cache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        Cache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        Cache::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        Cache::capacity(self)
    }

    fn clear(&mut self) {
        Cache::clear(self)
    }
}

impl<K, V, P> MutableCache<K, V> for Cache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        Cache::remove(self, key)
    }
}
