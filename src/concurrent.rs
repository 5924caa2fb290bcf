//! Thread-safe wrapper around a single [`Cache`].
//!
//! Every operation takes one `parking_lot::RwLock`. `get` needs the write
//! lock because hits update eviction metadata; `peek`, `len` and `contains`
//! only read. Values are returned by clone, so no guard escapes a call.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use cachecore::{ConcurrentCache, PolicyKind};
//!
//! let cache = Arc::new(ConcurrentCache::<u32, String>::with_kind(64, PolicyKind::Lru));
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || cache.put(t, format!("worker-{t}")))
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 4);
//! assert_eq!(cache.get(&2).as_deref(), Some("worker-2"));
//! ```
use std::fmt;
use std::hash::Hash;

use parking_lot::RwLock;

use crate::cache::Cache;
use crate::error::{ConfigError, validate_capacity};
use crate::policy::{EvictionPolicy, Policy, PolicyKind};

/// A [`Cache`] behind a reader-writer lock.
pub struct ConcurrentCache<K, V, P = Policy<K>> {
    inner: RwLock<Cache<K, V, P>>,
}

impl<K, V, P> fmt::Debug for ConcurrentCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentCache")
            .field("policy", &cache.policy_kind())
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

impl<K, V> ConcurrentCache<K, V, Policy<K>>
where
    K: Eq + Hash + Clone,
{
    pub fn with_kind(capacity: usize, kind: PolicyKind) -> Self {
        Self::from_cache(Cache::with_kind(capacity, kind))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is negative.
    pub fn try_with_kind(capacity: i64, kind: PolicyKind) -> Result<Self, ConfigError> {
        Ok(Self::with_kind(validate_capacity(capacity)?, kind))
    }
}

impl<K, V, P> ConcurrentCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    /// Wraps an existing cache.
    pub fn from_cache(cache: Cache<K, V, P>) -> Self {
        Self {
            inner: RwLock::new(cache),
        }
    }

    /// Returns a clone of the value and records the access.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.write().get(key).cloned()
    }

    /// Returns a clone of the value without touching eviction metadata.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read().peek(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        self.inner.write().put(key, value);
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Runs `f` with exclusive access, for multi-step operations that must
    /// not interleave with other callers.
    pub fn with_cache<R>(&self, f: impl FnOnce(&mut Cache<K, V, P>) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }

    pub fn into_inner(self) -> Cache<K, V, P> {
        self.inner.into_inner()
    }
}

impl<K, V, P> From<Cache<K, V, P>> for ConcurrentCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    fn from(cache: Cache<K, V, P>) -> Self {
        Self::from_cache(cache)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::cache::LfuCache;

    #[test]
    fn test_basic_ops_through_lock() {
        let cache = ConcurrentCache::<u32, u32>::with_kind(2, PolicyKind::Fifo);
        cache.put(1, 10);
        cache.put(2, 20);
        assert_eq!(cache.get(&1), Some(10));
        cache.put(3, 30);
        assert!(!cache.contains(&1));
        assert_eq!(cache.peek(&2), Some(20));
        assert_eq!(cache.remove(&2), Some(20));
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 2);
    }

    #[test]
    fn test_with_cache_is_atomic_read_modify_write() {
        let cache = Arc::new(ConcurrentCache::from(LfuCache::<u8, u64>::new(4)));
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for _ in 0..100 {
                        cache.with_cache(|c| {
                            let next = c.peek(&0).copied().unwrap_or(0) + 1;
                            c.put(0, next);
                        });
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }
        assert_eq!(cache.peek(&0), Some(800));
        let inner = Arc::try_unwrap(cache).unwrap().into_inner();
        assert_eq!(inner.frequency(&0), Some(799));
        assert!(inner.check_invariants().is_ok());
    }

    #[test]
    fn test_try_with_kind_rejects_negative() {
        assert!(ConcurrentCache::<u8, u8>::try_with_kind(-1, PolicyKind::Lru).is_err());
    }
}
