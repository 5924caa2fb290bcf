//! Reference-only LRU for page-reference traces.
//!
//! [`ReferenceLru`] tracks which keys are resident and in what recency order,
//! with no payload. Each [`refer`](ReferenceLru::refer) is a get-or-insert:
//! a resident key moves to the most recent position, an absent key is
//! admitted there and evicts the least recently referenced key if full.
//!
//! ```
//! use cachecore::ReferenceLru;
//!
//! let mut frames = ReferenceLru::new(3);
//! let trace = [1, 2, 3, 1, 4, 5];
//! let faults = trace.iter().filter(|page| !frames.refer(**page)).count();
//!
//! assert_eq!(faults, 5);
//! assert_eq!(frames.iter().copied().collect::<Vec<_>>(), vec![5, 4, 1]);
//! ```
use std::hash::Hash;

use crate::cache::LruCache;
use crate::error::ConfigError;

/// Key-only LRU: a [`LruCache`] with unit values.
#[derive(Debug)]
pub struct ReferenceLru<K> {
    inner: LruCache<K, ()>,
}

impl<K> ReferenceLru<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: LruCache::new(capacity),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is negative.
    pub fn try_new(capacity: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: LruCache::try_new(capacity)?,
        })
    }

    /// References `key`. Returns `true` if it was already resident.
    pub fn refer(&mut self, key: K) -> bool {
        if self.inner.get(&key).is_some() {
            return true;
        }
        self.inner.put(key, ());
        false
    }

    /// Resident keys from most to least recently referenced.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.inner.policy().iter()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
