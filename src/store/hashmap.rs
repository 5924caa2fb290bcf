//! HashMap-backed entry store.
//!
//! ## Architecture
//! - Entries live in an `FxHashMap<K, T>`; lookup, insert, update and delete
//!   are O(1) on average.
//! - Capacity is an entry count. A new key is refused with [`StoreFull`]
//!   once `len == capacity`; replacing an existing key is always allowed.
//!
//! ## Example Usage
//! ```rust
//! use cachecore::store::hashmap::HashMapStore;
//! use cachecore::store::traits::{StoreCore, StoreMut};
//!
//! let mut store: HashMapStore<u64, &str> = HashMapStore::new(2);
//! store.try_insert(1, "a").unwrap();
//! assert!(store.contains(&1));
//! assert_eq!(store.get(&1), Some(&"a"));
//! ```
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::store::prealloc_hint;
use crate::store::traits::{StoreCore, StoreFull, StoreMut};

/// Single-threaded HashMap-backed store.
#[derive(Debug)]
pub struct HashMapStore<K, T> {
    map: FxHashMap<K, T>,
    capacity: usize,
}

impl<K, T> HashMapStore<K, T>
where
    K: Eq + Hash,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(prealloc_hint(capacity), Default::default()),
            capacity,
        }
    }

    /// Iterates all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &T)> {
        self.map.iter()
    }
}

impl<K, T> StoreCore<K, T> for HashMapStore<K, T>
where
    K: Eq + Hash,
{
    #[inline]
    fn get(&self, key: &K) -> Option<&T> {
        self.map.get(key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, T> StoreMut<K, T> for HashMapStore<K, T>
where
    K: Eq + Hash,
{
    #[inline]
    fn get_mut(&mut self, key: &K) -> Option<&mut T> {
        self.map.get_mut(key)
    }

    fn try_insert(&mut self, key: K, entry: T) -> Result<Option<T>, StoreFull> {
        if !self.map.contains_key(&key) && self.map.len() >= self.capacity {
            return Err(StoreFull);
        }
        Ok(self.map.insert(key, entry))
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<T> {
        self.map.remove(key)
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashmap_store_basic_ops() {
        let mut store = HashMapStore::new(2);
        assert_eq!(store.try_insert("k1", 1), Ok(None));
        assert_eq!(store.get(&"k1"), Some(&1));
        assert!(store.contains(&"k1"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.capacity(), 2);
        assert_eq!(store.remove(&"k1"), Some(1));
        assert!(!store.contains(&"k1"));
        assert!(store.is_empty());
    }

    #[test]
    fn hashmap_store_capacity_enforced_for_new_keys_only() {
        let mut store = HashMapStore::new(1);
        assert_eq!(store.try_insert("k1", 1), Ok(None));
        assert_eq!(store.try_insert("k2", 2), Err(StoreFull));
        assert_eq!(store.try_insert("k1", 10), Ok(Some(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn hashmap_store_zero_capacity_refuses_everything() {
        let mut store: HashMapStore<&str, i32> = HashMapStore::new(0);
        assert_eq!(store.try_insert("k", 1), Err(StoreFull));
        assert!(store.is_empty());
    }

    #[test]
    fn hashmap_store_get_mut_and_clear() {
        let mut store = HashMapStore::new(4);
        store.try_insert(1u32, String::from("a")).unwrap();
        store.try_insert(2u32, String::from("b")).unwrap();
        if let Some(v) = store.get_mut(&1) {
            v.push('!');
        }
        assert_eq!(store.get(&1).map(String::as_str), Some("a!"));
        assert_eq!(store.iter().count(), 2);
        store.clear();
        assert!(store.is_empty());
    }
}
