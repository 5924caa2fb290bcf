//! Entry store contracts.
//!
//! Stores own the authoritative key → entry mapping and nothing else. Keeping
//! a policy's order index consistent with the store is the facade's job, so a
//! store never calls back into a policy.

/// Error returned when inserting a new key into a store that is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreFull;

impl std::fmt::Display for StoreFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("store is at capacity")
    }
}

impl std::error::Error for StoreFull {}

/// Read-only store operations.
pub trait StoreCore<K, T> {
    /// Look up the entry for `key`.
    fn get(&self, key: &K) -> Option<&T>;

    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries the store will accept.
    fn capacity(&self) -> usize;
}

/// Mutating store operations for single-owner backends.
pub trait StoreMut<K, T>: StoreCore<K, T> {
    fn get_mut(&mut self, key: &K) -> Option<&mut T>;

    /// Insert or replace an entry. Returns the previous entry if present, or
    /// `StoreFull` when `key` is new and the store is at capacity.
    fn try_insert(&mut self, key: K, entry: T) -> Result<Option<T>, StoreFull>;

    fn remove(&mut self, key: &K) -> Option<T>;

    fn clear(&mut self);
}
