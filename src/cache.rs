//! # Cache facade
//!
//! [`Cache`] composes an entry store with an [`EvictionPolicy`] behind one
//! operation surface. The store owns values; the policy owns eviction order.
//! Each stored [`CacheEntry`] carries the policy handle for its key, which is
//! how the facade keeps the two in lockstep without searching.
//!
//! ```text
//!   put(k, v)
//!   ═══════════════════════════════════════════════════════════════════
//!     k present?        ── yes ──► replace value, policy.on_put(slot)
//!        │ no
//!     capacity == 0?    ── yes ──► drop the write
//!        │ no
//!     len == capacity?  ── yes ──► policy.evict() → store.remove(victim)
//!        │
//!     slot = policy.admit(k); store.insert(k, CacheEntry { v, slot })
//!
//!   get(k)
//!   ═══════════════════════════════════════════════════════════════════
//!     store.get(k) ── hit ──► policy.on_get(slot), return &v
//!                  └─ miss ─► None
//! ```
//!
//! ## Choosing a policy
//!
//! | Type                 | Policy chosen    | Dispatch |
//! |----------------------|------------------|----------|
//! | [`FifoCache<K, V>`]  | FIFO             | static   |
//! | [`LruCache<K, V>`]   | LRU              | static   |
//! | [`LfuCache<K, V>`]   | LFU              | static   |
//! | `Cache<K, V>`        | any [`PolicyKind`] at runtime | enum match |
//!
//! ## Example
//!
//! ```
//! use cachecore::{Cache, LruCache, PolicyKind};
//!
//! let mut lru: LruCache<u32, &str> = LruCache::new(2);
//! lru.put(1, "a");
//! lru.put(2, "b");
//! lru.get(&1);
//! lru.put(3, "c"); // evicts 2
//! assert!(!lru.contains(&2));
//!
//! let mut lfu: Cache<u32, &str> = Cache::with_kind(2, PolicyKind::Lfu);
//! lfu.put(1, "a");
//! assert_eq!(lfu.frequency(&1), Some(0));
//! ```
use std::hash::Hash;

use tracing::{debug, trace, warn};

use crate::ds::SlotId;
use crate::error::{ConfigError, InvariantError, validate_capacity};
#[cfg(feature = "metrics")]
use crate::metrics::{
    CacheMetrics, CacheMetricsSnapshot, CoreMetricsRecorder, MetricsSnapshotProvider,
};
use crate::policy::{EvictionPolicy, FifoPolicy, LfuPolicy, LruPolicy, Policy, PolicyKind};
use crate::store::hashmap::HashMapStore;
use crate::store::traits::{StoreCore, StoreMut};
use crate::store::{CacheEntry, prealloc_hint};

/// Bounded key-value cache with a pluggable eviction policy.
#[derive(Debug)]
pub struct Cache<K, V, P = Policy<K>> {
    store: HashMapStore<K, CacheEntry<V>>,
    policy: P,
    #[cfg(feature = "metrics")]
    metrics: CacheMetrics,
}

/// Cache that evicts in insertion order.
pub type FifoCache<K, V> = Cache<K, V, FifoPolicy<K>>;
/// Cache that evicts the least recently used entry.
pub type LruCache<K, V> = Cache<K, V, LruPolicy<K>>;
/// Cache that evicts the least frequently used entry.
pub type LfuCache<K, V> = Cache<K, V, LfuPolicy<K>>;

impl<K, V, P> Cache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K> + Default,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of 0 is valid and produces a cache that retains nothing.
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, P::default())
    }

    /// Fallible constructor for signed capacities.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is negative.
    pub fn try_new(capacity: i64) -> Result<Self, ConfigError> {
        Ok(Self::new(validate_capacity(capacity)?))
    }
}

impl<K, V> Cache<K, V, Policy<K>>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache whose policy is chosen at runtime.
    pub fn with_kind(capacity: usize, kind: PolicyKind) -> Self {
        Self::with_policy(capacity, Policy::with_capacity(kind, prealloc_hint(capacity)))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is negative.
    pub fn try_with_kind(capacity: i64, kind: PolicyKind) -> Result<Self, ConfigError> {
        Ok(Self::with_kind(validate_capacity(capacity)?, kind))
    }
}

impl<K, V, P> Cache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    /// Creates a cache around an existing (normally empty) policy.
    ///
    /// Keys already tracked by `policy` have no stored value and are cleared.
    pub fn with_policy(capacity: usize, mut policy: P) -> Self {
        if !policy.is_empty() {
            policy.clear();
        }
        debug!(capacity, policy = %policy.kind(), "creating cache");
        Self {
            store: HashMapStore::new(capacity),
            policy,
            #[cfg(feature = "metrics")]
            metrics: CacheMetrics::new(),
        }
    }

    /// Returns the value for `key`, recording the access with the policy.
    ///
    /// LRU promotes the key; LFU increments its frequency; FIFO does nothing.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.store.get(key) {
            Some(entry) => {
                self.policy.on_get(entry.slot);
                #[cfg(feature = "metrics")]
                self.metrics.record_get_hit();
                Some(&entry.value)
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                None
            },
        }
    }

    /// Inserts or replaces the value for `key`.
    ///
    /// Replacing keeps the entry and reports the write to the policy. A new
    /// key evicts the policy's victim first when the cache is full. Writes
    /// to a zero-capacity cache are dropped.
    pub fn put(&mut self, key: K, value: V) {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(entry) = self.store.get_mut(&key) {
            entry.value = value;
            self.policy.on_put(entry.slot);
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();
            return;
        }

        if self.capacity() == 0 {
            debug!("dropping write to zero-capacity cache");
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_dropped();
            return;
        }

        if self.store.len() >= self.capacity() {
            self.evict_one();
        }

        let slot = self.policy.admit(key.clone());
        match self.store.try_insert(key, CacheEntry::new(value, slot)) {
            Ok(_) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_insert_new();
            },
            Err(err) => {
                warn!(error = %err, "store refused insert after eviction");
                self.policy.forget(slot);
            },
        }
    }

    /// Returns the value for `key` without touching eviction metadata.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.store.get(key).map(|entry| &entry.value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let entry = self.store.remove(key)?;
        self.policy.forget(entry.slot);
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();
        Some(entry.value)
    }

    /// The entry the next eviction would remove.
    pub fn peek_victim(&self) -> Option<(&K, &V)> {
        let key = self.policy.key(self.policy.select_victim()?)?;
        let entry = self.store.get(key)?;
        Some((key, &entry.value))
    }

    /// Evicts the policy's victim now, regardless of fill level.
    pub fn pop_victim(&mut self) -> Option<(K, V)> {
        self.evict_one()
    }

    /// Access frequency of `key` under LFU-family policies.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.store
            .get(key)
            .and_then(|entry| self.policy.frequency(entry.slot))
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Read-only access to the eviction policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.store.clear();
        self.policy.clear();
    }

    /// Checks that the store and the policy index describe the same keys.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first inconsistency found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.store.len() > self.capacity() {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.store.len(),
                self.capacity()
            )));
        }
        if self.store.len() != self.policy.len() {
            return Err(InvariantError::new(format!(
                "store holds {} entries but policy tracks {}",
                self.store.len(),
                self.policy.len()
            )));
        }
        for (key, entry) in self.store.iter() {
            if self.policy.key(entry.slot) != Some(key) {
                return Err(InvariantError::new(format!(
                    "slot {} is not tracked for its stored key",
                    entry.slot.index()
                )));
            }
        }
        Ok(())
    }

    fn evict_one(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let frequency = self
            .policy
            .select_victim()
            .and_then(|slot: SlotId| self.policy.frequency(slot));
        let key = self.policy.evict()?;
        let entry = self.store.remove(&key)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();
        trace!(
            policy = %self.policy.kind(),
            frequency,
            len = self.store.len(),
            capacity = self.capacity(),
            "evicted entry"
        );
        Some((key, entry.value))
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P> Cache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.store.len(), self.store.capacity())
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P> MetricsSnapshotProvider<CacheMetricsSnapshot> for Cache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    fn snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics_snapshot()
    }
}
