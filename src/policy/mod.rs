//! Eviction policies.
//!
//! A policy owns the order index for the keys a [`Cache`](crate::Cache)
//! holds and nothing else; values stay in the entry store. Every tracked key
//! is addressed by the [`SlotId`] returned from [`EvictionPolicy::admit`],
//! which the cache stores next to the value so that bookkeeping on a hit
//! never has to search the index.
//!
//! ```text
//!   Cache::get / Cache::put
//!        │
//!        ▼
//!   ┌────────────────────┐   slot    ┌───────────────────────────────┐
//!   │ HashMapStore       │ ────────► │ EvictionPolicy<K>             │
//!   │ K → CacheEntry<V>  │           │  Fifo: IntrusiveList<K>       │
//!   └────────────────────┘           │  Lru:  IntrusiveList<K>       │
//!                                    │  Lfu:  FrequencyBuckets<K>    │
//!                                    └───────────────────────────────┘
//! ```
//!
//! | Policy | `on_get`          | `on_put` (existing key) | Victim                    |
//! |--------|-------------------|-------------------------|---------------------------|
//! | FIFO   | none              | none                    | oldest survivor           |
//! | LRU    | move to MRU       | move to MRU             | least recently used       |
//! | LFU    | frequency + 1     | frequency + 1           | min frequency, oldest     |
//! | LRFU   | frequency + 1     | frequency + 1           | min frequency, least used |
//!
//! [`Policy`] closes the set of variants behind one type so a cache can pick
//! its policy at runtime (from a [`PolicyKind`] or a config file) while the
//! per-policy types stay usable directly for monomorphized caches.

pub mod fifo;
pub mod lfu;
pub mod lru;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ds::SlotId;
use crate::error::ConfigError;

pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;

/// Order-index capability shared by all eviction policies.
///
/// Handles are only meaningful to the policy that issued them. Passing a
/// handle that was already evicted or forgotten is a no-op.
pub trait EvictionPolicy<K> {
    /// Starts tracking a key that is not yet present and returns its handle.
    fn admit(&mut self, key: K) -> SlotId;

    /// Bookkeeping for a read hit on `slot`.
    fn on_get(&mut self, slot: SlotId);

    /// Bookkeeping for a write that replaced the value at `slot`.
    fn on_put(&mut self, slot: SlotId);

    /// Handle of the entry [`evict`](Self::evict) would remove.
    fn select_victim(&self) -> Option<SlotId>;

    /// Removes the victim and returns its key.
    fn evict(&mut self) -> Option<K>;

    /// Stops tracking `slot` regardless of its position.
    fn forget(&mut self, slot: SlotId) -> Option<K>;

    fn key(&self, slot: SlotId) -> Option<&K>;

    /// Access frequency of `slot`, for policies that count accesses.
    fn frequency(&self, _slot: SlotId) -> Option<u64> {
        None
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    fn kind(&self) -> PolicyKind;
}

/// Names the available eviction policies.
///
/// Parses from and serializes to lowercase names.
///
/// ```
/// use cachecore::PolicyKind;
///
/// assert_eq!("LFU".parse::<PolicyKind>(), Ok(PolicyKind::Lfu));
/// assert_eq!(PolicyKind::Lrfu.to_string(), "lrfu");
/// assert!("mru".parse::<PolicyKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First in, first out.
    Fifo,
    /// Least recently used.
    #[default]
    Lru,
    /// Least frequently used, ties broken by insertion order.
    Lfu,
    /// Least frequently used, ties broken by recency.
    Lrfu,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Lfu,
        PolicyKind::Lrfu,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Lfu => "lfu",
            PolicyKind::Lrfu => "lrfu",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::unknown_policy(name))
    }
}

/// Runtime-selected eviction policy.
#[derive(Debug)]
pub enum Policy<K> {
    Fifo(FifoPolicy<K>),
    Lru(LruPolicy<K>),
    /// Covers both LFU and LRFU; the tie-break lives in the policy.
    Lfu(LfuPolicy<K>),
}

impl<K> Policy<K> {
    pub fn new(kind: PolicyKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    /// Builds the policy for `kind` with room for `capacity` keys.
    pub fn with_capacity(kind: PolicyKind, capacity: usize) -> Self {
        match kind {
            PolicyKind::Fifo => Policy::Fifo(FifoPolicy::with_capacity(capacity)),
            PolicyKind::Lru => Policy::Lru(LruPolicy::with_capacity(capacity)),
            PolicyKind::Lfu => Policy::Lfu(LfuPolicy::with_capacity(capacity)),
            PolicyKind::Lrfu => Policy::Lfu(LfuPolicy::lrfu_with_capacity(capacity)),
        }
    }
}

impl<K> Default for Policy<K> {
    fn default() -> Self {
        Self::new(PolicyKind::default())
    }
}

macro_rules! dispatch {
    ($self:expr, $p:ident => $body:expr) => {
        match $self {
            Policy::Fifo($p) => $body,
            Policy::Lru($p) => $body,
            Policy::Lfu($p) => $body,
        }
    };
}

impl<K> EvictionPolicy<K> for Policy<K> {
    #[inline]
    fn admit(&mut self, key: K) -> SlotId {
        dispatch!(self, p => p.admit(key))
    }

    #[inline]
    fn on_get(&mut self, slot: SlotId) {
        dispatch!(self, p => p.on_get(slot))
    }

    #[inline]
    fn on_put(&mut self, slot: SlotId) {
        dispatch!(self, p => p.on_put(slot))
    }

    #[inline]
    fn select_victim(&self) -> Option<SlotId> {
        dispatch!(self, p => p.select_victim())
    }

    #[inline]
    fn evict(&mut self) -> Option<K> {
        dispatch!(self, p => p.evict())
    }

    #[inline]
    fn forget(&mut self, slot: SlotId) -> Option<K> {
        dispatch!(self, p => p.forget(slot))
    }

    #[inline]
    fn key(&self, slot: SlotId) -> Option<&K> {
        dispatch!(self, p => p.key(slot))
    }

    #[inline]
    fn frequency(&self, slot: SlotId) -> Option<u64> {
        dispatch!(self, p => p.frequency(slot))
    }

    #[inline]
    fn len(&self) -> usize {
        dispatch!(self, p => p.len())
    }

    fn clear(&mut self) {
        dispatch!(self, p => p.clear())
    }

    fn kind(&self) -> PolicyKind {
        dispatch!(self, p => p.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_kind_parse_is_case_insensitive() {
        assert_eq!("fifo".parse::<PolicyKind>(), Ok(PolicyKind::Fifo));
        assert_eq!(" Lru ".parse::<PolicyKind>(), Ok(PolicyKind::Lru));
        assert_eq!("LRFU".parse::<PolicyKind>(), Ok(PolicyKind::Lrfu));
    }

    #[test]
    fn test_policy_kind_parse_rejects_unknown() {
        let err = "clock".parse::<PolicyKind>().unwrap_err();
        assert!(err.message().contains("'clock'"));
    }

    #[test]
    fn test_policy_kind_display_round_trips_through_parse() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.to_string().parse::<PolicyKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_policy_kind_serde_lowercase() {
        let json = serde_json::to_string(&PolicyKind::Lfu).unwrap();
        assert_eq!(json, "\"lfu\"");
        let kind: PolicyKind = serde_json::from_str("\"fifo\"").unwrap();
        assert_eq!(kind, PolicyKind::Fifo);
        assert!(serde_json::from_str::<PolicyKind>("\"FIFO\"").is_err());
    }

    #[test]
    fn test_policy_reports_kind() {
        for kind in PolicyKind::ALL {
            let policy: Policy<u32> = Policy::new(kind);
            assert_eq!(policy.kind(), kind);
        }
    }

    #[test]
    fn test_policy_default_is_lru() {
        let policy: Policy<u32> = Policy::default();
        assert_eq!(policy.kind(), PolicyKind::Lru);
        assert!(policy.is_empty());
    }

    #[test]
    fn test_policy_dispatch_evicts_per_variant() {
        // Same trace, three different victims.
        let expected = [
            (PolicyKind::Fifo, 1),
            (PolicyKind::Lru, 2),
            (PolicyKind::Lfu, 2),
        ];
        for (kind, victim) in expected {
            let mut policy = Policy::new(kind);
            let one = policy.admit(1);
            policy.admit(2);
            policy.admit(3);
            policy.on_get(one);
            assert_eq!(policy.evict(), Some(victim), "{kind}");
            assert_eq!(policy.len(), 2);
        }
    }

    #[test]
    fn test_frequency_only_reported_by_counting_policies() {
        let mut lru: Policy<u32> = Policy::new(PolicyKind::Lru);
        let slot = lru.admit(7);
        assert_eq!(lru.frequency(slot), None);

        let mut lfu: Policy<u32> = Policy::new(PolicyKind::Lfu);
        let slot = lfu.admit(7);
        lfu.on_get(slot);
        assert_eq!(lfu.frequency(slot), Some(1));
    }
}
