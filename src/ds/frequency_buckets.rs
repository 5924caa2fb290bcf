//! Frequency buckets for LFU victim selection.
//!
//! Tracks a frequency for every handle and groups handles by frequency level.
//! Each level owns an ordered set of its members; the order is a per-entry
//! *rank* chosen by the [`TieBreak`] mode, so the first member of the lowest
//! level is always the victim.
//!
//! ## Architecture
//!
//! ```text
//!   entries: SlotArena<Entry<K>>            buckets: FxHashMap<u64, Bucket>
//!   ┌──────┬─────────────────────────┐
//!   │ Slot │ key, freq, rank         │       min_freq = Some(0)
//!   ├──────┼─────────────────────────┤            │
//!   │ id_0 │ "a", 2, 0               │            ▼
//!   │ id_1 │ "b", 0, 1               │       freq=0: {1 → id_1, 2 → id_2}
//!   │ id_2 │ "c", 0, 2               │          │ next
//!   └──────┴─────────────────────────┘          ▼
//!                                            freq=2: {0 → id_0}
//! ```
//!
//! Levels are chained through `prev`/`next` so the minimum can be advanced
//! without scanning when its level drains. Within a level, members are kept
//! in a `BTreeMap<rank, SlotId>`:
//!
//! - [`TieBreak::Insertion`]: rank is the insertion sequence number and never
//!   changes, so ties go to the entry inserted earliest.
//! - [`TieBreak::Recency`]: rank is the logical time of the last access, so
//!   ties go to the entry used least recently.
//!
//! ## Operations
//!
//! | Operation  | Time                  | Notes                         |
//! |------------|-----------------------|-------------------------------|
//! | `insert`   | O(log b)              | New handle starts at freq 0   |
//! | `touch`    | O(log b)              | freq + 1, re-rank if recency  |
//! | `remove`   | O(log b)              | Arbitrary handle              |
//! | `peek_min` | O(log b)              | First member of `min_freq`    |
//! | `pop_min`  | O(log b)              | Remove the victim             |
//! | `frequency`| O(1)                  |                               |
//!
//! `b` is the number of members of the level being edited; moving between
//! levels and finding the minimum level are O(1).
//!
//! ## Example
//!
//! ```
//! use cachecore::ds::{FrequencyBuckets, TieBreak};
//!
//! let mut freq = FrequencyBuckets::new(TieBreak::Insertion);
//! let a = freq.insert("a");
//! let b = freq.insert("b");
//! freq.insert("c");
//!
//! freq.touch(a);
//! freq.touch(a);
//! assert_eq!(freq.frequency(a), Some(2));
//!
//! // "b" and "c" are tied at 0; "b" was inserted first.
//! assert_eq!(freq.peek_min(), Some(b));
//! assert_eq!(freq.pop_min(), Some(("b", 0)));
//! ```
use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::ds::slot_arena::{SlotArena, SlotId};

/// How ties between entries at the same frequency are broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieBreak {
    /// Evict the earliest-inserted entry among those tied.
    #[default]
    Insertion,
    /// Evict the least recently accessed entry among those tied.
    Recency,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::Insertion => f.write_str("insertion"),
            TieBreak::Recency => f.write_str("recency"),
        }
    }
}

#[derive(Debug)]
struct Entry<K> {
    freq: u64,
    rank: u64,
    key: K,
}

#[derive(Debug, Default)]
struct Bucket {
    members: BTreeMap<u64, SlotId>,
    prev: Option<u64>,
    next: Option<u64>,
}

/// Frequency-level index with O(1) minimum tracking.
#[derive(Debug)]
pub struct FrequencyBuckets<K> {
    entries: SlotArena<Entry<K>>,
    buckets: FxHashMap<u64, Bucket>,
    min_freq: Option<u64>,
    tie_break: TieBreak,
    clock: u64,
}

impl<K> FrequencyBuckets<K> {
    pub fn new(tie_break: TieBreak) -> Self {
        Self::with_capacity(0, tie_break)
    }

    pub fn with_capacity(capacity: usize, tie_break: TieBreak) -> Self {
        Self {
            entries: SlotArena::with_capacity(capacity),
            buckets: FxHashMap::default(),
            min_freq: None,
            tie_break,
            clock: 0,
        }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.entries.contains(id)
    }

    /// Lowest frequency currently tracked.
    pub fn min_freq(&self) -> Option<u64> {
        self.min_freq
    }

    pub fn frequency(&self, id: SlotId) -> Option<u64> {
        self.entries.get(id).map(|entry| entry.freq)
    }

    pub fn key(&self, id: SlotId) -> Option<&K> {
        self.entries.get(id).map(|entry| &entry.key)
    }

    /// Number of distinct frequency levels.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Handles at `freq` in eviction order.
    pub fn iter_bucket(&self, freq: u64) -> impl Iterator<Item = SlotId> + '_ {
        self.buckets
            .get(&freq)
            .into_iter()
            .flat_map(|bucket| bucket.members.values().copied())
    }

    /// Tracks `key` at frequency 0 and returns its handle.
    pub fn insert(&mut self, key: K) -> SlotId {
        let rank = self.tick();
        let id = self.entries.insert(Entry { freq: 0, rank, key });

        if !self.buckets.contains_key(&0) {
            self.link_bucket(0, None, self.min_freq);
        }
        self.attach(0, rank, id);
        self.min_freq = Some(0);
        id
    }

    /// Increments the frequency of `id` and returns the new value.
    ///
    /// Frequencies saturate at `u64::MAX`; a saturated entry is only re-ranked.
    pub fn touch(&mut self, id: SlotId) -> Option<u64> {
        let (freq, old_rank) = {
            let entry = self.entries.get(id)?;
            (entry.freq, entry.rank)
        };
        let new_rank = match self.tie_break {
            TieBreak::Insertion => old_rank,
            TieBreak::Recency => self.tick(),
        };

        if freq == u64::MAX {
            self.detach(freq, old_rank)?;
            self.attach(freq, new_rank, id);
            if let Some(entry) = self.entries.get_mut(id) {
                entry.rank = new_rank;
            }
            return Some(freq);
        }

        let next_freq = freq + 1;
        let (prev, next) = self.detach(freq, old_rank)?;
        let drained = !self.buckets.contains_key(&freq);

        if !self.buckets.contains_key(&next_freq) {
            let prev = if drained { prev } else { Some(freq) };
            self.link_bucket(next_freq, prev, next);
        }
        self.attach(next_freq, new_rank, id);

        if let Some(entry) = self.entries.get_mut(id) {
            entry.freq = next_freq;
            entry.rank = new_rank;
        }
        if self.min_freq.is_none_or(|min| next_freq < min) {
            self.min_freq = Some(next_freq);
        }
        Some(next_freq)
    }

    /// Handle of the current victim: first member of the lowest level.
    pub fn peek_min(&self) -> Option<SlotId> {
        let freq = self.min_freq?;
        let bucket = self.buckets.get(&freq)?;
        bucket.members.values().next().copied()
    }

    /// Removes the current victim and returns `(key, freq)`.
    pub fn pop_min(&mut self) -> Option<(K, u64)> {
        let id = self.peek_min()?;
        self.remove(id)
    }

    /// Stops tracking `id` and returns `(key, freq)`.
    pub fn remove(&mut self, id: SlotId) -> Option<(K, u64)> {
        let (freq, rank) = {
            let entry = self.entries.get(id)?;
            (entry.freq, entry.rank)
        };
        self.detach(freq, rank)?;
        self.entries.remove(id).map(|entry| (entry.key, entry.freq))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets.clear();
        self.min_freq = None;
        self.clock = 0;
    }

    fn tick(&mut self) -> u64 {
        let now = self.clock;
        self.clock = self.clock.wrapping_add(1);
        now
    }

    fn attach(&mut self, freq: u64, rank: u64, id: SlotId) {
        if let Some(bucket) = self.buckets.get_mut(&freq) {
            bucket.members.insert(rank, id);
        }
    }

    /// Removes `rank` from level `freq`, unlinking the level if it drains.
    /// Returns the level's neighbours as they were before removal.
    fn detach(&mut self, freq: u64, rank: u64) -> Option<(Option<u64>, Option<u64>)> {
        let bucket = self.buckets.get_mut(&freq)?;
        bucket.members.remove(&rank)?;
        let (prev, next) = (bucket.prev, bucket.next);

        if bucket.members.is_empty() {
            self.buckets.remove(&freq);
            if let Some(p) = prev
                && let Some(bucket) = self.buckets.get_mut(&p)
            {
                bucket.next = next;
            }
            if let Some(n) = next
                && let Some(bucket) = self.buckets.get_mut(&n)
            {
                bucket.prev = prev;
            }
            if self.min_freq == Some(freq) {
                self.min_freq = next;
            }
        }
        Some((prev, next))
    }

    fn link_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        self.buckets.insert(
            freq,
            Bucket {
                members: BTreeMap::new(),
                prev,
                next,
            },
        );
        if let Some(p) = prev
            && let Some(bucket) = self.buckets.get_mut(&p)
        {
            bucket.next = Some(freq);
        }
        if let Some(n) = next
            && let Some(bucket) = self.buckets.get_mut(&n)
        {
            bucket.prev = Some(freq);
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.entries.is_empty() {
            assert!(self.buckets.is_empty());
            assert_eq!(self.min_freq, None);
            return;
        }

        let min = self.min_freq.expect("non-empty buckets without min_freq");
        let lowest = self.buckets.keys().copied().min();
        assert_eq!(Some(min), lowest);
        assert_eq!(self.buckets[&min].prev, None);

        let mut seen = 0usize;
        let mut level = Some(min);
        let mut prev_level = None;
        while let Some(freq) = level {
            let bucket = self.buckets.get(&freq).expect("chained level missing");
            assert!(!bucket.members.is_empty(), "empty level {freq} left linked");
            assert_eq!(bucket.prev, prev_level);
            if let Some(p) = prev_level {
                assert!(p < freq, "levels out of order");
            }
            for (rank, id) in &bucket.members {
                let entry = self.entries.get(*id).expect("member missing from arena");
                assert_eq!(entry.freq, freq);
                assert_eq!(entry.rank, *rank);
                seen += 1;
            }
            prev_level = Some(freq);
            level = bucket.next;
        }
        assert_eq!(seen, self.entries.len());
    }
}
