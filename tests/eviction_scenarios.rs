// ==============================================
// EVICTION SCENARIOS (integration)
// ==============================================
//
// Fixed operation scripts with known victims for each policy.

use cachecore::builder::CacheBuilder;
use cachecore::config::CacheConfig;
use cachecore::{FifoCache, LfuCache, LruCache, PolicyKind, ReferenceLru};

#[test]
fn fifo_evicts_first_inserted_despite_reads() {
    let mut cache: FifoCache<u32, &str> = FifoCache::new(3);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c");
    cache.get(&1);
    cache.get(&1);
    cache.put(4, "d");

    assert!(!cache.contains(&1));
    for k in [2, 3, 4] {
        assert!(cache.contains(&k));
    }
}

#[test]
fn lru_evicts_least_recently_used() {
    let mut cache: LruCache<u32, &str> = LruCache::new(3);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c");
    cache.get(&1);
    cache.put(4, "d");

    assert!(!cache.contains(&2));
    assert_eq!(cache.get(&1), Some(&"a"));
}

#[test]
fn lfu_breaks_ties_by_insertion_order() {
    let mut cache: LfuCache<u32, &str> = LfuCache::new(3);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c");
    cache.get(&1);
    cache.get(&1);
    cache.put(4, "d");

    assert!(!cache.contains(&2));
    assert!(cache.contains(&1));
    assert!(cache.contains(&3));
    assert_eq!(cache.frequency(&1), Some(2));
    assert_eq!(cache.frequency(&4), Some(0));
}

#[test]
fn lrfu_breaks_ties_by_recency() {
    let mut cache = CacheBuilder::new(3)
        .policy(PolicyKind::Lrfu)
        .build::<u32, &str>();
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c");
    cache.get(&2);
    cache.get(&1);
    cache.get(&3);
    // All at frequency 1; 2 was used longest ago.
    cache.put(4, "d");

    assert!(!cache.contains(&2));
}

#[test]
fn replace_is_idempotent_for_size() {
    for kind in PolicyKind::ALL {
        let mut cache = CacheBuilder::new(2).policy(kind).build::<&str, u32>();
        cache.put("k", 1);
        cache.put("k", 2);
        assert_eq!(cache.get(&"k"), Some(&2), "{kind}");
        assert_eq!(cache.len(), 1);
    }
}

#[test]
fn distinct_puts_evict_exactly_overflow() {
    const CAPACITY: usize = 10;
    const PUTS: u64 = 37;

    for kind in PolicyKind::ALL {
        let mut cache = CacheBuilder::new(CAPACITY).policy(kind).build::<u64, u64>();
        let mut evicted = 0;
        for k in 0..PUTS {
            let before = cache.len();
            cache.put(k, k);
            if cache.len() == before {
                evicted += 1;
            }
        }
        assert_eq!(cache.len(), CAPACITY, "{kind}");
        assert_eq!(evicted, PUTS as usize - CAPACITY, "{kind}");

        #[cfg(feature = "metrics")]
        assert_eq!(
            cache.metrics_snapshot().evicted_entries,
            PUTS - CAPACITY as u64
        );
    }
}

#[test]
fn config_file_drives_policy() {
    let config: CacheConfig =
        serde_json::from_str(r#"{ "capacity": 2, "policy": "fifo" }"#).unwrap();
    let mut cache = CacheBuilder::from_config(&config)
        .unwrap()
        .build::<u32, u32>();
    cache.put(1, 1);
    cache.put(2, 2);
    cache.get(&1);
    cache.put(3, 3);
    assert!(!cache.contains(&1));

    let bad: CacheConfig = serde_json::from_str(r#"{ "capacity": -4 }"#).unwrap();
    assert!(CacheBuilder::from_config(&bad).is_err());
}

#[test]
fn reference_lru_page_faults() {
    let mut frames = ReferenceLru::new(3);
    let trace = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
    let faults = trace.iter().filter(|page| !frames.refer(**page)).count();

    assert_eq!(faults, 9);
    assert_eq!(frames.iter().copied().collect::<Vec<_>>(), vec![2, 3, 0]);
}
