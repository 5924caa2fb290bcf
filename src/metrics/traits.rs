//! # Metrics traits
//!
//! Recording and snapshotting are split into separate traits so the cache
//! only ever writes counters, while tests and benches read them through a
//! snapshot.
//!
//! ```text
//!   Cache::get / put / remove / clear
//!            │ record_*
//!            ▼
//!   ┌──────────────────────┐        ┌────────────────────────────┐
//!   │ CoreMetricsRecorder  │        │ MetricsSnapshotProvider<S> │
//!   │  (CacheMetrics)      │ ─────► │  snapshot() → S            │
//!   └──────────────────────┘        └────────────────────────────┘
//! ```

/// Counters shared by every eviction policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    /// A write discarded because the cache holds nothing (capacity 0).
    fn record_insert_dropped(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
    fn record_clear(&mut self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
