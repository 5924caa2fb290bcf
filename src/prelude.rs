pub use crate::builder::CacheBuilder;
pub use crate::cache::{Cache, FifoCache, LfuCache, LruCache};
pub use crate::config::CacheConfig;
pub use crate::ds::{FrequencyBuckets, IntrusiveList, SlotArena, SlotId, TieBreak};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::{EvictionPolicy, FifoPolicy, LfuPolicy, LruPolicy, Policy, PolicyKind};
pub use crate::reference::ReferenceLru;
pub use crate::traits::{CoreCache, MutableCache};

#[cfg(feature = "concurrency")]
pub use crate::concurrent::ConcurrentCache;
#[cfg(feature = "metrics")]
pub use crate::metrics::{CacheMetricsSnapshot, MetricsSnapshotProvider};
