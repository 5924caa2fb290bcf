//! cachecore: bounded in-memory key-value caches with pluggable FIFO, LRU
//! and LFU eviction.
//!
//! ```
//! use cachecore::{FifoCache, LfuCache, LruCache};
//!
//! let mut fifo: FifoCache<u32, &str> = FifoCache::new(3);
//! let mut lru: LruCache<u32, &str> = LruCache::new(3);
//! let mut lfu: LfuCache<u32, &str> = LfuCache::new(3);
//!
//! for (k, v) in [(1, "a"), (2, "b"), (3, "c")] {
//!     fifo.put(k, v);
//!     lru.put(k, v);
//!     lfu.put(k, v);
//! }
//! fifo.get(&1);
//! lru.get(&1);
//! lfu.get(&1);
//! fifo.put(4, "d");
//! lru.put(4, "d");
//! lfu.put(4, "d");
//!
//! assert!(!fifo.contains(&1)); // oldest goes regardless of reads
//! assert!(!lru.contains(&2)); // least recently used
//! assert!(!lfu.contains(&2)); // lowest frequency, earliest inserted
//! ```

pub mod builder;
pub mod cache;
pub mod config;
pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod reference;
pub mod store;
pub mod traits;

#[cfg(feature = "concurrency")]
pub mod concurrent;
#[cfg(feature = "metrics")]
pub mod metrics;

pub use crate::cache::{Cache, FifoCache, LfuCache, LruCache};
#[cfg(feature = "concurrency")]
pub use crate::concurrent::ConcurrentCache;
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::{EvictionPolicy, Policy, PolicyKind};
pub use crate::reference::ReferenceLru;
