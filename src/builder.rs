//! Cache builder for runtime policy selection.
//!
//! Collects a capacity and a [`PolicyKind`] (directly or from a
//! [`CacheConfig`]) and produces a [`Cache`] whose policy is picked at
//! runtime.
//!
//! ## Example
//!
//! ```rust
//! use cachecore::builder::CacheBuilder;
//! use cachecore::PolicyKind;
//!
//! let mut cache = CacheBuilder::new(100)
//!     .policy(PolicyKind::Lfu)
//!     .build::<u64, String>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! assert_eq!(cache.frequency(&1), Some(1));
//! ```

use std::hash::Hash;

use crate::cache::Cache;
use crate::config::CacheConfig;
use crate::error::{ConfigError, validate_capacity};
use crate::policy::PolicyKind;

/// Builder for creating cache instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheBuilder {
    capacity: usize,
    policy: PolicyKind,
}

impl CacheBuilder {
    /// Create a new cache builder with the specified capacity and the
    /// default (LRU) policy.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: PolicyKind::default(),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is negative.
    pub fn try_new(capacity: i64) -> Result<Self, ConfigError> {
        Ok(Self::new(validate_capacity(capacity)?))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config fails [`CacheConfig::validate`].
    pub fn from_config(config: &CacheConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            capacity: config.validate()?,
            policy: config.policy,
        })
    }

    /// Select the eviction policy.
    pub fn policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Build the cache.
    ///
    /// # Type Parameters
    ///
    /// - `K`: Key type, must be `Eq + Hash + Clone`
    /// - `V`: Value type, unconstrained
    pub fn build<K, V>(self) -> Cache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        Cache::with_kind(self.capacity, self.policy)
    }
}
