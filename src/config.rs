//! Serializable cache configuration.
//!
//! `CacheConfig` is the shape a cache takes in a config file. Capacity is
//! signed so that a negative value in the input reaches [`validate`] and is
//! rejected with a [`ConfigError`] rather than failing inside the parser.
//!
//! ```
//! use cachecore::config::CacheConfig;
//! use cachecore::PolicyKind;
//!
//! let config: CacheConfig = serde_json::from_str(r#"{"capacity": 64, "policy": "lfu"}"#)?;
//! assert_eq!(config.policy, PolicyKind::Lfu);
//! assert_eq!(config.validate()?, 64);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`validate`]: CacheConfig::validate
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, validate_capacity};
use crate::policy::PolicyKind;

/// Capacity used when a config omits it.
pub const DEFAULT_CAPACITY: i64 = 1024;

/// Cache settings, typically loaded from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Maximum number of entries; 0 disables retention.
    pub capacity: i64,
    /// Eviction policy name (`fifo`, `lru`, `lfu`, `lrfu`).
    pub policy: PolicyKind,
}

impl CacheConfig {
    pub fn new(capacity: i64, policy: PolicyKind) -> Self {
        Self { capacity, policy }
    }

    /// Returns the capacity as `usize` if the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is negative.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        validate_capacity(self.capacity)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy: PolicyKind::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lru_1024() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, 1024);
        assert_eq!(config.policy, PolicyKind::Lru);
        assert_eq!(config.validate(), Ok(1024));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: CacheConfig = serde_json::from_str(r#"{"policy": "fifo"}"#).unwrap();
        assert_eq!(config, CacheConfig::new(DEFAULT_CAPACITY, PolicyKind::Fifo));

        let config: CacheConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CacheConfig::default());
    }

    #[test]
    fn test_negative_capacity_parses_but_fails_validation() {
        let config: CacheConfig = serde_json::from_str(r#"{"capacity": -5}"#).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.message().contains("-5"));
    }

    #[test]
    fn test_unknown_policy_and_fields_rejected() {
        assert!(serde_json::from_str::<CacheConfig>(r#"{"policy": "arc"}"#).is_err());
        assert!(serde_json::from_str::<CacheConfig>(r#"{"capacity": 1, "ttl": 5}"#).is_err());
    }

    #[test]
    fn test_serializes_policy_lowercase() {
        let json = serde_json::to_value(CacheConfig::new(8, PolicyKind::Lrfu)).unwrap();
        assert_eq!(json, serde_json::json!({"capacity": 8, "policy": "lrfu"}));
    }
}
