//! Error types for the cachecore library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: construction-time configuration is invalid (negative
//!   capacity, unknown policy name). This is the only error a caller can hit
//!   through the public cache surface; misses are `None`, never errors.
//! - [`InvariantError`]: returned by `check_invariants` when the entry store
//!   and the policy's order index disagree.
//!
//! ## Example Usage
//!
//! ```
//! use cachecore::error::ConfigError;
//! use cachecore::LruCache;
//!
//! let cache: Result<LruCache<u64, String>, ConfigError> = LruCache::try_new(100);
//! assert!(cache.is_ok());
//!
//! let bad = LruCache::<u64, String>::try_new(-1);
//! assert!(bad.unwrap_err().to_string().contains("capacity"));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Invalid cache configuration.
///
/// Produced by fallible constructors such as
/// [`Cache::try_new`](crate::Cache::try_new) and
/// [`CacheBuilder::try_new`](crate::builder::CacheBuilder::try_new). Carries a
/// human-readable description naming the parameter that failed validation.
///
/// # Example
///
/// ```
/// use cachecore::error::ConfigError;
///
/// let err = ConfigError::negative_capacity(-3);
/// assert_eq!(err.to_string(), "capacity must be non-negative, got -3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    pub fn negative_capacity(capacity: i64) -> Self {
        Self(format!("capacity must be non-negative, got {capacity}"))
    }

    pub fn unknown_policy(name: &str) -> Self {
        Self(format!(
            "unknown eviction policy '{name}' (expected fifo, lru, lfu or lrfu)"
        ))
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

/// Converts a signed capacity into `usize`, rejecting negatives.
pub(crate) fn validate_capacity(capacity: i64) -> Result<usize, ConfigError> {
    if capacity < 0 {
        tracing::warn!(capacity, "rejecting negative cache capacity");
        return Err(ConfigError::negative_capacity(capacity));
    }
    usize::try_from(capacity)
        .map_err(|_| ConfigError::new(format!("capacity {capacity} does not fit in usize")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("index length mismatch");
        assert_eq!(err.to_string(), "index length mismatch");
        assert_eq!(err.message(), "index length mismatch");
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_negative_capacity_message() {
        let err = ConfigError::negative_capacity(-1);
        assert!(err.message().contains("capacity"));
        assert!(err.message().contains("-1"));
    }

    #[test]
    fn config_unknown_policy_names_input() {
        let err = ConfigError::unknown_policy("mru");
        assert!(err.to_string().contains("'mru'"));
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn validate_capacity_accepts_zero_and_positive() {
        assert_eq!(validate_capacity(0), Ok(0));
        assert_eq!(validate_capacity(42), Ok(42));
        assert!(validate_capacity(-5).is_err());
        assert!(validate_capacity(i64::MIN).is_err());
    }
}
