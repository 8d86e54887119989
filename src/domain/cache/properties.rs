//! Base cache properties supplied by the configuration loader

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default settings shared by every cache region
///
/// Absent optional values are never an error: each one falls back to the
/// region defaults (no expiry, no custom prefix). Null values are cached
/// unless explicitly disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseProperties {
    /// Entry time-to-live in seconds; absent or zero means never expire
    #[serde(default, rename = "time_to_live")]
    pub time_to_live_secs: Option<u64>,

    /// Prefix prepended to every key
    #[serde(default)]
    pub key_prefix: Option<String>,

    /// Whether null results may be cached
    #[serde(default = "default_true")]
    pub cache_null_values: bool,

    /// Whether key prefixing is applied at all
    #[serde(default = "default_true")]
    pub use_key_prefix: bool,

    /// Regions to create up front with the default configuration
    #[serde(default)]
    pub cache_names: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for BaseProperties {
    fn default() -> Self {
        Self {
            time_to_live_secs: None,
            key_prefix: None,
            cache_null_values: default_true(),
            use_key_prefix: default_true(),
            cache_names: Vec::new(),
        }
    }
}

impl BaseProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time-to-live as a Duration, `None` when entries never expire
    pub fn time_to_live(&self) -> Option<Duration> {
        self.time_to_live_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn with_time_to_live(mut self, ttl: Duration) -> Self {
        self.time_to_live_secs = Some(ttl.as_secs());
        self
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    pub fn with_cache_null_values(mut self, cache_null_values: bool) -> Self {
        self.cache_null_values = cache_null_values;
        self
    }

    pub fn with_use_key_prefix(mut self, use_key_prefix: bool) -> Self {
        self.use_key_prefix = use_key_prefix;
        self
    }

    pub fn with_cache_name(mut self, name: impl Into<String>) -> Self {
        self.cache_names.push(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = BaseProperties::default();

        assert!(props.time_to_live().is_none());
        assert!(props.key_prefix.is_none());
        assert!(props.cache_null_values);
        assert!(props.use_key_prefix);
        assert!(props.cache_names.is_empty());
    }

    #[test]
    fn test_zero_ttl_means_no_expiry() {
        let props = BaseProperties::new().with_time_to_live(Duration::ZERO);
        assert_eq!(props.time_to_live_secs, Some(0));
        assert!(props.time_to_live().is_none());
    }

    #[test]
    fn test_builder() {
        let props = BaseProperties::new()
            .with_time_to_live(Duration::from_secs(300))
            .with_key_prefix("app:")
            .with_cache_null_values(false)
            .with_use_key_prefix(false)
            .with_cache_name("users")
            .with_cache_name("orders");

        assert_eq!(props.time_to_live(), Some(Duration::from_secs(300)));
        assert_eq!(props.key_prefix.as_deref(), Some("app:"));
        assert!(!props.cache_null_values);
        assert!(!props.use_key_prefix);
        assert_eq!(props.cache_names, vec!["users", "orders"]);
    }

    #[test]
    fn test_deserialize_partial() {
        let props: BaseProperties =
            serde_json::from_str(r#"{"time_to_live": 60, "cache_names": ["a"]}"#).unwrap();

        assert_eq!(props.time_to_live(), Some(Duration::from_secs(60)));
        assert!(props.cache_null_values);
        assert!(props.use_key_prefix);
        assert_eq!(props.cache_names, vec!["a"]);
    }
}
