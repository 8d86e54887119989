//! Cache region configuration and resolution

use std::time::Duration;

use serde::{Serialize, Serializer};

use super::properties::BaseProperties;
use super::serializer::SerializerKind;

/// Separator appended to the region name when no explicit prefix is configured
pub const REGION_PREFIX_SEPARATOR: &str = "::";

/// Fully resolved configuration of one cache region
///
/// Values are never mutated in place; every `with_*`/`without_*` call
/// returns a new configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionConfig {
    serializer: SerializerKind,
    #[serde(rename = "time_to_live_secs", serialize_with = "serialize_ttl")]
    time_to_live: Option<Duration>,
    key_prefix: Option<String>,
    cache_null_values: bool,
    use_key_prefix: bool,
}

fn serialize_ttl<S: Serializer>(ttl: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
    match ttl {
        Some(ttl) => serializer.serialize_some(&ttl.as_secs()),
        None => serializer.serialize_none(),
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            serializer: SerializerKind::default(),
            time_to_live: None,
            key_prefix: None,
            cache_null_values: true,
            use_key_prefix: true,
        }
    }
}

impl RegionConfig {
    pub fn serializer(&self) -> SerializerKind {
        self.serializer
    }

    /// Entry time-to-live, `None` when entries never expire
    pub fn time_to_live(&self) -> Option<Duration> {
        self.time_to_live
    }

    pub fn key_prefix(&self) -> Option<&str> {
        self.key_prefix.as_deref()
    }

    pub fn cache_null_values(&self) -> bool {
        self.cache_null_values
    }

    pub fn use_key_prefix(&self) -> bool {
        self.use_key_prefix
    }

    pub fn with_serializer(&self, serializer: SerializerKind) -> Self {
        Self {
            serializer,
            ..self.clone()
        }
    }

    /// Sets the time-to-live; a zero duration means never expire
    pub fn with_time_to_live(&self, ttl: Duration) -> Self {
        Self {
            time_to_live: Some(ttl).filter(|ttl| !ttl.is_zero()),
            ..self.clone()
        }
    }

    pub fn with_key_prefix(&self, prefix: impl Into<String>) -> Self {
        Self {
            key_prefix: Some(prefix.into()),
            ..self.clone()
        }
    }

    pub fn without_null_values(&self) -> Self {
        Self {
            cache_null_values: false,
            ..self.clone()
        }
    }

    pub fn without_key_prefix(&self) -> Self {
        Self {
            use_key_prefix: false,
            ..self.clone()
        }
    }

    /// Prefix applied to keys of the given region
    ///
    /// `None` when prefixing is disabled. Without an explicit prefix the
    /// region name followed by `::` is used.
    pub fn prefix_for(&self, region: &str) -> Option<String> {
        if !self.use_key_prefix {
            return None;
        }

        match &self.key_prefix {
            Some(prefix) => Some(prefix.clone()),
            None => Some(format!("{}{}", region, REGION_PREFIX_SEPARATOR)),
        }
    }

    /// Key under which an entry of the given region is stored
    pub fn store_key(&self, region: &str, key: &str) -> String {
        match self.prefix_for(region) {
            Some(prefix) => format!("{}{}", prefix, key),
            None => key.to_string(),
        }
    }
}

/// Resolves the configuration shared by all regions from the base properties
pub fn resolve_base_config(properties: &BaseProperties, serializer: SerializerKind) -> RegionConfig {
    let mut config = RegionConfig::default().with_serializer(serializer);

    if let Some(ttl) = properties.time_to_live() {
        config = config.with_time_to_live(ttl);
    }

    if let Some(prefix) = &properties.key_prefix {
        config = config.with_key_prefix(prefix.clone());
    }

    if !properties.cache_null_values {
        config = config.without_null_values();
    }

    if !properties.use_key_prefix {
        config = config.without_key_prefix();
    }

    config
}

/// Derives a region configuration from the base, replacing serializer and TTL
///
/// Key prefix, null caching and prefix usage are always inherited.
pub fn resolve_named_config(
    base: &RegionConfig,
    ttl: Duration,
    serializer: SerializerKind,
) -> RegionConfig {
    base.with_serializer(serializer).with_time_to_live(ttl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_config_defaults() {
        let config = resolve_base_config(&BaseProperties::default(), SerializerKind::GenericBinary);

        assert_eq!(config.serializer(), SerializerKind::GenericBinary);
        assert!(config.time_to_live().is_none());
        assert!(config.key_prefix().is_none());
        assert!(config.cache_null_values());
        assert!(config.use_key_prefix());
        assert_eq!(config, RegionConfig::default());
    }

    #[test]
    fn test_base_config_applies_properties() {
        let props = BaseProperties::new()
            .with_time_to_live(Duration::from_secs(120))
            .with_key_prefix("app:");

        let config = resolve_base_config(&props, SerializerKind::Json);

        assert_eq!(config.serializer(), SerializerKind::Json);
        assert_eq!(config.time_to_live(), Some(Duration::from_secs(120)));
        assert_eq!(config.key_prefix(), Some("app:"));
        assert!(config.cache_null_values());
        assert!(config.use_key_prefix());
    }

    #[test]
    fn test_base_config_disables_null_values() {
        let variants = [
            BaseProperties::new(),
            BaseProperties::new().with_key_prefix("p"),
            BaseProperties::new().with_use_key_prefix(false),
            BaseProperties::new().with_time_to_live(Duration::from_secs(5)),
        ];

        for props in variants {
            let config =
                resolve_base_config(&props.with_cache_null_values(false), SerializerKind::String);
            assert!(!config.cache_null_values());
        }
    }

    #[test]
    fn test_base_config_disables_key_prefix() {
        let props = BaseProperties::new()
            .with_key_prefix("app:")
            .with_use_key_prefix(false);

        let config = resolve_base_config(&props, SerializerKind::GenericBinary);

        assert!(!config.use_key_prefix());
        assert_eq!(config.key_prefix(), Some("app:"));
        assert!(config.prefix_for("users").is_none());
    }

    #[test]
    fn test_base_config_zero_ttl_never_expires() {
        let props = BaseProperties::new().with_time_to_live(Duration::ZERO);
        let config = resolve_base_config(&props, SerializerKind::GenericBinary);

        assert!(config.time_to_live().is_none());
    }

    #[test]
    fn test_named_config_inherits_prefix_and_null_handling() {
        let props = BaseProperties::new()
            .with_key_prefix("shop:")
            .with_cache_null_values(false)
            .with_use_key_prefix(false)
            .with_time_to_live(Duration::from_secs(600));
        let base = resolve_base_config(&props, SerializerKind::GenericBinary);

        let named = resolve_named_config(&base, Duration::from_secs(10), SerializerKind::Json);

        assert_eq!(named.serializer(), SerializerKind::Json);
        assert_eq!(named.time_to_live(), Some(Duration::from_secs(10)));
        assert_eq!(named.key_prefix(), Some("shop:"));
        assert!(!named.cache_null_values());
        assert!(!named.use_key_prefix());
    }

    #[test]
    fn test_named_config_does_not_mutate_base() {
        let base = RegionConfig::default();
        let snapshot = base.clone();

        let _named = resolve_named_config(&base, Duration::from_secs(20), SerializerKind::Json);

        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_prefix_for_region() {
        let config = RegionConfig::default();
        assert_eq!(config.prefix_for("MyCache1"), Some("MyCache1::".to_string()));
        assert_eq!(config.store_key("MyCache1", "42"), "MyCache1::42");

        let prefixed = config.with_key_prefix("app:");
        assert_eq!(prefixed.prefix_for("MyCache1"), Some("app:".to_string()));
        assert_eq!(prefixed.store_key("MyCache1", "42"), "app:42");

        let disabled = prefixed.without_key_prefix();
        assert_eq!(disabled.store_key("MyCache1", "42"), "42");
    }

    #[test]
    fn test_serialize_config() {
        let config = RegionConfig::default()
            .with_serializer(SerializerKind::Json)
            .with_time_to_live(Duration::from_secs(10));

        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["serializer"], "json");
        assert_eq!(value["time_to_live_secs"], 10);
        assert!(value["key_prefix"].is_null());
        assert_eq!(value["cache_null_values"], true);
        assert_eq!(value["use_key_prefix"], true);
    }
}
