use serde::Deserialize;

use crate::domain::cache::{reference_overrides, BaseProperties, RegionOverrideConfig};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cache: CacheSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Cache manager settings
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Redis URL; an in-memory stand-in is used when absent
    #[serde(default)]
    pub redis_url: Option<String>,
    /// Defaults shared by every region
    #[serde(default)]
    pub redis: BaseProperties,
    /// Regions with their own TTL and serializer
    #[serde(default = "reference_overrides")]
    pub regions: Vec<RegionOverrideConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            redis_url: None,
            redis: BaseProperties::default(),
            regions: reference_overrides(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "info");
        assert!(config.cache.redis_url.is_none());
        assert_eq!(config.cache.redis, BaseProperties::default());
        assert_eq!(config.cache.regions.len(), 2);
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = from_toml("");

        assert!(matches!(config.logging.format, LogFormat::Pretty));
        assert_eq!(config.cache.regions, reference_overrides());
    }

    #[test]
    fn test_cache_section() {
        let config = from_toml(
            r#"
            [logging]
            level = "debug"
            format = "json"

            [cache]
            redis_url = "redis://cache:6379"

            [cache.redis]
            time_to_live = 600
            key_prefix = "shop:"
            cache_null_values = false
            cache_names = ["users", "orders"]

            [[cache.regions]]
            name = "products"
            time_to_live = 30
            serializer = "json"
            "#,
        );

        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.cache.redis_url.as_deref(), Some("redis://cache:6379"));
        assert_eq!(config.cache.redis.time_to_live_secs, Some(600));
        assert_eq!(config.cache.redis.key_prefix.as_deref(), Some("shop:"));
        assert!(!config.cache.redis.cache_null_values);
        assert!(config.cache.redis.use_key_prefix);
        assert_eq!(config.cache.redis.cache_names, vec!["users", "orders"]);
        assert_eq!(config.cache.regions.len(), 1);
        assert_eq!(config.cache.regions[0].name, "products");
        assert_eq!(config.cache.regions[0].ttl_secs, 30);
    }
}
