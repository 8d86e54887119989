//! Named cache region registry

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::properties::BaseProperties;
use super::region::{resolve_base_config, resolve_named_config, RegionConfig};
use super::serializer::SerializerKind;
use crate::domain::DomainError;

/// Per-region override of time-to-live and value serializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionOverride {
    pub name: String,
    pub ttl: Duration,
    pub serializer: SerializerKind,
}

impl RegionOverride {
    pub fn new(name: impl Into<String>, ttl: Duration, serializer: SerializerKind) -> Self {
        Self {
            name: name.into(),
            ttl,
            serializer,
        }
    }
}

/// Declarative override record as read from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOverrideConfig {
    pub name: String,
    /// Time-to-live in seconds, zero means never expire
    #[serde(rename = "time_to_live")]
    pub ttl_secs: u64,
    pub serializer: String,
}

impl TryFrom<RegionOverrideConfig> for RegionOverride {
    type Error = DomainError;

    fn try_from(config: RegionOverrideConfig) -> Result<Self, Self::Error> {
        let name = config.name.trim();

        if name.is_empty() {
            return Err(DomainError::validation("Region name cannot be empty"));
        }

        let serializer = config.serializer.parse().map_err(|e| {
            DomainError::configuration(format!("Region '{}': {}", name, e))
        })?;

        Ok(Self::new(name, Duration::from_secs(config.ttl_secs), serializer))
    }
}

/// Validates a list of override records, failing on the first invalid one
pub fn parse_overrides(
    configs: impl IntoIterator<Item = RegionOverrideConfig>,
) -> Result<Vec<RegionOverride>, DomainError> {
    configs.into_iter().map(RegionOverride::try_from).collect()
}

/// Regions registered by default: two short-lived JSON regions
pub fn reference_overrides() -> Vec<RegionOverrideConfig> {
    vec![
        RegionOverrideConfig {
            name: "MyCache1".to_string(),
            ttl_secs: 10,
            serializer: SerializerKind::Json.to_string(),
        },
        RegionOverrideConfig {
            name: "MyCache2".to_string(),
            ttl_secs: 20,
            serializer: SerializerKind::Json.to_string(),
        },
    ]
}

/// Resolved region configurations, read-only once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionRegistry {
    defaults: RegionConfig,
    initial_names: Vec<String>,
    configurations: Vec<(String, RegionConfig)>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl RegionRegistry {
    /// Configuration used for initial regions and regions created on demand
    pub fn defaults(&self) -> &RegionConfig {
        &self.defaults
    }

    /// Region names created up front with the default configuration
    pub fn initial_names(&self) -> &[String] {
        &self.initial_names
    }

    /// Explicitly configured regions in first-registration order
    pub fn configurations(&self) -> impl Iterator<Item = (&str, &RegionConfig)> {
        self.configurations
            .iter()
            .map(|(name, config)| (name.as_str(), config))
    }

    /// Explicit configuration of a region, if one was registered
    pub fn get(&self, name: &str) -> Option<&RegionConfig> {
        self.index.get(name).map(|&i| &self.configurations[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of explicitly configured regions
    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    fn insert(&mut self, name: String, config: RegionConfig) {
        match self.index.get(&name).copied() {
            Some(i) => self.configurations[i].1 = config,
            None => {
                self.index.insert(name.clone(), self.configurations.len());
                self.configurations.push((name, config));
            }
        }
    }
}

/// Builds the registry from base properties and per-region overrides
///
/// Duplicate override names resolve last-write-wins; the region keeps the
/// position of its first registration.
pub fn build_registry(properties: &BaseProperties, overrides: &[RegionOverride]) -> RegionRegistry {
    let defaults = resolve_base_config(properties, SerializerKind::default());

    let mut initial_names: Vec<String> = Vec::with_capacity(properties.cache_names.len());
    for name in &properties.cache_names {
        if !initial_names.contains(name) {
            initial_names.push(name.clone());
        }
    }

    let mut registry = RegionRegistry {
        defaults,
        initial_names,
        configurations: Vec::with_capacity(overrides.len()),
        index: HashMap::with_capacity(overrides.len()),
    };

    for region in overrides {
        let config = resolve_named_config(&registry.defaults, region.ttl, region.serializer);

        debug!(
            region = %region.name,
            ttl_secs = region.ttl.as_secs(),
            serializer = %region.serializer,
            "Resolved cache region"
        );

        registry.insert(region.name.clone(), config);
    }

    info!(
        initial = registry.initial_names.len(),
        configured = registry.len(),
        "Cache region registry built"
    );

    registry
}
