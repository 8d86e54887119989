//! Cache manager facade holding the registered region configurations

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use super::connection::StoreConnection;
use crate::domain::cache::{RegionConfig, RegionRegistry};

/// Builder collecting region registrations before the manager is published
#[derive(Debug)]
pub struct RegionCacheManagerBuilder {
    connection: Arc<dyn StoreConnection>,
    defaults: RegionConfig,
    initial_names: Vec<String>,
    configurations: Vec<(String, RegionConfig)>,
    allow_on_the_fly: bool,
}

impl RegionCacheManagerBuilder {
    /// Sets the configuration used for regions without explicit settings
    pub fn cache_defaults(mut self, defaults: RegionConfig) -> Self {
        self.defaults = defaults;
        self
    }

    /// Regions to create up front with the default configuration
    pub fn initial_cache_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();

            if !self.initial_names.contains(&name) {
                self.initial_names.push(name);
            }
        }
        self
    }

    /// Regions with their own configuration; later entries replace earlier ones
    pub fn with_initial_cache_configurations<'a, I>(mut self, configurations: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a RegionConfig)>,
    {
        for (name, config) in configurations {
            match self.configurations.iter_mut().find(|(n, _)| n.as_str() == name) {
                Some(entry) => entry.1 = config.clone(),
                None => self.configurations.push((name.to_string(), config.clone())),
            }
        }
        self
    }

    /// Only registered regions are served; unknown names resolve to nothing
    pub fn disable_creating_caches_on_the_fly(mut self) -> Self {
        self.allow_on_the_fly = false;
        self
    }

    pub fn build(self) -> RegionCacheManager {
        let mut regions: Vec<(String, RegionConfig)> =
            Vec::with_capacity(self.initial_names.len() + self.configurations.len());

        for name in self.initial_names {
            regions.push((name, self.defaults.clone()));
        }

        for (name, config) in self.configurations {
            match regions.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => entry.1 = config,
                None => regions.push((name, config)),
            }
        }

        for (name, config) in &regions {
            debug!(
                region = %name,
                serializer = %config.serializer(),
                ttl_secs = ?config.time_to_live().map(|ttl| ttl.as_secs()),
                "Registered cache region"
            );
        }

        info!(
            endpoint = %self.connection.endpoint(),
            regions = regions.len(),
            on_the_fly = self.allow_on_the_fly,
            "Cache manager initialized"
        );

        let index = regions
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();

        RegionCacheManager {
            connection: self.connection,
            defaults: self.defaults,
            regions,
            index,
            allow_on_the_fly: self.allow_on_the_fly,
        }
    }
}

/// Read-only cache manager facade over a remote store connection
///
/// Immutable after `build`, so it can be shared across threads via `Arc`
/// without locking.
#[derive(Debug)]
pub struct RegionCacheManager {
    connection: Arc<dyn StoreConnection>,
    defaults: RegionConfig,
    regions: Vec<(String, RegionConfig)>,
    index: HashMap<String, usize>,
    allow_on_the_fly: bool,
}

impl RegionCacheManager {
    pub fn builder(connection: Arc<dyn StoreConnection>) -> RegionCacheManagerBuilder {
        RegionCacheManagerBuilder {
            connection,
            defaults: RegionConfig::default(),
            initial_names: Vec::new(),
            configurations: Vec::new(),
            allow_on_the_fly: true,
        }
    }

    /// Registers every region of the registry in a single builder pass
    pub fn from_registry(connection: Arc<dyn StoreConnection>, registry: &RegionRegistry) -> Self {
        Self::builder(connection)
            .cache_defaults(registry.defaults().clone())
            .initial_cache_names(registry.initial_names().iter().cloned())
            .with_initial_cache_configurations(registry.configurations())
            .build()
    }

    pub fn connection(&self) -> &Arc<dyn StoreConnection> {
        &self.connection
    }

    pub fn defaults(&self) -> &RegionConfig {
        &self.defaults
    }

    /// Configuration that applies to the named region
    ///
    /// Unregistered names get the defaults unless on-the-fly creation was
    /// disabled.
    pub fn configuration_for(&self, name: &str) -> Option<&RegionConfig> {
        match self.index.get(name) {
            Some(&i) => Some(&self.regions[i].1),
            None if self.allow_on_the_fly => Some(&self.defaults),
            None => None,
        }
    }

    /// Registered region names in registration order
    pub fn cache_names(&self) -> Vec<&str> {
        self.regions.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn allows_on_the_fly_creation(&self) -> bool {
        self.allow_on_the_fly
    }
}
