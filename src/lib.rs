//! Cache Regions
//!
//! Named cache region configuration for a Redis-backed cache manager:
//! - Base defaults resolved from externally loaded properties
//! - Per-region TTL and value serializer overrides
//! - One-shot registration into a read-only cache manager facade

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use crate::config::CacheSettings;
use domain::cache::{build_registry, parse_overrides, RegionRegistry};
use domain::DomainError;
use infrastructure::cache::{
    InMemoryConnection, RedisConnectionFactory, RegionCacheManager, StoreConnection,
};

/// Opens the store connection described by the settings
pub fn create_connection(settings: &CacheSettings) -> Result<Arc<dyn StoreConnection>, DomainError> {
    match &settings.redis_url {
        Some(url) => Ok(Arc::new(RedisConnectionFactory::new(url.as_str())?)),
        None => {
            tracing::warn!("No Redis URL configured, using in-memory connection");
            Ok(Arc::new(InMemoryConnection))
        }
    }
}

/// Resolves the region registry from the settings
///
/// Fails when any region names an unknown serializer; nothing is built in
/// that case.
pub fn create_registry(settings: &CacheSettings) -> Result<RegionRegistry, DomainError> {
    let overrides = parse_overrides(settings.regions.iter().cloned())?;
    Ok(build_registry(&settings.redis, &overrides))
}

/// Builds the registry and registers it with a new cache manager
pub fn create_cache_manager(
    settings: &CacheSettings,
    connection: Arc<dyn StoreConnection>,
) -> Result<(RegionRegistry, RegionCacheManager), DomainError> {
    let registry = create_registry(settings)?;
    let manager = RegionCacheManager::from_registry(connection, &registry);

    Ok((registry, manager))
}
