//! Cache infrastructure - Store connections and the region cache manager

mod connection;
mod manager;

pub use connection::{InMemoryConnection, RedisConnectionFactory, StoreConnection};
pub use manager::{RegionCacheManager, RegionCacheManagerBuilder};
