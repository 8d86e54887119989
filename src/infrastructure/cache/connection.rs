//! Remote store connection handles

use std::fmt;

use redis::aio::ConnectionManager;
use redis::Client;

use crate::domain::DomainError;

/// Connection handle to the remote key-value store
///
/// The cache manager only holds on to it; establishing connections is left
/// to the concrete implementation.
pub trait StoreConnection: Send + Sync + fmt::Debug {
    /// Human-readable description of the store endpoint
    fn endpoint(&self) -> String;
}

/// Redis connection factory
///
/// Opening the client only validates the URL; no network I/O happens until
/// a connection is requested.
#[derive(Clone)]
pub struct RedisConnectionFactory {
    client: Client,
    url: String,
}

impl fmt::Debug for RedisConnectionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisConnectionFactory")
            .field("url", &self.url)
            .field("client", &"<Client>")
            .finish()
    }
}

impl RedisConnectionFactory {
    /// Creates a factory for the given Redis URL (e.g., "redis://127.0.0.1:6379")
    pub fn new(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();
        let client = Client::open(url.as_str())
            .map_err(|e| DomainError::cache(format!("Failed to create Redis client: {}", e)))?;

        Ok(Self { client, url })
    }

    /// Establishes a managed, auto-reconnecting connection
    pub async fn connection_manager(&self) -> Result<ConnectionManager, DomainError> {
        ConnectionManager::new(self.client.clone())
            .await
            .map_err(|e| DomainError::cache(format!("Failed to connect to Redis: {}", e)))
    }

    /// Round-trips a PING to verify the store is reachable
    pub async fn ping(&self) -> Result<(), DomainError> {
        let mut conn = self.connection_manager().await?;

        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| DomainError::cache(format!("Failed to ping Redis: {}", e)))?;

        if reply == "PONG" {
            Ok(())
        } else {
            Err(DomainError::cache(format!("Unexpected PING reply: {}", reply)))
        }
    }
}

impl StoreConnection for RedisConnectionFactory {
    fn endpoint(&self) -> String {
        self.url.clone()
    }
}

/// Connection stand-in that never talks to a store
#[derive(Debug, Clone, Default)]
pub struct InMemoryConnection;

impl StoreConnection for InMemoryConnection {
    fn endpoint(&self) -> String {
        "in-memory".to_string()
    }
}
