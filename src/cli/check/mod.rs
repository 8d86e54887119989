//! Check command - validates the cache configuration

use clap::Args;
use tracing::info;

use crate::infrastructure::cache::RedisConnectionFactory;
use crate::{create_connection, create_registry};

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Also verify that the configured Redis instance answers PING
    #[arg(long)]
    pub connect: bool,
}

pub async fn run(args: CheckArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let registry = create_registry(&config.cache)?;
    let connection = create_connection(&config.cache)?;

    if args.connect {
        let url = config
            .cache
            .redis_url
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("--connect requires cache.redis_url to be set"))?;

        RedisConnectionFactory::new(url)?.ping().await?;
        info!("Redis at {} is reachable", url);
    }

    info!(
        endpoint = %connection.endpoint(),
        initial = registry.initial_names().len(),
        configured = registry.len(),
        "Cache configuration is valid"
    );

    Ok(())
}
