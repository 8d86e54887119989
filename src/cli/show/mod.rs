//! Show command - prints the resolved region registry

use clap::Args;
use serde_json::json;

use crate::{create_cache_manager, create_connection};

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Only print the configuration of this region
    #[arg(long)]
    pub region: Option<String>,
}

pub async fn run(args: ShowArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let connection = create_connection(&config.cache)?;
    let (registry, manager) = create_cache_manager(&config.cache, connection)?;

    let output = match args.region {
        Some(name) => {
            let region = manager
                .configuration_for(&name)
                .ok_or_else(|| anyhow::anyhow!("Unknown cache region: {}", name))?;

            let prefix = region.prefix_for(&name);

            json!({
                "name": name,
                "config": region,
                "prefix": prefix,
                "content_type": region.serializer().content_type(),
            })
        }
        None => json!({
            "endpoint": manager.connection().endpoint(),
            "cache_names": manager.cache_names(),
            "registry": registry,
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
