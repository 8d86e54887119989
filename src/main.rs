use cache_regions::cli::{self, Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Show(args) => cli::show::run(args).await,
        Command::Check(args) => cli::check::run(args).await,
    }
}
