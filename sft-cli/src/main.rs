//! SFT CLI - Command line tool for querying live vessel tracking data.

use clap::Parser;
use sft_tracking::config::{ApiConfig, API_URL_ENV};

#[derive(Parser)]
#[command(name = "sft", version, about = "Super Freight Tracker toolkit")]
struct Cli {
    /// Base URL of the tracking API
    #[arg(long, global = true, env = API_URL_ENV)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: sft_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ApiConfig::resolve(cli.api_url.as_deref());
    log::debug!("Using tracking API at {}", config.base_url);
    sft_cmd::run(config, cli.command).await
}
