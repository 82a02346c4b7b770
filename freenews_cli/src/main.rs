mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use freenews_api::{Client, Endpoint};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "freenews")]
#[command(about = "Search news articles and headlines from the Free News API")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API key (defaults to FREENEWS_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Request timeout in seconds (defaults to FREENEWS_TIMEOUT_SECS, then 60)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search all articles
    Search(Box<commands::articles::ArticlesArgs>),
    /// Top headlines
    Headlines(Box<commands::articles::ArticlesArgs>),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("freenews=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let config = config::from_env(cli.api_key.as_deref(), cli.timeout)?;
    tracing::debug!("Using API at {}", config.base_url());
    let client = Client::new(config)?;

    match &cli.command {
        Commands::Search(args) => {
            commands::articles::run(args, Endpoint::Search, &client, &format).await?
        }
        Commands::Headlines(args) => {
            commands::articles::run(args, Endpoint::Headlines, &client, &format).await?
        }
    }

    Ok(())
}
