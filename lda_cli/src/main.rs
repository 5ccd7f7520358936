mod commands;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lda_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "lda")]
#[command(about = "Search and export Senate Lobbying Disclosure filings")]
struct Cli {
    /// API token issued by the Senate OPR. Falls back to LDA_API_TOKEN.
    #[arg(long, global = true)]
    token: Option<String>,

    /// Override the API site root (useful against a local mock)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "60", global = true)]
    timeout: f64,

    /// Seconds to pause between paginated requests
    #[arg(long, default_value = "0.25", global = true)]
    pause: f64,

    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search client records by name
    Clients(commands::clients::ClientsArgs),
    /// Search lobbyist records by name
    Lobbyists(commands::lobbyists::LobbyistsArgs),
    /// Fetch filings and export them as JSON or CSV
    Filings(Box<commands::filings::FilingsArgs>),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lda_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = build_client(&cli)?;

    match &cli.command {
        Commands::Clients(args) => commands::clients::run(args, &client, &format).await?,
        Commands::Lobbyists(args) => commands::lobbyists::run(args, &client, &format).await?,
        Commands::Filings(args) => commands::filings::run(args.as_ref(), &client, &format).await?,
    }

    Ok(())
}

fn build_client(cli: &Cli) -> Result<Client> {
    let token = cli
        .token
        .clone()
        .or_else(|| std::env::var("LDA_API_TOKEN").ok())
        .context("an API token is required: pass --token or set LDA_API_TOKEN")?;
    let client = match &cli.base_url {
        Some(base_url) => Client::with_base_url(&token, base_url)?,
        None => Client::new(&token)?,
    };
    Ok(client
        .with_timeout(Duration::from_secs_f64(cli.timeout.max(0.0)))
        .with_pause(Duration::from_secs_f64(cli.pause.max(0.0))))
}
