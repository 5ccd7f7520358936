//! The `lobbyists` subcommand: search lobbyist records by name.

use anyhow::Result;
use clap::Args;
use lda_api::{Client, LobbyistQuery, Query};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct LobbyistsArgs {
    /// Lobbyist name to search for
    #[arg(long)]
    pub name: String,

    /// Pagination page (1-indexed)
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "25")]
    pub page_size: i64,
}

pub async fn run(args: &LobbyistsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = LobbyistQuery::default()
        .with_name(&args.name)
        .with_page(args.page)
        .with_page_size(args.page_size);
    let page = client.search_lobbyists(&query).await?;

    match format {
        OutputFormat::Json => output::print_json(&page.results),
        OutputFormat::Table => {
            println!(
                "Found {} lobbyist match(es). Showing page {}.",
                page.count.unwrap_or(page.results.len() as i64),
                args.page
            );
            output::print_lobbyists_table(&page.results);
        }
    }
    Ok(())
}
