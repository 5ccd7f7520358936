//! The `filings` subcommand: fetch, preview, and export disclosure filings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lda_api::{export, Client, FilingQuery, Query};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct FilingsArgs {
    /// Filter by client name
    #[arg(long)]
    pub client_name: Option<String>,

    /// Filter by numeric client ID
    #[arg(long)]
    pub client_id: Option<i64>,

    /// Filter by lobbyist name
    #[arg(long)]
    pub lobbyist_name: Option<String>,

    /// Filter by numeric lobbyist ID
    #[arg(long)]
    pub lobbyist_id: Option<i64>,

    /// Filter by filing year
    #[arg(long)]
    pub filing_year: Option<i64>,

    /// Pagination page (1-indexed); the starting page when fetching all pages
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "25")]
    pub page_size: i64,

    /// Fetch all pages of filings that match the filters
    #[arg(long)]
    pub all_pages: bool,

    /// Stop after this many pages when fetching all pages
    #[arg(long)]
    pub max_pages: Option<u64>,

    /// Write the raw filings JSON array to FILE
    #[arg(long, value_name = "FILE")]
    pub output_json: Option<PathBuf>,

    /// Write a flattened CSV of the filings to FILE
    #[arg(long, value_name = "FILE")]
    pub output_csv: Option<PathBuf>,

    /// Write a simplified CSV with curated columns to FILE
    #[arg(long, value_name = "FILE")]
    pub output_simple_csv: Option<PathBuf>,

    /// Download the first filing's printable document (HTML) to PATH
    #[arg(long, value_name = "PATH")]
    pub download_first: Option<PathBuf>,
}

pub async fn run(args: &FilingsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = FilingQuery::default()
        .with_page(args.page)
        .with_page_size(args.page_size);
    if let Some(client_id) = args.client_id {
        query = query.with_client_id(client_id);
    }
    if let Some(client_name) = &args.client_name {
        query = query.with_client_name(client_name);
    }
    if let Some(lobbyist_id) = args.lobbyist_id {
        query = query.with_lobbyist_id(lobbyist_id);
    }
    if let Some(lobbyist_name) = &args.lobbyist_name {
        query = query.with_lobbyist_name(lobbyist_name);
    }
    if let Some(filing_year) = args.filing_year {
        query = query.with_filing_year(filing_year);
    }

    // Any export implies the complete result set.
    let fetch_all = args.all_pages
        || args.output_json.is_some()
        || args.output_csv.is_some()
        || args.output_simple_csv.is_some();

    let results = if fetch_all {
        client.list_all_filings(&query, args.max_pages).await?
    } else {
        client.list_filings(&query).await?.results
    };

    match format {
        OutputFormat::Json => output::print_json(&results),
        OutputFormat::Table => {
            if results.is_empty() {
                println!("No filings matched the provided filters.");
            } else {
                println!("Filings returned: {}", results.len());
                output::print_filings_preview(&results);
            }
        }
    }

    if let Some(path) = &args.output_json {
        std::fs::write(path, export::to_json_pretty(&results)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Wrote {} filings to {}", results.len(), path.display());
    }
    if let Some(path) = &args.output_csv {
        std::fs::write(path, export::full_csv(&results)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Wrote CSV summary with {} rows to {}", results.len(), path.display());
    }
    if let Some(path) = &args.output_simple_csv {
        std::fs::write(path, export::simple_csv(&results)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!(
            "Wrote simplified CSV with {} rows to {}",
            results.len(),
            path.display()
        );
    }
    if let Some(path) = &args.download_first {
        if let Some(first) = results.first() {
            let uuid = first
                .get("filing_uuid")
                .and_then(|v| v.as_str())
                .context("first filing lacks a filing_uuid; cannot download")?;
            let bytes = client.fetch_filing_document(uuid).await?;
            std::fs::write(path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Downloaded first filing document to {}", path.display());
        }
    }

    Ok(())
}
