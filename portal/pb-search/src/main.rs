//! PB Search
//!
//! Loads the PDS phone book search page against a search service and prints
//! the rendered result.
//!
//! # Configuration
//! Set `SEARCH_SERVICE_URL` env var or configure in `~/.pds/pb-search.toml`

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use pb_search::cli::Cli;
use pb_search::render::render_page;
use pb_search::{bootstrap, SolrTransport};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = pb_common::init_tracing("pb_search", cli.verbose) {
        eprintln!("pb-search: {}", pb_common::error_chain(err.as_ref()));
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pb-search: {}", pb_common::error_chain(err.as_ref()));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    tracing::info!("Search service URL: {}", config.service.url);

    let transport = Arc::new(SolrTransport::new(&config.service)?);
    let mut manager = bootstrap(&config, transport).await?;

    for event in cli.command.events() {
        manager.dispatch(event).await?;
    }

    if cli.json {
        let response = manager.response().cloned().unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", render_page(manager.page()));
    }

    Ok(())
}
