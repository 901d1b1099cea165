//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::widgets::PageEvent;

#[derive(Parser, Debug)]
#[command(name = "pb-search")]
#[command(about = "Search the PDS phone book")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Search service base URL (default: from config or http://localhost:8080/search-service/)
    #[arg(long, env = "SEARCH_SERVICE_URL", global = true)]
    pub url: Option<String>,

    /// Config file (default: $PB_SEARCH_CONFIG_PATH or ~/.pds/pb-search.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the last raw search response as JSON instead of the page
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (-v debug, -vv trace). Default is info.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Configuration for this run
    ///
    /// `--config` replaces the default file lookup. `--url` overrides every
    /// other source of the service URL.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(Some(path.as_path()))?,
            None => Config::load()?,
        };
        if let Some(url) = &self.url {
            config.service.url = url.clone();
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the page and show the default listing
    Browse {
        /// Jump to this page after loading
        #[arg(long)]
        page: Option<u64>,
    },
    /// Load the page and search for text
    Search {
        /// Text to search for
        text: String,
        /// Jump to this page of the results
        #[arg(long)]
        page: Option<u64>,
    },
    /// Load the page and open the detail record for an id
    Detail {
        /// Record identifier
        id: String,
    },
}

impl Commands {
    /// Page events to dispatch after the initial request, in order
    pub fn events(&self) -> Vec<PageEvent> {
        match self {
            Commands::Browse { page } => page.iter().map(|p| PageEvent::PageClick(*p)).collect(),
            Commands::Search { text, page } => {
                let mut events = vec![PageEvent::Submit(text.clone())];
                events.extend(page.map(PageEvent::PageClick));
                events
            }
            Commands::Detail { id } => vec![PageEvent::DetailClick(id.clone())],
        }
    }
}
