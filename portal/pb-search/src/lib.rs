//! PB Search Library
//!
//! The PDS phone book search page: a [`Manager`] wired to four widgets
//! (result list, search box, detail link, pager) over a Solr-style search
//! service.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pb_search::{bootstrap, Config, PageEvent, SolrTransport};
//!
//! let config = Config::load()?;
//! let transport = Arc::new(SolrTransport::new(&config.service)?);
//! let mut manager = bootstrap(&config, transport).await?;
//! manager.dispatch(PageEvent::Submit("smith".into())).await?;
//! ```
//!
//! # Configuration
//! Set `SEARCH_SERVICE_URL` env var or configure in `~/.pds/pb-search.toml`

pub mod backends;
pub mod cli;
pub mod config;
pub mod error;
pub mod manager;
pub mod page;
pub mod phonebook;
pub mod render;
pub mod store;
pub mod types;
pub mod widgets;

#[cfg(test)]
mod testing;

pub use backends::{SearchTransport, SolrTransport};
pub use config::Config;
pub use error::{SearchError, SearchResult};
pub use manager::Manager;
pub use page::{selectors, Page};
pub use phonebook::bootstrap;
pub use store::ParameterStore;
pub use types::{Document, SearchResponse};
pub use widgets::{PageEvent, Reaction, Widget, WidgetContext};
