//! Search service transports
//!
//! The manager talks to the search service through [`SearchTransport`], so
//! the page can run against a live Solr-style service or an in-memory
//! stand-in. Only the Solr HTTP transport ships with the crate.

use async_trait::async_trait;

use crate::error::SearchResult;
use crate::types::SearchResponse;

pub mod solr;

pub use solr::SolrTransport;

/// Trait for search service transports
#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// Get the name of this transport
    fn name(&self) -> &str;

    /// Execute one request against `servlet` with the given parameters
    ///
    /// `params` are the store's `(name, value)` pairs in order. Wire-format
    /// selectors such as `wt=json` are the transport's business.
    async fn execute(
        &self,
        servlet: &str,
        params: &[(String, String)],
    ) -> SearchResult<SearchResponse>;
}
