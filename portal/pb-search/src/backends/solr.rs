//! Solr HTTP transport
//!
//! Issues `GET {base}{servlet}?{params}&wt=json` and decodes the JSON
//! response. See: https://solr.apache.org/guide/solr/latest/query-guide/response-writers.html

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::SearchTransport;
use crate::config::ServiceConfig;
use crate::error::{SearchError, SearchResult};
use crate::types::SearchResponse;

/// Transport backed by a Solr-compatible HTTP service
pub struct SolrTransport {
    client: Client,
    base: Url,
}

impl SolrTransport {
    pub fn new(config: &ServiceConfig) -> SearchResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("pb-search/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base: base_url(&config.url)?,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Full request URL for a servlet and parameter list
    pub fn request_url(&self, servlet: &str, params: &[(String, String)]) -> SearchResult<Url> {
        let mut url = self.base.join(servlet.trim_start_matches('/'))?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("wt", "json");
        Ok(url)
    }
}

/// Parse the service URL, making sure it ends with `/` so servlets join
/// beneath it instead of replacing its last segment
fn base_url(raw: &str) -> Result<Url, url::ParseError> {
    let raw = raw.trim();
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{}/", raw))
    }
}

#[async_trait]
impl SearchTransport for SolrTransport {
    fn name(&self) -> &str {
        "solr"
    }

    async fn execute(
        &self,
        servlet: &str,
        params: &[(String, String)],
    ) -> SearchResult<SearchResponse> {
        let url = self.request_url(servlet, params)?;
        tracing::debug!(%url, "GET");

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
