//! Error types for the search page
//!
//! Transport, decoding, and orchestration failures are reported to the
//! caller as-is. Nothing here retries.

use thiserror::Error;

/// Errors that can occur while orchestrating a search
#[derive(Error, Debug)]
pub enum SearchError {
    /// A request was issued before `Manager::init` ran
    #[error("manager not initialized - call init() before issuing requests")]
    NotInitialized,

    /// Two widgets were registered under the same id
    #[error("a widget with id '{0}' is already registered")]
    DuplicateWidget(String),

    /// The HTTP request could not be sent or its body could not be read
    #[error("search service request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The search service answered with a non-success status
    #[error("search service error {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The response body was not a valid search response
    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured service URL could not be parsed
    #[error("invalid search service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;
