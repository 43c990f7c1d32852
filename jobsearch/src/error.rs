//! Errors raised while talking to the search API

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("API returned status {status}")]
    RequestFailed { status: u16 },

    #[error("could not decode search response: {0}")]
    DecodeFailed(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("invalid API url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Result type for search operations.
pub type ApiResult<T> = Result<T, SearchError>;
