//! Network data retrieval for the REST Countries API.
//!
//! `client` wraps one configured `reqwest::Client`; `countries` holds the
//! endpoint functions, the raw response schema and the record mapping.

use thiserror::Error;

mod client;
mod countries;

/// Result type alias for the service layer.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures surfaced by the HTTP client and the country service.
///
/// Errors are propagated to the caller unchanged; nothing in this module retries
/// or translates them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot be used to build requests.
    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
    /// Connection, TLS or I/O failure while talking to the server.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// URL that was requested.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },
    /// Server answered with a non-success status code.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// URL that was requested.
        url: String,
        /// Status code of the response.
        status: u16,
    },
    /// Body could not be parsed as JSON.
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        /// URL that was requested.
        url: String,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
    /// JSON parsed but does not match the expected country list shape.
    #[error("unexpected response shape: {0}")]
    Schema(String),
}

pub use client::ApiClient;
pub use countries::{
    DEFAULT_LOOKUP_NAME, RawCountry, RawFlags, RawIdd, RawName, fetch_all, fetch_by_name,
    map_records, parse_countries,
};
