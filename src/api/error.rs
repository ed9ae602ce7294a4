//! Error classification for user batch fetches.

use thiserror::Error;

/// Errors that can occur while fetching a batch of users.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS, or timeout failure before a full response arrived
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    /// Response body was not a valid user batch
    #[error("could not decode user batch: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}
