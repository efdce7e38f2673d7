//! Error types for visual session operations
//!
//! Only two failure classes are surfaced as `Err`: invalid configuration
//! (caught before any network access) and transport-level faults. A request
//! the server rejects, or an operation attempted in the wrong session state,
//! is an *operation failure* and is reported through the `Ok(false)` /
//! `Ok(None)` return value instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Invalid constructor or operation arguments, raised before any
    /// network access (bad server address, malformed notification URI,
    /// unknown notification type).
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Network-level failure from the HTTP transport. Propagated unchanged,
    /// never retried.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response carried a body that could not be decoded.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SessionError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
