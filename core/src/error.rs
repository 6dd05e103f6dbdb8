//! Error types for the RetroAchievements API client.
//!
//! # Design
//! `InvalidArgument` is kept apart from every network-side failure so callers
//! can tell "I passed something the API would never accept" from "the request
//! went out and something broke". Validation errors are raised before a
//! request is built; the remaining variants only occur after dispatch.

use thiserror::Error;

/// Errors returned by `RaClient` operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied argument is outside its legal set or malformed.
    /// No request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request could not be completed: connection, TLS, timeout or
    /// reading the body failed.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body is not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Client configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

impl From<ureq::Error> for Error {
    fn from(error: ureq::Error) -> Self {
        Error::Transport(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
