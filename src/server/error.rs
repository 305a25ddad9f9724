//! Error types for the file server.

use thiserror::Error;

use crate::parser::Error as ParserError;
use crate::resource::Error as ResolveError;

/// Errors that can occur while serving a connection or starting the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing the request.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// The request could not be resolved to a resource.
    #[error("Resolve error: {0}")]
    ResolveError(#[from] ResolveError),

    /// I/O error on the connection or the served file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The configuration could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The port argument is not a valid port number.
    #[error("{0} is not a valid port")]
    InvalidPort(String),

    /// The port lies in the well-known range.
    #[error("{0} is in the well-known port range")]
    WellKnownPort(u16),

    /// A status code outside the set the server emits.
    #[error("Unsupported status code: {0}")]
    UnsupportedStatus(u16),
}

impl Error {
    /// Whether the client sent a request that deserves a `400 Bad Request`.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Error::ParseError(_) | Error::ResolveError(_))
    }
}
