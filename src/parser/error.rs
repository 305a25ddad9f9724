//! Error types for the request parser.

use thiserror::Error;

/// Errors that can occur while parsing an incoming request.
///
/// Every variant is answered with a `400 Bad Request` by the server.
#[derive(Debug, Error)]
pub enum Error {
    /// The request buffer is empty.
    #[error("Empty request")]
    EmptyRequest,

    /// The request buffer is not valid UTF-8.
    #[error("Request is not valid UTF-8")]
    InvalidEncoding,

    /// The request line does not split into exactly method, path and version.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// A header line has no colon separating field from value.
    #[error("Invalid header line: {0}")]
    InvalidHeaderFormat(String),
}
