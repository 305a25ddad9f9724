//! Error types for resource resolution.

use thiserror::Error;

/// Errors that end resolution without a resource.
///
/// A missing file is not an error; it resolves to the not-found document.
#[derive(Debug, Error)]
pub enum Error {
    /// The request used a method other than `GET`.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),
}
