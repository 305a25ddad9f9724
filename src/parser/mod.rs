//! HTTP request parser.
//!
//! Turns the raw bytes of a single read into an [`IncomingRequest`]. The
//! parser only borrows the input buffer and returns owned fields, so the
//! caller's buffer is never modified.

mod error;
mod request;

// Re-export public items
pub use error::Error;
pub use request::{HeaderPolicy, IncomingRequest};

// Re-export the parse functions
pub use request::{parse_request, parse_request_with};
