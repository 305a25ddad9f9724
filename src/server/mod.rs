//! HTTP file server.
//!
//! Renders response heads, streams file bodies and runs the sequential
//! accept loop that ties the pipeline together.

mod config;
mod error;
mod http_server;
mod response;
mod transmit;

// Re-export public items
pub use config::{validate_port, ServerConfig};
pub use error::Error;
pub use http_server::FileServer;
pub use response::{ResponseHead, StatusCode};
pub use transmit::{transmit_body, TransferMode, DEFAULT_CHUNK_SIZE};
