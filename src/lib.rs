//! A minimal single-connection HTTP file server.
//!
//! Each connection carries exactly one request. The request goes through a
//! fixed pipeline:
//!
//! 1. [`parse_request`] turns the bytes of a single read into an [`IncomingRequest`].
//! 2. [`ResourceResolver`] maps the path to a local file, a [`MimeKind`] and a [`StatusCode`].
//! 3. [`ResponseHead`] renders the status line and header fields.
//! 4. [`transmit_body`] streams the file, line by line for text and in fixed
//!    chunks for binary content.
//!
//! [`FileServer`] runs that pipeline for one connection at a time.
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use fileserve::parse_request;
//!
//! let request = parse_request(b"GET /index.html HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();
//!
//! assert_eq!(request.method, "GET");
//! assert_eq!(request.path, "/index.html");
//! assert_eq!(request.version, "HTTP/1.1");
//! assert_eq!(request.headers, vec![("Host".to_string(), "x".to_string())]);
//! ```
//!
//! ## Error handling
//!
//! ```
//! use fileserve::{parse_request, ParserError};
//!
//! match parse_request(b"GET /\r\n\r\n") {
//!     Err(ParserError::MalformedRequestLine(line)) => assert_eq!(line, "GET /"),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```
//!
//! ## Content kinds
//!
//! ```
//! use fileserve::MimeKind;
//!
//! assert_eq!(MimeKind::from_file_name("song.mp3"), MimeKind::Mp3);
//! assert_eq!(MimeKind::Mp3.content_type(), "audio/mpeg");
//! assert_eq!(MimeKind::from_file_name("notes.xyz").content_type(), "text/plain");
//! ```
//!
//! ## Running a server
//!
//! ```no_run
//! use fileserve::{FileServer, ServerConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), fileserve::ServerError> {
//!     let config = ServerConfig {
//!         root: "public".into(),
//!         ..ServerConfig::default()
//!     };
//!     FileServer::new(config).start().await
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the resource module
pub mod resource;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request, parse_request_with, Error as ParserError, HeaderPolicy, IncomingRequest};
pub use resource::{Error as ResolveError, MimeKind, ResolvedResource, ResourceResolver, RootPolicy};
pub use server::{
    transmit_body, Error as ServerError, FileServer, ResponseHead, ServerConfig, StatusCode, TransferMode,
};
