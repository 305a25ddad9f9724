//! Resource resolution.
//!
//! Maps a parsed request to the local file that answers it, together with
//! its content kind and status code.

mod error;
mod mime;
mod resolver;
mod tests;

// Re-export public items
pub use error::Error;
pub use mime::{MimeKind, CONTENT_TYPES};
pub use resolver::{ResolvedResource, ResourceResolver, RootPolicy};
