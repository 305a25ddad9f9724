//! Mapping request paths to local files.

use std::path::{Component, Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::parser::IncomingRequest;
use crate::resource::error::Error;
use crate::resource::mime::MimeKind;
use crate::server::{ServerConfig, StatusCode};

/// How a request for `/` is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootPolicy {
    /// Serve the default document with `200 OK`.
    #[default]
    Serve,
    /// Answer `301 Moved Permanently` pointing at the default document,
    /// still carrying the document as the body.
    Redirect,
}

/// The file, content kind and status chosen for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    /// Local path of the file to send
    pub file_path: PathBuf,
    /// Name of the file relative to the server root
    pub file_name: String,
    /// Content kind of the file
    pub mime: MimeKind,
    /// Status to answer with
    pub status: StatusCode,
}

/// Resolves request paths against a root directory.
#[derive(Debug, Clone)]
pub struct ResourceResolver {
    root: PathBuf,
    default_document: String,
    not_found_document: String,
    root_policy: RootPolicy,
}

impl ResourceResolver {
    /// Create a resolver serving files under `root`.
    ///
    /// Both documents are named relative to `root`.
    pub fn new(
        root: impl Into<PathBuf>,
        default_document: impl Into<String>,
        not_found_document: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            default_document: default_document.into(),
            not_found_document: not_found_document.into(),
            root_policy: RootPolicy::default(),
        }
    }

    /// Create a resolver from the server configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.root.clone(),
            config.default_document.clone(),
            config.not_found_document.clone(),
        )
        .with_root_policy(config.root_policy)
    }

    /// Set how `/` is answered.
    pub fn with_root_policy(mut self, policy: RootPolicy) -> Self {
        self.root_policy = policy;
        self
    }

    /// Resolve a request to the resource that answers it.
    ///
    /// Only `GET` is served. Missing or unreadable files resolve to the
    /// not-found document with status 404.
    pub async fn resolve(&self, request: &IncomingRequest) -> Result<ResolvedResource, Error> {
        if request.method != "GET" {
            return Err(Error::UnsupportedMethod(request.method.clone()));
        }

        if request.path == "/" {
            let status = match self.root_policy {
                RootPolicy::Serve => StatusCode::Ok,
                RootPolicy::Redirect => StatusCode::MovedPermanently,
            };
            return Ok(self.document(&self.default_document, status));
        }

        let Some(name) = request.path.strip_prefix('/') else {
            debug!("Path without leading slash: {path}", path = request.path);
            return Ok(self.not_found());
        };
        let mime = MimeKind::from_file_name(name);

        if !stays_under_root(name) {
            debug!("Refusing path outside the root: {name}");
            return Ok(self.not_found());
        }

        let file_path = self.root.join(name);
        if is_readable_file(&file_path).await {
            Ok(ResolvedResource {
                file_path,
                file_name: name.to_string(),
                mime,
                status: StatusCode::Ok,
            })
        } else {
            debug!("No readable file at {path}", path = file_path.display());
            Ok(self.not_found())
        }
    }

    fn not_found(&self) -> ResolvedResource {
        self.document(&self.not_found_document, StatusCode::NotFound)
    }

    fn document(&self, name: &str, status: StatusCode) -> ResolvedResource {
        ResolvedResource {
            file_path: self.root.join(name),
            file_name: name.to_string(),
            mime: MimeKind::Html,
            status,
        }
    }
}

/// Only plain relative names may be looked up; `..`, absolute paths and
/// empty names never are.
fn stays_under_root(name: &str) -> bool {
    let mut components = Path::new(name).components().peekable();
    components.peek().is_some()
        && components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

async fn is_readable_file(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => tokio::fs::File::open(path).await.is_ok(),
        _ => false,
    }
}
