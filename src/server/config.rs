//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::parser::HeaderPolicy;
use crate::resource::RootPolicy;
use crate::server::error::Error;
use crate::server::transmit::DEFAULT_CHUNK_SIZE;

/// Ports below this are reserved for well-known services.
pub const FIRST_UNRESERVED_PORT: u16 = 1024;

/// File server configuration.
///
/// Missing fields take their default values when loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// Size of the single read that must hold the whole request.
    pub read_buffer_size: usize,
    /// Chunk size for binary bodies.
    pub chunk_size: usize,
    /// Directory request paths are resolved against.
    pub root: PathBuf,
    /// Document served for `/`, relative to `root`.
    pub default_document: String,
    /// Document served when nothing matches, relative to `root`.
    pub not_found_document: String,
    /// How `/` is answered.
    pub root_policy: RootPolicy,
    /// What to do with header lines that have no colon.
    pub header_policy: HeaderPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080)),
            read_buffer_size: 8192,
            chunk_size: DEFAULT_CHUNK_SIZE,
            root: PathBuf::from("."),
            default_document: "index.html".to_string(),
            not_found_document: "404.html".to_string(),
            root_policy: RootPolicy::Serve,
            header_policy: HeaderPolicy::Reject,
        }
    }
}

impl ServerConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings that would leave the server unable to answer.
    pub fn validate(&self) -> Result<(), Error> {
        if self.read_buffer_size == 0 {
            return Err(Error::ConfigError("read_buffer_size must be greater than 0".to_string()));
        }
        if self.chunk_size == 0 {
            return Err(Error::ConfigError("chunk_size must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Replace the port of the bind address.
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }
}

/// Validate a port given on the command line.
///
/// Ports in the well-known range `0..1024` are refused.
pub fn validate_port(arg: &str) -> Result<u16, Error> {
    let port: u16 = arg
        .trim()
        .parse()
        .map_err(|_| Error::InvalidPort(arg.to_string()))?;
    if port < FIRST_UNRESERVED_PORT {
        return Err(Error::WellKnownPort(port));
    }
    info!("Valid port: {port}");
    Ok(port)
}
