//! The file server and its per-connection pipeline.

use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;

use crate::parser::parse_request_with;
use crate::resource::ResourceResolver;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::{ResponseHead, FALLBACK_VERSION};
use crate::server::transmit::{transmit_body, TransferMode};

/// A single-threaded HTTP file server.
///
/// Connections are handled strictly one after another.
pub struct FileServer {
    /// The server configuration.
    pub config: ServerConfig,
    resolver: ResourceResolver,
}

impl FileServer {
    /// Create a new file server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let resolver = ResourceResolver::from_config(&config);
        Self { config, resolver }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Serving {root} on http://{addr}", root = self.config.root.display(), addr = self.config.addr);
        Ok(listener)
    }

    /// Start the server and serve connections until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        self.config.validate()?;
        let listener = self.setup_listener().await?;
        let mut shutdown = Box::pin(signal::ctrl_c());

        loop {
            tokio::select! {
                result = &mut shutdown => {
                    if let Err(e) = result {
                        error!("Error setting up Ctrl+C handler: {e}");
                    }
                    info!("Shutting down server...");
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            debug!("Accepted connection from {addr}");
                            self.serve(socket).await;
                        }
                        Err(e) => error!("Error accepting connection: {e}"),
                    }
                }
            }
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Run one connection to completion and close it.
    async fn serve(&self, mut socket: TcpStream) {
        if let Err(e) = self.handle_connection(&mut socket).await {
            if e.is_bad_request() {
                warn!("Rejected request: {e}");
            } else {
                error!("Error handling connection: {e}");
            }
        }
        if let Err(e) = socket.shutdown().await {
            debug!("Error closing connection: {e}");
        }
    }

    /// Handle a single connection.
    ///
    /// Reads one request, answers it and returns the number of body bytes
    /// sent. Malformed requests and unsupported methods are answered with
    /// `400 Bad Request` before the error is returned.
    pub async fn handle_connection<S>(&self, socket: &mut S) -> Result<u64, Error>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut buf = vec![0; self.config.read_buffer_size];

        // The whole request must arrive in this one read
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(0); // Connection closed
        }

        let request = match parse_request_with(&buf[..n], self.config.header_policy) {
            Ok(request) => request,
            Err(e) => {
                let e = Error::from(e);
                Self::write_bad_request(socket, FALLBACK_VERSION, &e).await?;
                return Err(e);
            }
        };

        debug!(
            "Request for {path} from host {host}",
            path = request.path,
            host = request.get_header("Host").unwrap_or("-")
        );

        let resource = match self.resolver.resolve(&request).await {
            Ok(resource) => resource,
            Err(e) => {
                let e = Error::from(e);
                Self::write_bad_request(socket, &request.version, &e).await?;
                return Err(e);
            }
        };

        let head = ResponseHead::for_resource(&request.version, &resource);
        head.write_to(socket).await?;

        let sent = transmit_body(
            &resource.file_path,
            TransferMode::from(resource.mime),
            socket,
            self.config.chunk_size,
        )
        .await?;
        socket.flush().await?;

        info!(
            "\"{line}\" {code} {sent}",
            line = request.request_line(),
            code = resource.status.code()
        );
        Ok(sent)
    }

    async fn write_bad_request<S>(socket: &mut S, version: &str, e: &Error) -> Result<(), Error>
    where
        S: AsyncWrite + Unpin,
    {
        ResponseHead::bad_request(version).write_to(socket).await?;
        socket.write_all(format!("{e}\n").as_bytes()).await?;
        socket.flush().await?;
        Ok(())
    }
}
