//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) storage_root: PathBuf,
}

impl ServerConfig {
    /// Construct a server configuration from the resolved settings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, storage_root: PathBuf) -> Self {
        Self {
            bind_addr,
            storage_root,
        }
    }
}
