//! Rustls-backed TLS client.
//!
//! Builds one [`rustls::ClientConfig`] trusting Mozilla's root CA
//! bundle and wraps TCP streams in client sessions with SNI and full
//! certificate-chain and hostname validation. A handshake or
//! certificate failure is fatal; there is no plaintext fallback.

use std::io;
use std::net::TcpStream;
use std::sync::Arc;

use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, RootCertStore, StreamOwned};

use wisp_types::{Result, WispError};

/// A TLS session over a TCP socket.
pub type TlsStream = StreamOwned<ClientConnection, TcpStream>;

/// Shared, reusable TLS client configuration (one per process).
pub struct TlsClient {
    config: Arc<ClientConfig>,
}

impl TlsClient {
    /// Build a client that trusts Mozilla's root CA bundle.
    pub fn new() -> Self {
        let roots = RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        Self::with_roots(roots)
    }

    /// Build a client trusting an explicit root store.
    ///
    /// Used by tests that mint their own certificates; production code
    /// goes through [`TlsClient::new`].
    pub fn with_roots(roots: RootCertStore) -> Self {
        let config = ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();

        Self {
            config: Arc::new(config),
        }
    }

    /// Wrap `tcp` in a TLS client session for `server_name`.
    ///
    /// The handshake is driven to completion here, so certificate and
    /// protocol failures surface as [`WispError::Tls`] from this call
    /// rather than on the first read.
    pub fn wrap(&self, mut tcp: TcpStream, server_name: &str) -> Result<TlsStream> {
        let sni = ServerName::try_from(server_name.to_owned())
            .map_err(|e| WispError::Tls(format!("invalid server name {server_name:?}: {e}")))?;

        let mut conn = ClientConnection::new(Arc::clone(&self.config), sni)
            .map_err(|e| WispError::Tls(format!("TLS session init: {e}")))?;

        log::debug!("TLS handshake with {server_name}");

        // rustls is lazy; pump I/O until the handshake completes.
        while conn.is_handshaking() {
            conn.complete_io(&mut tcp)
                .map_err(|e| map_handshake_error(server_name, &e))?;
        }

        Ok(StreamOwned::new(conn, tcp))
    }
}

impl Default for TlsClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a handshake I/O error as [`WispError::Tls`].
fn map_handshake_error(server_name: &str, e: &io::Error) -> WispError {
    WispError::Tls(format!("handshake with {server_name} failed: {e}"))
}
