//! TCP connection setup and the plain/TLS stream enum.

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use wisp_types::{Result, WispError};

use crate::tls::TlsStream;

/// Open a blocking TCP connection to `(host, port)`.
///
/// Resolution and connect failures both map to
/// [`WispError::Connection`]. No timeouts are set: connect and all
/// subsequent reads block until the peer responds or the OS gives up.
pub fn connect(host: &str, port: u16) -> Result<TcpStream> {
    let addr = format!("{host}:{port}")
        .to_socket_addrs()
        .map_err(|e| WispError::Connection(format!("DNS resolution failed for {host}: {e}")))?
        .next()
        .ok_or_else(|| WispError::Connection(format!("no addresses for {host}:{port}")))?;

    log::debug!("connecting to {addr}");

    TcpStream::connect(addr)
        .map_err(|e| WispError::Connection(format!("TCP connect to {host}:{port} failed: {e}")))
}

/// A single-use network stream, plaintext or TLS.
///
/// Lets the HTTP client treat both transports as the same thing. The
/// underlying socket is closed when the value is dropped, on every
/// exit path.
pub enum NetStream {
    /// Plain TCP.
    Plain(TcpStream),
    /// TLS session over TCP.
    Tls(Box<TlsStream>),
}

impl Read for NetStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Plain(s) => s.read(buf),
            Self::Tls(s) => s.read(buf),
        }
    }
}

impl Write for NetStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(s) => s.write(buf),
            Self::Tls(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(s) => s.flush(),
            Self::Tls(s) => s.flush(),
        }
    }
}
