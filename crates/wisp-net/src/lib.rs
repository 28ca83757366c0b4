//! Networking for the wisp viewer.
//!
//! Provides the blocking TCP connect used by the HTTP client, the
//! [`NetStream`] enum that lets plaintext and TLS sockets share one
//! `Read + Write` surface, and the rustls-backed [`TlsClient`].
//!
//! Everything here is synchronous and single-use: one connect, one
//! conversation, then the stream is dropped. There are no timeouts --
//! a hung server hangs the caller.

mod stream;
mod tls;

pub use stream::{NetStream, connect};
pub use tls::{TlsClient, TlsStream};
