//! Error types for the wisp viewer.
//!
//! One variant per failure stage of a navigation. Any of these aborts
//! the navigation entirely; there is no retry and no partial rendering.

use std::io;

/// Errors produced by the wisp viewer.
#[derive(Debug, thiserror::Error)]
pub enum WispError {
    /// The locator string could not be parsed, or its scheme is not
    /// http/https. Raised before any network I/O happens.
    #[error("malformed URL: {0}")]
    MalformedUrl(String),

    /// DNS resolution or TCP connect failure.
    #[error("connection failed: {0}")]
    Connection(String),

    /// TLS handshake or certificate validation failure. Never falls
    /// back to plaintext.
    #[error("TLS error: {0}")]
    Tls(String),

    /// The response does not have the expected shape: bad status line,
    /// header line without a colon, or non-UTF-8 text.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Mid-stream read or write failure on the socket.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, WispError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_url_display() {
        let e = WispError::MalformedUrl("no scheme".into());
        assert_eq!(format!("{e}"), "malformed URL: no scheme");
    }

    #[test]
    fn connection_display() {
        let e = WispError::Connection("refused".into());
        assert_eq!(format!("{e}"), "connection failed: refused");
    }

    #[test]
    fn tls_display() {
        let e = WispError::Tls("bad certificate".into());
        assert_eq!(format!("{e}"), "TLS error: bad certificate");
    }

    #[test]
    fn protocol_display() {
        let e = WispError::Protocol("bad status line".into());
        assert_eq!(format!("{e}"), "protocol error: bad status line");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        let e: WispError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn error_is_debug() {
        let e = WispError::Tls("test".into());
        let dbg = format!("{e:?}");
        assert!(dbg.contains("Tls"));
    }

    #[test]
    fn result_alias_roundtrip() {
        let ok: Result<i32> = Ok(42);
        assert_eq!(ok.unwrap(), 42);

        let err: Result<i32> = Err(WispError::Connection("oops".into()));
        assert!(err.is_err());
    }
}
