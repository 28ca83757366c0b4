//! URL parsing.
//!
//! Accepts `scheme://host[:port][/path]` for the http and https
//! schemes only. Every split takes the *first* occurrence of its
//! delimiter; hosts and paths may contain the delimiter characters in
//! later positions.

use std::fmt;

use wisp_types::{Result, WispError};

/// Supported URL schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// The well-known port for this scheme.
    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }

    /// The scheme name as it appears in a URL.
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// A parsed resource locator.
///
/// Immutable once constructed; one per navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub scheme: Scheme,
    pub host: String,
    /// Always in 1..=65535. Defaults to 80/443 by scheme unless an
    /// explicit `host:port` form overrides it.
    pub port: u16,
    /// Always begins with `/`.
    pub path: String,
}

impl Url {
    /// Parse a locator string.
    ///
    /// Fails with [`WispError::MalformedUrl`] when the input lacks a
    /// `scheme://` prefix, the scheme is not http/https, or an explicit
    /// port is not a decimal in 1..=65535.
    pub fn parse(raw: &str) -> Result<Self> {
        let (scheme, rest) = raw
            .split_once("://")
            .ok_or_else(|| WispError::MalformedUrl(format!("missing scheme in {raw:?}")))?;

        let scheme = match scheme {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            other => {
                return Err(WispError::MalformedUrl(format!(
                    "unsupported scheme {other:?}"
                )));
            },
        };

        // No slash: the whole remainder is the host, path defaults to /.
        // Otherwise split once, keeping the delimiter on the path side.
        let (authority, path) = match rest.split_once('/') {
            Some((authority, tail)) => (authority, format!("/{tail}")),
            None => (rest, "/".to_string()),
        };

        let (host, port) = match authority.split_once(':') {
            Some((host, port_str)) => {
                let port: u16 = port_str.parse().map_err(|_| {
                    WispError::MalformedUrl(format!("bad port {port_str:?} in {raw:?}"))
                })?;
                if port == 0 {
                    return Err(WispError::MalformedUrl(format!("port 0 in {raw:?}")));
                }
                (host, port)
            },
            None => (authority, scheme.default_port()),
        };

        Ok(Url {
            scheme,
            host: host.to_string(),
            port,
            path,
        })
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme.as_str(), self.host)?;
        if self.port != self.scheme.default_port() {
            write!(f, ":{}", self.port)?;
        }
        write!(f, "{}", self.path)
    }
}
