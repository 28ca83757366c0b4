//! Minimal HTTP/1.0 GET client and response parser.
//!
//! The wire contract is deliberately small: the request is exactly
//! three CRLF-terminated lines (request line, `Host`, blank), the
//! connection is single-use, and the body runs until the server closes
//! the socket. No redirects, no keep-alive, no chunked decoding, no
//! Content-Length truncation.

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Write};

use wisp_net::{NetStream, TlsClient};
use wisp_types::{Result, WispError};

use crate::url::{Scheme, Url};

/// A parsed HTTP response.
///
/// Built once by [`parse_response`] and returned by move; never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Version token from the status line (e.g. `"HTTP/1.0"`).
    pub version: String,
    /// Numeric status code (e.g. 200, 404).
    pub status: u16,
    /// Reason phrase; may itself contain spaces.
    pub reason: String,
    /// Headers, names lowercased on insert. Duplicate names
    /// last-write-wins.
    pub headers: HashMap<String, String>,
    /// Response body, decoded as UTF-8.
    pub body: String,
}

impl HttpResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }
}

/// Perform a GET request for the given URL.
///
/// Opens a fresh TCP connection, upgrades to TLS for https, writes the
/// three-line request, and parses the response. The socket is scoped
/// to this call: every exit path (success, protocol error, I/O error)
/// drops and thereby closes it before returning.
pub fn fetch(url: &Url, tls: &TlsClient) -> Result<HttpResponse> {
    let tcp = wisp_net::connect(&url.host, url.port)?;

    let stream = match url.scheme {
        Scheme::Http => NetStream::Plain(tcp),
        Scheme::Https => NetStream::Tls(Box::new(tls.wrap(tcp, &url.host)?)),
    };

    let mut reader = BufReader::new(stream);
    send_request(reader.get_mut(), url)?;

    let response = parse_response(&mut reader)?;
    log::debug!(
        "{} {} {} -- {} header(s), {} byte body",
        response.version,
        response.status,
        response.reason,
        response.headers.len(),
        response.body.len(),
    );
    Ok(response)
}

/// Write the request: exactly three CRLF-terminated lines.
///
/// No Accept, no User-Agent, no Connection header. This minimalism is
/// part of the wire contract and is asserted by the loopback tests.
fn send_request(stream: &mut impl Write, url: &Url) -> Result<()> {
    let request = format!("GET {} HTTP/1.0\r\nHost: {}\r\n\r\n", url.path, url.host);
    stream.write_all(request.as_bytes())?;
    stream.flush()?;
    Ok(())
}

/// Parse a response stream: status line, headers, body to EOF.
///
/// Line boundaries are CRLF only -- a bare `\n` never terminates a
/// status or header line, since servers may embed LF in values that
/// must not be treated as structural.
pub fn parse_response(reader: &mut impl BufRead) -> Result<HttpResponse> {
    let status_line = read_crlf_line(reader)?
        .ok_or_else(|| WispError::Protocol("empty response".to_string()))?;

    // version / code / reason: split on the first space twice, so the
    // reason phrase keeps its own spaces.
    let (version, rest) = status_line
        .split_once(' ')
        .ok_or_else(|| WispError::Protocol(format!("bad status line {status_line:?}")))?;
    let (code, reason) = rest
        .split_once(' ')
        .ok_or_else(|| WispError::Protocol(format!("bad status line {status_line:?}")))?;
    let status: u16 = code
        .parse()
        .map_err(|_| WispError::Protocol(format!("bad status code in {status_line:?}")))?;

    let mut headers = HashMap::new();
    loop {
        let line = read_crlf_line(reader)?.ok_or_else(|| {
            WispError::Protocol("connection closed before end of headers".to_string())
        })?;
        if line.is_empty() {
            break;
        }
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| WispError::Protocol(format!("bad header line {line:?}")))?;
        headers.insert(name.to_lowercase(), value.trim().to_string());
    }

    // HTTP/1.0: the server closing the connection marks the body end.
    let mut body_bytes = Vec::new();
    let mut chunk = [0u8; 8192];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => body_bytes.extend_from_slice(&chunk[..n]),
            // A TLS peer that closes without close_notify surfaces as
            // UnexpectedEof; the body simply ends there.
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }
    }
    let body = String::from_utf8(body_bytes)
        .map_err(|_| WispError::Protocol("response body is not valid UTF-8".to_string()))?;

    Ok(HttpResponse {
        version: version.to_string(),
        status,
        reason: reason.to_string(),
        headers,
        body,
    })
}

/// Read one CRLF-terminated line, without the terminator.
///
/// Returns `Ok(None)` at clean EOF. A line truncated by EOF is
/// returned as-is and left to the caller's shape checks.
fn read_crlf_line(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut raw = Vec::new();
    loop {
        let n = reader.read_until(b'\n', &mut raw)?;
        if n == 0 {
            if raw.is_empty() {
                return Ok(None);
            }
            break;
        }
        if raw.ends_with(b"\r\n") {
            raw.truncate(raw.len() - 2);
            break;
        }
        // Bare \n: part of the line, keep reading for the CRLF.
    }
    let line = String::from_utf8(raw)
        .map_err(|_| WispError::Protocol("response line is not valid UTF-8".to_string()))?;
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use std::net::TcpListener;

    fn parse(raw: &[u8]) -> Result<HttpResponse> {
        parse_response(&mut Cursor::new(raw))
    }

    #[test]
    fn parse_simple_response() {
        let resp = parse(b"HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n\r\nhello").unwrap();
        assert_eq!(resp.version, "HTTP/1.0");
        assert_eq!(resp.status, 200);
        assert_eq!(resp.reason, "OK");
        assert_eq!(resp.header("content-type"), Some("text/html"));
        assert_eq!(resp.body, "hello");
    }

    #[test]
    fn reason_phrase_keeps_spaces() {
        let resp = parse(b"HTTP/1.1 404 Not Found\r\n\r\n").unwrap();
        assert_eq!(resp.status, 404);
        assert_eq!(resp.reason, "Not Found");
        assert!(resp.body.is_empty());
    }

    #[test]
    fn status_line_needs_three_fields() {
        let err = parse(b"HTTP/1.0 200\r\n\r\n").unwrap_err();
        assert!(matches!(err, WispError::Protocol(_)));

        let err = parse(b"garbage\r\n\r\n").unwrap_err();
        assert!(matches!(err, WispError::Protocol(_)));
    }

    #[test]
    fn non_numeric_status_rejected() {
        let err = parse(b"HTTP/1.0 abc OK\r\n\r\n").unwrap_err();
        assert!(matches!(err, WispError::Protocol(_)));
    }

    #[test]
    fn headers_lowercased_and_lookup_case_insensitive() {
        let resp = parse(b"HTTP/1.0 200 OK\r\nX-Custom: Value\r\n\r\n").unwrap();
        assert_eq!(resp.headers.get("x-custom").map(String::as_str), Some("Value"));
        assert_eq!(resp.header("X-CUSTOM"), Some("Value"));
        assert_eq!(resp.header("missing"), None);
    }

    #[test]
    fn duplicate_headers_last_write_wins() {
        let resp =
            parse(b"HTTP/1.0 200 OK\r\nContent-Type: a\r\nCONTENT-TYPE: b\r\n\r\n").unwrap();
        assert_eq!(resp.header("content-type"), Some("b"));
        assert_eq!(resp.headers.len(), 1);
    }

    #[test]
    fn header_values_trimmed() {
        let resp = parse(b"HTTP/1.0 200 OK\r\nServer:   spacey   \r\n\r\n").unwrap();
        assert_eq!(resp.header("server"), Some("spacey"));
    }

    #[test]
    fn header_without_colon_rejected() {
        let err = parse(b"HTTP/1.0 200 OK\r\nnot-a-header\r\n\r\n").unwrap_err();
        assert!(matches!(err, WispError::Protocol(_)));
    }

    #[test]
    fn bare_lf_does_not_end_a_header_line() {
        // The LF belongs to the value; only CRLF terminates the line.
        let resp = parse(b"HTTP/1.0 200 OK\r\nX-Note: a\nb\r\n\r\n").unwrap();
        assert_eq!(resp.header("x-note"), Some("a\nb"));
    }

    #[test]
    fn eof_before_blank_line_rejected() {
        let err = parse(b"HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n").unwrap_err();
        assert!(matches!(err, WispError::Protocol(_)));
    }

    #[test]
    fn body_runs_to_eof_with_newlines_preserved() {
        let resp = parse(b"HTTP/1.0 200 OK\r\n\r\nline one\nline two\r\nline three").unwrap();
        assert_eq!(resp.body, "line one\nline two\r\nline three");
    }

    #[test]
    fn no_content_length_truncation() {
        // Content-Length is recorded but ignored: the body still runs
        // to stream end.
        let resp = parse(b"HTTP/1.0 200 OK\r\nContent-Length: 2\r\n\r\nabcdef").unwrap();
        assert_eq!(resp.header("content-length"), Some("2"));
        assert_eq!(resp.body, "abcdef");
    }

    #[test]
    fn canned_html_response() {
        let resp =
            parse(b"HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n\r\n<p>Hi!</p>").unwrap();
        assert_eq!(resp.header("content-type"), Some("text/html"));
        assert_eq!(resp.body, "<p>Hi!</p>");
    }

    #[test]
    fn loopback_fetch_sends_exact_request() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = std::thread::spawn(move || {
            let (mut conn, _) = listener.accept().unwrap();

            // Read until the blank line that ends the request.
            let mut request = Vec::new();
            let mut byte = [0u8; 1];
            while !request.ends_with(b"\r\n\r\n") {
                conn.read_exact(&mut byte).unwrap();
                request.push(byte[0]);
            }
            let request = String::from_utf8(request).unwrap();

            conn.write_all(
                b"HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n\r\n<b>wisp</b>",
            )
            .unwrap();
            // Closing the socket ends the body.
            drop(conn);
            request
        });

        let url = Url::parse(&format!("http://127.0.0.1:{port}/hello")).unwrap();
        let resp = fetch(&url, &TlsClient::new()).unwrap();

        assert_eq!(resp.status, 200);
        assert_eq!(resp.header("content-type"), Some("text/html"));
        assert_eq!(resp.body, "<b>wisp</b>");

        // The request is exactly three CRLF lines and nothing else.
        let request = handle.join().unwrap();
        assert_eq!(
            request,
            "GET /hello HTTP/1.0\r\nHost: 127.0.0.1\r\n\r\n"
        );
    }

    #[test]
    fn loopback_fetch_garbage_status_is_protocol_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = std::thread::spawn(move || {
            let (mut conn, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = conn.read(&mut buf);
            conn.write_all(b"NONSENSE\r\n\r\n").unwrap();
        });

        let url = Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();
        let err = fetch(&url, &TlsClient::new()).unwrap_err();
        assert!(matches!(err, WispError::Protocol(_)));

        handle.join().unwrap();
    }
}
