//! Incoming request representation and parsing.

use serde::Deserialize;

use crate::parser::error::Error;

/// What the parser does with a header line that has no colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderPolicy {
    /// Fail the whole request with [`Error::InvalidHeaderFormat`].
    #[default]
    Reject,
    /// Drop the offending line and keep parsing.
    Skip,
}

/// A parsed HTTP request.
///
/// Method and version are kept as the raw tokens found on the request line.
/// The resolver decides which methods it serves, and the version is echoed
/// back on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingRequest {
    /// The method token, e.g. `GET`
    pub method: String,
    /// The request path, starting with `/`
    pub path: String,
    /// The version token, e.g. `HTTP/1.1`
    pub version: String,
    /// Header fields in the order they were received
    pub headers: Vec<(String, String)>,
}

impl IncomingRequest {
    /// Create a new request from its parts.
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        version: impl Into<String>,
        headers: Vec<(String, String)>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            version: version.into(),
            headers,
        }
    }

    /// Get the first value of a header.
    ///
    /// Public lookup for library users; the server only reads `Host` for
    /// its connection log.
    ///
    /// # Arguments
    ///
    /// * `name` - The header name (case-insensitive)
    ///
    /// # Returns
    ///
    /// The header value, if it exists
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The request line as it would appear on the wire, without terminator.
    pub fn request_line(&self) -> String {
        format!("{} {} {}", self.method, self.path, self.version)
    }
}

/// Parse a request, rejecting malformed header lines.
///
/// # Arguments
///
/// * `input` - The bytes of one request, as received in a single read
///
/// # Returns
///
/// The parsed request, or an error if the request is malformed
pub fn parse_request(input: &[u8]) -> Result<IncomingRequest, Error> {
    parse_request_with(input, HeaderPolicy::Reject)
}

/// Parse a request with an explicit policy for malformed header lines.
///
/// Both `\r\n` and bare `\n` line endings are accepted. Header parsing stops
/// at the first blank line; anything after it is ignored.
pub fn parse_request_with(input: &[u8], policy: HeaderPolicy) -> Result<IncomingRequest, Error> {
    if input.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let input_str = std::str::from_utf8(input).map_err(|_| Error::InvalidEncoding)?;

    // `lines` splits on `\n` and strips one trailing `\r`
    let mut lines = input_str.lines();

    let request_line = lines.next().ok_or(Error::EmptyRequest)?;
    let (method, path, version) = split_request_line(request_line)?;

    let mut headers = Vec::new();
    for line in lines {
        if line.is_empty() {
            break;
        }

        match line.split_once(':') {
            Some((field, value)) => {
                headers.push((field.trim().to_string(), value.trim().to_string()));
            }
            None => match policy {
                HeaderPolicy::Reject => return Err(Error::InvalidHeaderFormat(line.to_string())),
                HeaderPolicy::Skip => continue,
            },
        }
    }

    Ok(IncomingRequest::new(method, path, version, headers))
}

/// Split the request line on single spaces into exactly three non-empty
/// tokens. The path must start with `/`.
fn split_request_line(line: &str) -> Result<(&str, &str, &str), Error> {
    let mut parts = line.split(' ');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(method), Some(path), Some(version), None)
            if !method.is_empty() && path.starts_with('/') && !version.is_empty() =>
        {
            Ok((method, path, version))
        }
        _ => Err(Error::MalformedRequestLine(line.to_string())),
    }
}
