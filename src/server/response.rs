//! Status codes and response header rendering.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::resource::{MimeKind, ResolvedResource};
use crate::server::error::Error;

/// Version used on the status line when the request line could not be read.
pub const FALLBACK_VERSION: &str = "HTTP/1.0";

/// The status codes the server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    MovedPermanently = 301,
    BadRequest = 400,
    NotFound = 404,
}

impl StatusCode {
    /// Look up a status code by number.
    ///
    /// Any code the server never emits is an error.
    pub fn from_code(code: u16) -> Result<Self, Error> {
        match code {
            200 => Ok(StatusCode::Ok),
            301 => Ok(StatusCode::MovedPermanently),
            400 => Ok(StatusCode::BadRequest),
            404 => Ok(StatusCode::NotFound),
            _ => Err(Error::UnsupportedStatus(code)),
        }
    }

    /// The numeric code.
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// The status line and header fields of a response.
///
/// Headers keep the order in which they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    /// The version echoed on the status line
    pub version: String,
    /// The response status
    pub status: StatusCode,
    /// The header fields
    pub headers: Vec<(String, String)>,
}

impl ResponseHead {
    /// Create a head with no header fields.
    pub fn new(version: impl Into<String>, status: StatusCode) -> Self {
        Self {
            version: version.into(),
            status,
            headers: Vec::new(),
        }
    }

    /// Build the head for a resolved resource.
    pub fn for_resource(version: &str, resource: &ResolvedResource) -> Self {
        let mut head = Self::new(version, resource.status);

        if resource.status == StatusCode::MovedPermanently {
            head = head.with_header("Location", format!("/{}", resource.file_name));
        }

        match resource.mime {
            MimeKind::Unknown => head.with_content_type(MimeKind::Unknown.content_type()),
            mime => {
                head = head
                    .with_content_type(mime.content_type())
                    .with_header("Accept-Ranges", "bytes");
                if mime.is_inline_attachment() {
                    head = head.with_header(
                        "Content-Disposition",
                        format!("inline; filename={}", quoted(&resource.file_name)),
                    );
                }
                head
            }
        }
    }

    /// Build the head of a `400 Bad Request` response.
    pub fn bad_request(version: &str) -> Self {
        Self::new(version, StatusCode::BadRequest).with_content_type("text/plain")
    }

    /// Append a header field.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Append a `Content-Type` field.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// The lines of the head in write order, each with its terminator.
    ///
    /// The last line is the blank line ending the header block.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.headers.len() + 2);
        lines.push(format!(
            "{} {} {}\n",
            self.version,
            self.status.code(),
            self.status.reason_phrase()
        ));
        for (name, value) in &self.headers {
            lines.push(format!("{name}: {value}\n"));
        }
        lines.push("\n".to_string());
        lines
    }

    /// Convert the head to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.lines().concat().into_bytes()
    }

    /// Write the head line by line.
    ///
    /// # Returns
    ///
    /// The number of bytes written
    pub async fn write_to<W>(&self, writer: &mut W) -> Result<u64, Error>
    where
        W: AsyncWrite + Unpin,
    {
        let mut written = 0u64;
        for line in self.lines() {
            writer.write_all(line.as_bytes()).await?;
            written += line.len() as u64;
        }
        Ok(written)
    }
}

/// Render `value` as an HTTP quoted-string, escaping `"` and `\`.
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
