//! Content kinds and the extension registry.

use std::fmt;

/// The content kinds the server recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeKind {
    Html,
    Gif,
    Jpeg,
    Mp3,
    Pdf,
    /// Anything without a recognized extension; served as `text/plain`.
    Unknown,
}

/// Extension, kind and content type of every recognized kind.
///
/// Extensions match case-sensitively.
pub static CONTENT_TYPES: [(&str, MimeKind, &str); 5] = [
    ("html", MimeKind::Html, "text/html"),
    ("gif", MimeKind::Gif, "image/gif"),
    ("jpeg", MimeKind::Jpeg, "image/jpeg"),
    ("mp3", MimeKind::Mp3, "audio/mpeg"),
    ("pdf", MimeKind::Pdf, "application/pdf"),
];

impl MimeKind {
    /// Look up the kind for a file extension (without the dot).
    pub fn from_extension(extension: &str) -> Self {
        CONTENT_TYPES
            .iter()
            .find(|(ext, _, _)| *ext == extension)
            .map(|(_, kind, _)| *kind)
            .unwrap_or(MimeKind::Unknown)
    }

    /// Determine the kind of a file name from its last extension.
    ///
    /// Names without a dot, or with a leading or trailing dot, are `Unknown`.
    pub fn from_file_name(name: &str) -> Self {
        if name.starts_with('.') || name.ends_with('.') {
            return MimeKind::Unknown;
        }
        match name.rsplit_once('.') {
            Some((_, extension)) => Self::from_extension(extension),
            None => MimeKind::Unknown,
        }
    }

    /// The `Content-Type` value for this kind.
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPES
            .iter()
            .find(|(_, kind, _)| kind == self)
            .map(|(_, _, content_type)| *content_type)
            .unwrap_or("text/plain")
    }

    /// Whether the body is sent in fixed-size binary chunks rather than lines.
    pub fn is_binary(&self) -> bool {
        matches!(self, MimeKind::Gif | MimeKind::Jpeg | MimeKind::Mp3 | MimeKind::Pdf)
    }

    /// Whether the response names the file in a `Content-Disposition` header.
    pub fn is_inline_attachment(&self) -> bool {
        matches!(self, MimeKind::Pdf | MimeKind::Mp3)
    }
}

impl fmt::Display for MimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content_type())
    }
}
