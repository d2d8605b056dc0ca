pub mod html;

pub use html::ParsedPage;

/// Kind of body a server returned, judged from its `Content-Type` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// HTML or XHTML markup
    Html,
    /// Other textual content (plain text, XML, ...). Still parsed as a document.
    Text,
    /// Binary content (PDF, images, archives, ...) that cannot be read as markup
    Binary,
}

impl ContentKind {
    /// Classifies a `Content-Type` header value. A missing header is assumed to be HTML.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let Some(value) = content_type else {
            return ContentKind::Html;
        };

        let mime = value
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime.is_empty() || mime == "text/html" || mime == "application/xhtml+xml" {
            ::log::trace!("Classifying as HTML: {}", value);
            ContentKind::Html
        } else if mime.starts_with("text/") || mime.ends_with("+xml") || mime.ends_with("/xml") {
            ::log::trace!("Classifying as Text: {}", value);
            ContentKind::Text
        } else {
            ::log::debug!("Classifying as Binary: {}", value);
            ContentKind::Binary
        }
    }

    /// Returns if a body of this kind can be parsed into a document
    pub fn is_parseable(&self) -> bool {
        !matches!(self, ContentKind::Binary)
    }
}
