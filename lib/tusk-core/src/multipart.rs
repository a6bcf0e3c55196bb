//! Multipart form data for media uploads.
//!
//! Mastodon receives attachments as `multipart/form-data` with a single file
//! part named `file`, optionally accompanied by text parts such as
//! `description` or `focus`.
//!
//! # Example
//!
//! ```
//! use tusk_core::Form;
//!
//! let form = Form::new()
//!     .file("file", "sunset.jpg", vec![0xFF, 0xD8, 0xFF])
//!     .text("description", "A sunset over the sea");
//!
//! let (content_type, body) = form.into_body();
//! assert!(content_type.starts_with("multipart/form-data; boundary="));
//! assert!(!body.is_empty());
//! ```

use bytes::{BufMut, Bytes, BytesMut};

/// A single part in a multipart form.
#[derive(Debug, Clone)]
pub struct Part {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

impl Part {
    /// Create a text part.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            content_type: None,
            data: Bytes::from(value.into()),
        }
    }

    /// Create a file part.
    ///
    /// The content type is guessed from the filename extension, or defaults
    /// to `application/octet-stream` if unknown.
    #[must_use]
    pub fn file(
        name: impl Into<String>,
        filename: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        let filename = filename.into();
        let content_type = guess_content_type(&filename).to_string();
        Self {
            name: name.into(),
            filename: Some(filename),
            content_type: Some(content_type),
            data: data.into(),
        }
    }

    /// Override the content type of this part.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Part name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filename, for file parts.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Content type, if set.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Part data.
    #[must_use]
    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

/// Guess a media content type from a filename extension.
fn guess_content_type(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "heic" => "image/heic",
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "ogg" | "oga" => "audio/ogg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        _ => "application/octet-stream",
    }
}

/// A multipart form containing multiple parts.
#[derive(Debug, Clone)]
pub struct Form {
    parts: Vec<Part>,
    boundary: String,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Create a new empty form with a generated boundary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_boundary(generate_boundary())
    }

    /// Create a new form with a fixed boundary.
    #[must_use]
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            parts: Vec::new(),
            boundary: boundary.into(),
        }
    }

    /// Add a part to the form.
    #[must_use]
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Add a text field to the form.
    #[must_use]
    pub fn text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.part(Part::text(name, value))
    }

    /// Add a file to the form.
    #[must_use]
    pub fn file(
        self,
        name: impl Into<String>,
        filename: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        self.part(Part::file(name, filename, data))
    }

    /// Boundary string.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Parts in this form.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// `Content-Type` header value: `multipart/form-data; boundary=<boundary>`.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Consume into (content-type header value, body bytes).
    #[must_use]
    pub fn into_body(self) -> (String, Bytes) {
        let content_type = self.content_type();
        (content_type, self.encode())
    }

    fn encode(&self) -> Bytes {
        let mut buf = BytesMut::new();

        for part in &self.parts {
            buf.put_slice(b"--");
            buf.put_slice(self.boundary.as_bytes());
            buf.put_slice(b"\r\n");

            buf.put_slice(b"Content-Disposition: form-data; name=\"");
            buf.put_slice(escape_quoted(&part.name).as_bytes());
            buf.put_slice(b"\"");
            if let Some(filename) = &part.filename {
                buf.put_slice(b"; filename=\"");
                buf.put_slice(escape_quoted(filename).as_bytes());
                buf.put_slice(b"\"");
            }
            buf.put_slice(b"\r\n");

            if let Some(content_type) = &part.content_type {
                buf.put_slice(b"Content-Type: ");
                buf.put_slice(content_type.as_bytes());
                buf.put_slice(b"\r\n");
            }

            buf.put_slice(b"\r\n");
            buf.put_slice(&part.data);
            buf.put_slice(b"\r\n");
        }

        buf.put_slice(b"--");
        buf.put_slice(self.boundary.as_bytes());
        buf.put_slice(b"--\r\n");

        buf.freeze()
    }
}

/// Quotes and line breaks would end the header parameter early.
fn escape_quoted(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn generate_boundary() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    format!("----TuskBoundary{timestamp:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_text() {
        let part = Part::text("description", "A cat");
        assert_eq!(part.name(), "description");
        assert_eq!(part.data().as_ref(), b"A cat");
        assert!(part.content_type().is_none());
        assert!(part.filename().is_none());
    }

    #[test]
    fn part_file() {
        let part = Part::file("file", "cat.JPG", vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(part.name(), "file");
        assert_eq!(part.filename(), Some("cat.JPG"));
        assert_eq!(part.content_type(), Some("image/jpeg"));

        let part = part.with_content_type("image/x-custom");
        assert_eq!(part.content_type(), Some("image/x-custom"));
    }

    #[test]
    fn guess_media_types() {
        assert_eq!(guess_content_type("clip.mp4"), "video/mp4");
        assert_eq!(guess_content_type("voice.ogg"), "audio/ogg");
        assert_eq!(guess_content_type("anim.gif"), "image/gif");
        assert_eq!(guess_content_type("noextension"), "application/octet-stream");
        assert_eq!(guess_content_type("archive.tar.xz"), "application/octet-stream");
    }

    #[test]
    fn form_default_boundary() {
        let form = Form::new();
        assert!(form.parts().is_empty());
        assert!(form.boundary().starts_with("----TuskBoundary"));
    }

    #[test]
    fn form_encode_media_upload() {
        let form = Form::with_boundary("XyZ")
            .file("file", "cat.png", "png-bytes")
            .text("description", "A cat");

        let (content_type, body) = form.into_body();
        let body = String::from_utf8_lossy(&body);

        assert_eq!(content_type, "multipart/form-data; boundary=XyZ");
        assert!(body.starts_with("--XyZ\r\n"));
        assert!(body.contains(
            "Content-Disposition: form-data; name=\"file\"; filename=\"cat.png\"\r\nContent-Type: image/png\r\n\r\npng-bytes\r\n"
        ));
        assert!(body.contains(
            "Content-Disposition: form-data; name=\"description\"\r\n\r\nA cat\r\n"
        ));
        assert!(body.ends_with("--XyZ--\r\n"));
    }

    #[test]
    fn form_escapes_filename_quotes() {
        let form = Form::with_boundary("b").file("file", "a\"b.png", "x");

        let (_, body) = form.into_body();
        let body = String::from_utf8_lossy(&body);

        assert!(body.contains("filename=\"a%22b.png\""));
    }
}
