use serde::{Deserialize, Serialize};

/// A media file attached to a status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AttachmentType,
    /// `None` while a large upload is still being processed.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub remote_url: Option<String>,
    #[serde(default)]
    pub meta: Option<AttachmentMeta>,
    /// Alt text.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub blurhash: Option<String>,
}

/// Kind of [`Attachment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentType {
    Image,
    /// Looping, soundless video.
    Gifv,
    Video,
    Audio,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Dimensions and focal point, computed by the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttachmentMeta {
    #[serde(default)]
    pub original: Option<MediaDimensions>,
    #[serde(default)]
    pub small: Option<MediaDimensions>,
    #[serde(default)]
    pub focus: Option<Focus>,
}

/// Size of one rendition of an attachment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaDimensions {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// `"640x480"`.
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub aspect: Option<f64>,
}

/// Focal point used when cropping thumbnails, each axis in `-1.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Focus {
    pub x: f64,
    pub y: f64,
}
