use serde::{Deserialize, Serialize};

use super::Account;

/// Public metadata of the instance (`GET /api/v1/instance`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Instance {
    /// Domain name.
    pub uri: String,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    /// HTML.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: String,
    /// Mastodon version the server runs.
    pub version: String,
    #[serde(default)]
    pub urls: InstanceUrls,
    #[serde(default)]
    pub stats: InstanceStats,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// ISO 639 codes.
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub registrations: bool,
    #[serde(default)]
    pub approval_required: bool,
    #[serde(default)]
    pub contact_account: Option<Account>,
}

/// URLs of the instance's other services.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InstanceUrls {
    /// Websocket endpoint for the streaming API.
    #[serde(default)]
    pub streaming_api: String,
}

/// Usage counters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceStats {
    pub user_count: u64,
    pub status_count: u64,
    /// Known federated domains.
    pub domain_count: u64,
}

/// A custom emoji.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Emoji {
    /// Name between the colons.
    pub shortcode: String,
    pub url: String,
    pub static_url: String,
    #[serde(default)]
    pub visible_in_picker: bool,
    #[serde(default)]
    pub category: Option<String>,
}
