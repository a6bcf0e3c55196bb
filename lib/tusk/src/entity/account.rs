use serde::{Deserialize, Serialize};

use super::{Emoji, Visibility};

/// A user, local or remote.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    /// Name without the domain.
    pub username: String,
    /// `username` for local accounts, `username@domain` for remote ones.
    pub acct: String,
    #[serde(default)]
    pub display_name: String,
    /// Follow requests must be approved.
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub group: bool,
    #[serde(default)]
    pub discoverable: Option<bool>,
    #[serde(default)]
    pub created_at: String,
    /// Profile bio, as HTML.
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub avatar_static: String,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub header_static: String,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub statuses_count: u64,
    #[serde(default)]
    pub last_status_at: Option<String>,
    #[serde(default)]
    pub emojis: Vec<Emoji>,
    /// Profile metadata table.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Only present on `verify_credentials` and `update_credentials`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Set when the account has moved to another one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved: Option<Box<Account>>,
}

/// One row of the profile metadata table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// HTML.
    pub value: String,
    /// Set when the link in `value` was verified.
    #[serde(default)]
    pub verified_at: Option<String>,
}

/// Plain-text profile and posting defaults of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub privacy: Option<Visibility>,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub follow_requests_count: u64,
}

/// How the authenticated user relates to another account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    pub id: String,
    pub following: bool,
    pub showing_reblogs: bool,
    pub notifying: bool,
    pub followed_by: bool,
    pub blocking: bool,
    pub blocked_by: bool,
    pub muting: bool,
    pub muting_notifications: bool,
    /// A follow request is pending.
    pub requested: bool,
    pub domain_blocking: bool,
    pub endorsed: bool,
    pub note: String,
}
