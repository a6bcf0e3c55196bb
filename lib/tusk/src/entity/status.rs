use serde::{Deserialize, Serialize};
use tusk_core::ParameterValue;

use super::{Account, Application, Attachment, Emoji, Poll};

/// Who can see a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible to everyone, shown in public timelines.
    #[default]
    Public,
    /// Visible to everyone, hidden from public timelines.
    Unlisted,
    /// Followers only.
    Private,
    /// Mentioned users only.
    Direct,
}

impl Visibility {
    /// Wire name of the visibility.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unlisted => "unlisted",
            Self::Private => "private",
            Self::Direct => "direct",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ParameterValue for Visibility {
    fn to_parameter_value(&self) -> String {
        self.as_str().to_string()
    }
}

/// A post, or a reblog of one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub uri: String,
    #[serde(default)]
    pub url: Option<String>,
    pub account: Account,
    #[serde(default)]
    pub in_reply_to_id: Option<String>,
    #[serde(default)]
    pub in_reply_to_account_id: Option<String>,
    /// The original status when this one is a reblog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reblog: Option<Box<Status>>,
    /// HTML.
    #[serde(default)]
    pub content: String,
    pub created_at: String,
    #[serde(default)]
    pub edited_at: Option<String>,
    #[serde(default)]
    pub emojis: Vec<Emoji>,
    #[serde(default)]
    pub replies_count: u64,
    #[serde(default)]
    pub reblogs_count: u64,
    #[serde(default)]
    pub favourites_count: u64,
    /// This and the four flags after it are only sent to authenticated users.
    #[serde(default)]
    pub reblogged: Option<bool>,
    #[serde(default)]
    pub favourited: Option<bool>,
    #[serde(default)]
    pub bookmarked: Option<bool>,
    #[serde(default)]
    pub muted: Option<bool>,
    #[serde(default)]
    pub pinned: Option<bool>,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub spoiler_text: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub media_attachments: Vec<Attachment>,
    #[serde(default)]
    pub mentions: Vec<Mention>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub card: Option<Card>,
    #[serde(default)]
    pub poll: Option<Poll>,
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub language: Option<String>,
}

/// The thread around a status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub ancestors: Vec<Status>,
    #[serde(default)]
    pub descendants: Vec<Status>,
}

/// An account mentioned in a status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Mention {
    pub id: String,
    pub username: String,
    pub acct: String,
    pub url: String,
}

/// A hashtag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tag {
    /// Without the leading `#`.
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub history: Vec<History>,
}

/// Daily usage of a hashtag. Counts are strings on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct History {
    /// UNIX timestamp of the day.
    pub day: String,
    pub uses: String,
    pub accounts: String,
}

/// Preview card of the first link in a status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Card {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// `link`, `photo`, `video` or `rich`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_url: String,
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub provider_url: String,
    /// Embed HTML for `video` and `rich` cards.
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}
