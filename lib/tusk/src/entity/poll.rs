use serde::{Deserialize, Serialize};

use super::Emoji;

/// A poll attached to a status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub expired: bool,
    /// Several choices may be selected.
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub votes_count: u64,
    /// Only counted for `multiple` polls.
    #[serde(default)]
    pub voters_count: Option<u64>,
    #[serde(default)]
    pub voted: Option<bool>,
    /// Indexes into `options` chosen by the user.
    #[serde(default)]
    pub own_votes: Vec<u32>,
    #[serde(default)]
    pub options: Vec<PollOption>,
    #[serde(default)]
    pub emojis: Vec<Emoji>,
}

/// One choice of a [`Poll`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PollOption {
    pub title: String,
    /// Hidden until the poll ends, on some polls.
    #[serde(default)]
    pub votes_count: Option<u64>,
}
