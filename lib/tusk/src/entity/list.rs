use serde::{Deserialize, Serialize};

/// A user-defined list of followed accounts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MastodonList {
    pub id: String,
    pub title: String,
    /// `followed`, `list` or `none`.
    #[serde(default)]
    pub replies_policy: Option<String>,
}
