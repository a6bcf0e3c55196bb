use serde::{Deserialize, Serialize};

use super::Account;

/// A report filed against an account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    #[serde(default)]
    pub action_taken: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// `spam`, `violation` or `other`.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status_ids: Vec<String>,
    #[serde(default)]
    pub target_account: Option<Account>,
}
