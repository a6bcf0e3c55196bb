use serde::{Deserialize, Serialize};

use super::{Account, Status, Tag};

/// Search results (`GET /api/v2/search`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Results {
    pub accounts: Vec<Account>,
    pub statuses: Vec<Status>,
    pub hashtags: Vec<Tag>,
}

impl Results {
    /// Nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.statuses.is_empty() && self.hashtags.is_empty()
    }
}
