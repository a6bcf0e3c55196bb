use serde::{Deserialize, Serialize};
use tusk_core::ParameterValue;

use super::{Account, Status};

/// Something that happened to the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub created_at: String,
    /// Who triggered the notification.
    pub account: Account,
    /// Set for `mention`, `status`, `reblog`, `favourite`, `poll` and `update`.
    #[serde(default)]
    pub status: Option<Status>,
}

/// Kind of [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Mention,
    /// A followed account posted.
    Status,
    Reblog,
    Follow,
    FollowRequest,
    Favourite,
    /// A poll the user voted in or created has ended.
    Poll,
    /// A reblogged status was edited.
    Update,
    /// A type this client does not know yet.
    #[serde(other)]
    Unknown,
}

impl NotificationType {
    /// Wire name, as used by the `types[]` and `exclude_types[]` filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mention => "mention",
            Self::Status => "status",
            Self::Reblog => "reblog",
            Self::Follow => "follow",
            Self::FollowRequest => "follow_request",
            Self::Favourite => "favourite",
            Self::Poll => "poll",
            Self::Update => "update",
            Self::Unknown => "unknown",
        }
    }
}

impl ParameterValue for NotificationType {
    fn to_parameter_value(&self) -> String {
        self.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_follow_notification() {
        let json = r#"{
            "id": "34975861",
            "type": "follow",
            "created_at": "2019-11-23T07:49:02.064Z",
            "account": {"id": "971724", "username": "zsc", "acct": "zsc"}
        }"#;

        let notification: Notification = serde_json::from_str(json).expect("notification");

        assert_eq!(notification.kind, NotificationType::Follow);
        assert_eq!(notification.account.acct, "zsc");
        assert!(notification.status.is_none());
    }

    #[test]
    fn unknown_type_does_not_fail() {
        let json = r#"{
            "id": "1",
            "type": "admin.sign_up",
            "created_at": "2022-01-01T00:00:00Z",
            "account": {"id": "2", "username": "new", "acct": "new"}
        }"#;

        let notification: Notification = serde_json::from_str(json).expect("notification");

        assert_eq!(notification.kind, NotificationType::Unknown);
    }

    #[test]
    fn follow_request_wire_name() {
        assert_eq!(NotificationType::FollowRequest.to_parameter_value(), "follow_request");
    }
}
