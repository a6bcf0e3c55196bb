use serde::{Deserialize, Serialize};

use super::{Attachment, Visibility};

/// A status that will be posted at `scheduled_at`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduledStatus {
    pub id: String,
    pub scheduled_at: String,
    pub params: ScheduledStatusParams,
    #[serde(default)]
    pub media_attachments: Vec<Attachment>,
}

/// Parameters the status will be posted with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduledStatusParams {
    pub text: String,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub in_reply_to_id: Option<String>,
    #[serde(default)]
    pub media_ids: Option<Vec<String>>,
    #[serde(default)]
    pub sensitive: Option<bool>,
    #[serde(default)]
    pub spoiler_text: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub application_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_scheduled_status() {
        let json = r#"{
            "id": "3221",
            "scheduled_at": "2019-12-05T12:33:01.000Z",
            "params": {
                "poll": null,
                "text": "test content",
                "media_ids": null,
                "sensitive": null,
                "visibility": null,
                "idempotency": null,
                "scheduled_at": null,
                "spoiler_text": null,
                "application_id": 596551,
                "in_reply_to_id": null
            },
            "media_attachments": []
        }"#;

        let scheduled: ScheduledStatus = serde_json::from_str(json).expect("scheduled status");

        assert_eq!(scheduled.params.text, "test content");
        assert_eq!(scheduled.params.application_id, Some(596_551));
        assert!(scheduled.params.visibility.is_none());
    }
}
