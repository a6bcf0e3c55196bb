//! Values returned by a Mastodon instance.
//!
//! Entities are plain data: parsed from one response, never mutated by the
//! client. Timestamps are kept as the ISO 8601 strings the server sends.
//! Fields that older or non-Mastodon servers may omit default to empty.
//!
//! Field names match the JSON keys; see the Mastodon API documentation for
//! their meaning.

#![allow(missing_docs)]

mod account;
mod app;
mod attachment;
mod instance;
mod list;
mod notification;
mod poll;
mod report;
mod scheduled;
mod search;
mod status;

pub use account::{Account, Field, Relationship, Source};
pub use app::{AccessToken, AppRegistration, Application};
pub use attachment::{Attachment, AttachmentMeta, AttachmentType, Focus, MediaDimensions};
pub use instance::{Emoji, Instance, InstanceStats, InstanceUrls};
pub use list::MastodonList;
pub use notification::{Notification, NotificationType};
pub use poll::{Poll, PollOption};
pub use report::Report;
pub use scheduled::{ScheduledStatus, ScheduledStatusParams};
pub use search::Results;
pub use status::{Card, Context, History, Mention, Status, Tag, Visibility};

pub use tusk_core::ApiError;
