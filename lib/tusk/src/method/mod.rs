//! Endpoint functions, one group per resource family.
//!
//! Groups borrow the [`MastodonClient`](crate::MastodonClient) they come
//! from and return [`MastodonRequest`](crate::MastodonRequest)s; nothing is
//! sent until a request is executed.
//!
//! Paths are relative to `/api/v1` unless documented otherwise.

/// Declares a method group borrowing a client.
macro_rules! method_group {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<'a, C> {
            client: &'a crate::MastodonClient<C>,
        }

        impl<'a, C> $name<'a, C> {
            pub(crate) fn new(client: &'a crate::MastodonClient<C>) -> Self {
                Self { client }
            }
        }

        impl<C> Clone for $name<'_, C> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<C> Copy for $name<'_, C> {}

        impl<C> std::fmt::Debug for $name<'_, C> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("host", &self.client.config().host())
                    .finish()
            }
        }
    };
}

mod accounts;
mod apps;
mod blocks;
mod favourites;
mod follow_requests;
mod instance;
mod lists;
mod media;
mod notifications;
mod polls;
mod reports;
mod scheduled;
mod search;
mod statuses;
mod timelines;

pub use accounts::{AccountStatusesQuery, Accounts, CredentialsForm};
pub use apps::Apps;
pub use blocks::{Blocks, DomainBlocks, Mutes};
pub use favourites::{Bookmarks, Favourites};
pub use follow_requests::FollowRequests;
pub use instance::Instances;
pub use lists::Lists;
pub use media::{Media, MediaUpload};
pub use notifications::{Notifications, NotificationsQuery};
pub use polls::Polls;
pub use reports::Reports;
pub use scheduled::ScheduledStatuses;
pub use search::{Search, SearchQuery};
pub use statuses::{PollForm, StatusForm, Statuses};
pub use timelines::{PublicTimelineQuery, Timelines};
