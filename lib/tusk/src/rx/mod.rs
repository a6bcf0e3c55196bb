//! Reactive-style adapters over the method groups.
//!
//! Every call returns a [`Single`] or a [`Completable`] that owns a clone of
//! the client, so it can be stored, moved to another task, or consumed
//! through callbacks with `subscribe`. Execution is still driven by the
//! caller's runtime; the library spawns nothing.
//!
//! ```ignore
//! use tusk::rx::RxStatuses;
//!
//! RxStatuses::new(client.clone())
//!     .favourite("103270115826048975")
//!     .subscribe(|status| println!("{} favourites", status.favourites_count),
//!                |error| eprintln!("{error}"))
//!     .await;
//! ```
//!
//! Adapter methods carry the same names and arguments as the method group
//! functions they wrap.

/// Declares an adapter owning a client clone.
macro_rules! rx_group {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<C = crate::HyperClient> {
            client: crate::MastodonClient<C>,
        }

        impl<C> $name<C> {
            /// Adapter over `client`.
            #[must_use]
            pub fn new(client: crate::MastodonClient<C>) -> Self {
                Self { client }
            }
        }

        impl<C> Clone for $name<C> {
            fn clone(&self) -> Self {
                Self::new(self.client.clone())
            }
        }

        impl<C> std::fmt::Debug for $name<C> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("client", &self.client)
                    .finish()
            }
        }

        impl<C> From<crate::MastodonClient<C>> for $name<C> {
            fn from(client: crate::MastodonClient<C>) -> Self {
                Self::new(client)
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
mod single;
mod statuses;
mod timelines;

pub use accounts::RxAccounts;
pub use apps::RxApps;
pub use blocks::{RxBlocks, RxDomainBlocks, RxMutes};
pub use favourites::{RxBookmarks, RxFavourites};
pub use follow_requests::RxFollowRequests;
pub use instance::RxInstance;
pub use lists::RxLists;
pub use media::RxMedia;
pub use notifications::RxNotifications;
pub use polls::RxPolls;
pub use reports::RxReports;
pub use scheduled::RxScheduledStatuses;
pub use search::RxSearch;
pub use single::{Completable, Single};
pub use statuses::RxStatuses;
pub use timelines::RxTimelines;
