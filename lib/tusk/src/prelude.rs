//! Prelude module for convenient imports.
//!
//! ```ignore
//! use tusk::prelude::*;
//! ```

pub use crate::entity::{Account, Notification, Status, Visibility};
pub use crate::oauth::{OOB_REDIRECT_URI, Scope, ScopeName};
pub use crate::{
    Error, HttpClient, HyperClient, MastodonClient, MastodonConfig, MastodonRequest, Pageable,
    Range, Result,
};
