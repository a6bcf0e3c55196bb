//! Typed async client for the Mastodon REST API.
//!
//! Every endpoint function builds a [`MastodonRequest`]: a description of
//! the call that performs no I/O until [`execute`](MastodonRequest::execute)
//! (or [`execute_blocking`](MastodonRequest::execute_blocking)) runs it.
//! Collection endpoints return a [`Pageable`] whose `next`/`prev` cursors come
//! from the `Link` header.
//!
//! # Example
//!
//! ```ignore
//! use tusk::prelude::*;
//!
//! let config = MastodonConfig::builder("mastodon.social")
//!     .access_token(token)
//!     .build()?;
//! let client = MastodonClient::new(config);
//!
//! let page = client.timelines().home(&Range::new()).execute().await?;
//! if let Some(next) = page.next() {
//!     let older = client.timelines().home(next).execute().await?;
//! }
//!
//! match client.statuses().reblog("1", Visibility::Direct) {
//!     Err(e) if e.is_invalid_request() => { /* rejected before sending */ }
//!     other => { other?.execute().await?; }
//! }
//! ```

mod client;
mod config;
mod connector;
pub mod entity;
pub mod mapper;
mod mastodon;
pub mod method;
pub mod middleware;
pub mod oauth;
pub mod prelude;
mod request;
pub mod rx;

pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder, MastodonConfig, MastodonConfigBuilder};
pub use connector::https_connector;
pub use mastodon::MastodonClient;
pub use request::{Mapper, MastodonRequest};

// Re-export tower for middleware composition
pub use tower;

pub use tusk_core::{
    ApiError, ContentType, Error, Form, HttpClient, LinkHeader, Method, Pageable, ParameterValue,
    Parameters, Part, Range, Request, RequestBuilder, Response, Result, ToParameters, from_json,
    parse_link_header,
};

pub use tusk_core::{StatusCode, header};

pub use url;
