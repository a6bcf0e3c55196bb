//! Core types for the tusk Mastodon client.
//!
//! This crate holds the transport-independent plumbing:
//! - [`Method`] - HTTP method enum
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`Response`] - HTTP response type
//! - [`Error`] and [`Result`] - Error handling, [`ApiError`] server error body
//! - [`HttpClient`] - Transport trait
//! - [`Parameters`] and [`ToParameters`] - Ordered request parameters
//! - [`Range`] - Pagination bounds
//! - [`Pageable`] - One page of a collection with its cursors
//! - [`parse_link_header`] - `Link` header parsing
//! - [`Form`] and [`Part`] - Multipart bodies for media upload

mod body;
mod client;
mod error;
mod link;
mod method;
mod multipart;
mod pageable;
mod parameters;
pub mod prelude;
mod range;
mod request;
mod response;

pub use body::{ContentType, from_json};
pub use client::HttpClient;
pub use error::{ApiError, Error, Result};
pub use link::{LinkHeader, parse_link_header};
pub use method::Method;
pub use multipart::{Form, Part};
pub use pageable::Pageable;
pub use parameters::{ParameterValue, Parameters, ToParameters};
pub use range::Range;
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
