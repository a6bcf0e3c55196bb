//! HTTP methods used by the Mastodon REST API.

use derive_more::Display;

/// HTTP request method.
///
/// Mastodon endpoints only use these five verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// Read a resource or a page of resources.
    #[display("GET")]
    Get,
    /// Create a resource or trigger an action (follow, reblog, ...).
    #[display("POST")]
    Post,
    /// Replace a resource (media description, list title).
    #[display("PUT")]
    Put,
    /// Remove a resource.
    #[display("DELETE")]
    Delete,
    /// Partially update a resource (account credentials).
    #[display("PATCH")]
    Patch,
}

impl Method {
    /// Returns `true` if parameters travel in the query string rather than the body.
    #[must_use]
    pub const fn uses_query(&self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
            Method::Patch => Self::PATCH,
        }
    }
}

impl TryFrom<http::Method> for Method {
    type Error = crate::Error;

    fn try_from(method: http::Method) -> Result<Self, Self::Error> {
        match method {
            http::Method::GET => Ok(Self::Get),
            http::Method::POST => Ok(Self::Post),
            http::Method::PUT => Ok(Self::Put),
            http::Method::DELETE => Ok(Self::Delete),
            http::Method::PATCH => Ok(Self::Patch),
            other => Err(crate::Error::InvalidRequest(format!(
                "unsupported HTTP method: {other}"
            ))),
        }
    }
}
