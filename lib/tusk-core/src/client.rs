//! HTTP transport trait.
//!
//! [`HttpClient`] is the seam between the Mastodon plumbing and the network:
//! the `tusk` crate ships a hyper-based implementation, tests plug in
//! in-memory ones.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
///
/// Implementations return any response they receive, whatever its status;
/// mapping non-2xx statuses to errors is the caller's job.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

impl<C: HttpClient> HttpClient for Arc<C> {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        self.as_ref().execute(request)
    }
}
