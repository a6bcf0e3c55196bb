//! Deferred Mastodon calls.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::{Error, HttpClient, MastodonClient, Request, Response, Result};

/// Turns a successful response into the call's result.
pub type Mapper<T> = fn(Response<Bytes>) -> Result<T>;

/// A prepared call to the instance, not yet performed.
///
/// Building one never touches the network. Each [`execute`](Self::execute)
/// performs the call again; nothing is cached.
pub struct MastodonRequest<C, T> {
    client: MastodonClient<C>,
    request: Request<Bytes>,
    mapper: Mapper<T>,
}

impl<C, T> Clone for MastodonRequest<C, T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            request: self.request.clone(),
            mapper: self.mapper,
        }
    }
}

impl<C, T> std::fmt::Debug for MastodonRequest<C, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MastodonRequest")
            .field("method", &self.request.method())
            .field("url", &self.request.url().as_str())
            .finish_non_exhaustive()
    }
}

impl<C, T> MastodonRequest<C, T> {
    pub(crate) fn new(
        client: MastodonClient<C>,
        request: Request<Bytes>,
        mapper: Mapper<T>,
    ) -> Self {
        Self {
            client,
            request,
            mapper,
        }
    }

    /// The HTTP request that [`execute`](Self::execute) sends.
    #[must_use]
    pub fn request(&self) -> &Request<Bytes> {
        &self.request
    }

    /// Client the request runs against.
    #[must_use]
    pub fn client(&self) -> &MastodonClient<C> {
        &self.client
    }
}

impl<C: HttpClient, T> MastodonRequest<C, T> {
    /// Perform the call and map the response.
    ///
    /// # Errors
    ///
    /// - [`Error::Connection`], [`Error::Tls`] or [`Error::Timeout`] when no
    ///   response arrives
    /// - [`Error::Http`] with status and body for a non-2xx response
    /// - [`Error::JsonDeserialization`] when the body does not match `T`
    pub async fn execute(&self) -> Result<T> {
        debug!(
            method = %self.request.method(),
            path = self.request.url().path(),
            "executing mastodon request"
        );

        let response = self.client.http().execute(self.request.clone()).await?;
        if !response.is_success() {
            warn!(
                status = response.status(),
                path = self.request.url().path(),
                "mastodon request rejected"
            );
        }

        (self.mapper)(response.error_for_status()?)
    }

    /// Perform the call on the current thread, blocking until it completes.
    ///
    /// A private single-threaded runtime drives the call.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute), plus [`Error::InvalidRequest`]
    /// when called from inside an async runtime.
    pub fn execute_blocking(&self) -> Result<T> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(Error::invalid_request(
                "execute_blocking called from within an async runtime, use execute().await",
            ));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::connection(format!("cannot start runtime: {e}")))?;

        runtime.block_on(self.execute())
    }
}
