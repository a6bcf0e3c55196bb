//! Request/response logging middleware.
//!
//! Events go through the `tracing` facade; installing a subscriber is up to
//! the application.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use bytes::Bytes;
use tower::{Layer, Service};
use tracing::{Instrument, Level, debug, info, span, warn};

use crate::{Error, Request, Response, Result};

const REDACTED: &str = "<redacted>";

/// Layer that logs every call made to the instance.
///
/// # Example
///
/// ```ignore
/// use tusk::HyperClient;
/// use tusk::middleware::LoggingLayer;
///
/// let http = HyperClient::builder()
///     .layer(LoggingLayer::debug())
///     .build();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer {
    level: LogLevel,
}

/// Verbosity of [`LoggingLayer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Method, path and headers (credentials redacted).
    Debug,
    /// Method, path, status and elapsed time.
    #[default]
    Info,
}

impl LoggingLayer {
    /// Info-level logging.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Debug-level logging, including request headers.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }

    /// Configured verbosity.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = Logging<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Logging {
            inner,
            level: self.level,
        }
    }
}

/// Service produced by [`LoggingLayer`].
#[derive(Debug, Clone)]
pub struct Logging<S> {
    inner: S,
    level: LogLevel,
}

/// Request headers safe to print: `Authorization` values are masked.
fn loggable_headers(request: &Request<Bytes>) -> BTreeMap<&str, &str> {
    request
        .headers()
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case("authorization") {
                (name.as_str(), REDACTED)
            } else {
                (name.as_str(), value.as_str())
            }
        })
        .collect()
}

impl<S> Service<Request<Bytes>> for Logging<S>
where
    S: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let method = request.method();
        let host = request.url().host_str().unwrap_or_default().to_string();
        let path = request.url().path().to_string();
        let level = self.level;

        let span = span!(Level::INFO, "mastodon_request", %method, %host, %path);

        let details = (level == LogLevel::Debug).then(|| {
            (
                request.url().query().unwrap_or_default().to_string(),
                format!("{:?}", loggable_headers(&request)),
            )
        });

        let mut inner = self.inner.clone();
        Box::pin(
            async move {
                let start = Instant::now();
                match &details {
                    Some((query, headers)) => debug!(%query, %headers, "sending request"),
                    None => info!("sending request"),
                }

                let result = inner.call(request).await;
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

                match &result {
                    Ok(response) if response.is_success() => {
                        info!(status = response.status(), elapsed_ms, "request completed");
                    }
                    Ok(response) => {
                        warn!(
                            status = response.status(),
                            elapsed_ms,
                            "instance returned an error status"
                        );
                    }
                    Err(err) => {
                        warn!(error = %err, elapsed_ms, "request failed");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    #[test]
    fn logging_layer_default_is_info() {
        assert_eq!(LoggingLayer::new().level(), LogLevel::Info);
    }

    #[test]
    fn logging_layer_debug() {
        assert_eq!(LoggingLayer::debug().level(), LogLevel::Debug);
    }

    #[test]
    fn authorization_header_is_redacted() {
        let url = url::Url::parse("https://mastodon.social/api/v1/timelines/home").expect("url");
        let request = Request::<Bytes>::builder(Method::Get, url)
            .bearer_auth("secret-token")
            .header("Accept", "application/json")
            .build();

        let headers = loggable_headers(&request);

        assert_eq!(headers.get("Authorization"), Some(&REDACTED));
        assert_eq!(headers.get("Accept"), Some(&"application/json"));
        assert!(!format!("{headers:?}").contains("secret-token"));
    }
}
