use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::FutureExt;
use futures_util::future::{self, BoxFuture};

use crate::{Error, HttpClient, MastodonRequest, Result};

/// One value or one error, produced when first polled.
///
/// Nothing is sent until the `Single` is awaited or subscribed to; dropping
/// it unpolled performs no I/O.
#[must_use = "a Single does nothing unless awaited or subscribed"]
pub struct Single<T> {
    future: BoxFuture<'static, Result<T>>,
}

impl<T> std::fmt::Debug for Single<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Single").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Single<T> {
    /// Run `request` once when polled.
    pub fn from_request<C>(request: MastodonRequest<C, T>) -> Self
    where
        C: HttpClient + 'static,
    {
        Self {
            future: async move { request.execute().await }.boxed(),
        }
    }

    /// Forward a client-side precondition failure to the error channel.
    pub fn from_result<C>(request: Result<MastodonRequest<C, T>>) -> Self
    where
        C: HttpClient + 'static,
    {
        match request {
            Ok(request) => Self::from_request(request),
            Err(error) => Self::error(error),
        }
    }

    /// A `Single` that fails with `error`.
    pub fn error(error: Error) -> Self {
        Self {
            future: future::ready(Err(error)).boxed(),
        }
    }

    /// Transform the value, errors pass through unchanged.
    pub fn map<U, F>(self, f: F) -> Single<U>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        Single {
            future: self.future.map(|result| result.map(f)).boxed(),
        }
    }

    /// Run to completion, handing the outcome to exactly one callback.
    pub async fn subscribe<S, E>(self, on_success: S, on_error: E)
    where
        S: FnOnce(T),
        E: FnOnce(Error),
    {
        match self.await {
            Ok(value) => on_success(value),
            Err(error) => on_error(error),
        }
    }
}

impl<T> Future for Single<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.poll_unpin(cx)
    }
}

/// Completion without a value, for calls whose response body is ignored.
#[must_use = "a Completable does nothing unless awaited or subscribed"]
#[derive(Debug)]
pub struct Completable {
    inner: Single<()>,
}

impl Completable {
    /// Run `request` once when polled, discarding its value.
    pub fn from_request<C, T>(request: MastodonRequest<C, T>) -> Self
    where
        C: HttpClient + 'static,
        T: Send + 'static,
    {
        Self {
            inner: Single::from_request(request).map(drop),
        }
    }

    /// A `Completable` that fails with `error`.
    pub fn error(error: Error) -> Self {
        Self {
            inner: Single::error(error),
        }
    }

    /// Run to completion, then call `on_complete` or `on_error`.
    pub async fn subscribe<S, E>(self, on_complete: S, on_error: E)
    where
        S: FnOnce(),
        E: FnOnce(Error),
    {
        self.inner.subscribe(|()| on_complete(), on_error).await;
    }
}

impl Future for Completable {
    type Output = Result<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner).poll(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn error_is_forwarded_unchanged() {
        let single: Single<u32> = Single::error(Error::invalid_request("nope"));

        let err = single.await.expect_err("error");
        assert!(err.is_invalid_request());
        assert_eq!(err.to_string(), "invalid request: nope");
    }

    #[tokio::test]
    async fn map_transforms_value() {
        let single = Single {
            future: future::ready(Ok(20_u32)).boxed(),
        }
        .map(|n| n + 1);

        assert_eq!(single.await.expect("value"), 21);
    }

    #[tokio::test]
    async fn subscribe_calls_one_callback() {
        let mut seen = None;
        Single::<u32>::error(Error::Timeout)
            .subscribe(|_| panic!("no value expected"), |e| seen = Some(e.is_timeout()))
            .await;

        assert_eq!(seen, Some(true));
    }

    #[tokio::test]
    async fn completable_error() {
        let mut failed = false;
        Completable::error(Error::connection("reset"))
            .subscribe(|| {}, |_| failed = true)
            .await;

        assert!(failed);
    }
}
