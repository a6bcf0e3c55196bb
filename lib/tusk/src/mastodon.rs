//! The Mastodon client: instance configuration plus a transport.

use std::sync::Arc;

use bytes::Bytes;
use url::Url;

use crate::method::{
    Accounts, Apps, Blocks, Bookmarks, DomainBlocks, Favourites, FollowRequests, Instances, Lists,
    Media, Mutes, Notifications, Polls, Reports, ScheduledStatuses, Search, Statuses, Timelines,
};
use crate::request::{MastodonRequest, Mapper};
use crate::{Form, HyperClient, MastodonConfig, Method, Parameters, Request, RequestBuilder};

/// Client for one Mastodon instance.
///
/// Cloning is cheap: the configuration and the transport are shared. Every
/// endpoint function returns a [`MastodonRequest`] that does nothing until
/// executed.
///
/// # Example
///
/// ```ignore
/// use tusk::{MastodonClient, MastodonConfig, Range};
///
/// let config = MastodonConfig::builder("mastodon.social")
///     .access_token(token)
///     .build()?;
/// let client = MastodonClient::new(config);
///
/// let page = client.timelines().home(Range::new().with_limit(20)).execute().await?;
/// for status in &page {
///     println!("{}: {}", status.account.acct, status.content);
/// }
/// ```
pub struct MastodonClient<C = HyperClient> {
    inner: Arc<Inner<C>>,
}

struct Inner<C> {
    config: MastodonConfig,
    http: C,
}

impl<C> Clone for MastodonClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> std::fmt::Debug for MastodonClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MastodonClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl MastodonClient<HyperClient> {
    /// Client over the default hyper transport, with info-level logging.
    #[must_use]
    pub fn new(config: MastodonConfig) -> Self {
        Self::with_http(config, HyperClient::builder().with_logging().build())
    }
}

impl<C> MastodonClient<C> {
    /// Client over a custom transport.
    #[must_use]
    pub fn with_http(config: MastodonConfig, http: C) -> Self {
        Self {
            inner: Arc::new(Inner { config, http }),
        }
    }

    /// Instance configuration.
    #[must_use]
    pub fn config(&self) -> &MastodonConfig {
        &self.inner.config
    }

    /// Underlying transport.
    #[must_use]
    pub fn http(&self) -> &C {
        &self.inner.http
    }

    /// Absolute URL for a path below the instance root.
    ///
    /// Segments are percent-encoded, so identifiers never escape their segment.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.inner.config.base_url().clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) fn v1(&self, segments: &[&str]) -> Url {
        self.versioned("v1", segments)
    }

    pub(crate) fn v2(&self, segments: &[&str]) -> Url {
        self.versioned("v2", segments)
    }

    fn versioned(&self, version: &str, segments: &[&str]) -> Url {
        let mut url = self.endpoint(&["api", version]);
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url
    }

    fn authorized(&self, method: Method, url: Url) -> RequestBuilder<Bytes> {
        let builder = Request::<Bytes>::builder(method, url);
        match self.inner.config.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Describe a call without performing it.
    ///
    /// `GET` and `DELETE` carry `parameters` in the query string, other
    /// methods as a form body (omitted when empty).
    #[must_use]
    pub fn prepare<T>(
        &self,
        method: Method,
        url: Url,
        parameters: &Parameters,
        mapper: Mapper<T>,
    ) -> MastodonRequest<C, T> {
        let builder = self.authorized(method, url);
        let builder = if method.uses_query() {
            builder.parameters(parameters)
        } else if parameters.is_empty() {
            builder
        } else {
            builder.form(parameters)
        };

        MastodonRequest::new(self.clone(), builder.build(), mapper)
    }

    /// Describe a `multipart/form-data` `POST`.
    #[must_use]
    pub fn prepare_multipart<T>(
        &self,
        url: Url,
        form: Form,
        mapper: Mapper<T>,
    ) -> MastodonRequest<C, T> {
        let request = self.authorized(Method::Post, url).multipart(form).build();
        MastodonRequest::new(self.clone(), request, mapper)
    }

    /// Application registration and OAuth token exchange.
    #[must_use]
    pub fn apps(&self) -> Apps<'_, C> {
        Apps::new(self)
    }

    /// Accounts, relationships and account actions.
    #[must_use]
    pub fn accounts(&self) -> Accounts<'_, C> {
        Accounts::new(self)
    }

    /// Accounts blocked by the user.
    #[must_use]
    pub fn blocks(&self) -> Blocks<'_, C> {
        Blocks::new(self)
    }

    /// Accounts muted by the user.
    #[must_use]
    pub fn mutes(&self) -> Mutes<'_, C> {
        Mutes::new(self)
    }

    /// Statuses favourited by the user.
    #[must_use]
    pub fn favourites(&self) -> Favourites<'_, C> {
        Favourites::new(self)
    }

    /// Statuses bookmarked by the user.
    #[must_use]
    pub fn bookmarks(&self) -> Bookmarks<'_, C> {
        Bookmarks::new(self)
    }

    /// Pending follow requests.
    #[must_use]
    pub fn follow_requests(&self) -> FollowRequests<'_, C> {
        FollowRequests::new(self)
    }

    /// Domains hidden by the user.
    #[must_use]
    pub fn domain_blocks(&self) -> DomainBlocks<'_, C> {
        DomainBlocks::new(self)
    }

    /// Posting, reading and acting on statuses.
    #[must_use]
    pub fn statuses(&self) -> Statuses<'_, C> {
        Statuses::new(self)
    }

    /// Home, public, hashtag and list timelines.
    #[must_use]
    pub fn timelines(&self) -> Timelines<'_, C> {
        Timelines::new(self)
    }

    /// Notifications.
    #[must_use]
    pub fn notifications(&self) -> Notifications<'_, C> {
        Notifications::new(self)
    }

    /// Media upload.
    #[must_use]
    pub fn media(&self) -> Media<'_, C> {
        Media::new(self)
    }

    /// User lists.
    #[must_use]
    pub fn lists(&self) -> Lists<'_, C> {
        Lists::new(self)
    }

    /// Polls.
    #[must_use]
    pub fn polls(&self) -> Polls<'_, C> {
        Polls::new(self)
    }

    /// Reports.
    #[must_use]
    pub fn reports(&self) -> Reports<'_, C> {
        Reports::new(self)
    }

    /// Search.
    #[must_use]
    pub fn search(&self) -> Search<'_, C> {
        Search::new(self)
    }

    /// Instance metadata.
    #[must_use]
    pub fn instance(&self) -> Instances<'_, C> {
        Instances::new(self)
    }

    /// Statuses scheduled for later.
    #[must_use]
    pub fn scheduled_statuses(&self) -> ScheduledStatuses<'_, C> {
        ScheduledStatuses::new(self)
    }
}

impl<C: Clone> MastodonClient<C> {
    /// Same instance and transport, different access token.
    ///
    /// Used after an OAuth exchange to switch from the app to the user.
    #[must_use]
    pub fn with_access_token(&self, access_token: impl Into<String>) -> Self {
        Self::with_http(
            self.inner.config.with_access_token(access_token),
            self.inner.http.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::map_empty;

    fn client(token: Option<&str>) -> MastodonClient<()> {
        let mut builder = MastodonConfig::builder("mastodon.example");
        if let Some(token) = token {
            builder = builder.access_token(token);
        }
        MastodonClient::with_http(builder.build().expect("config"), ())
    }

    #[test]
    fn endpoint_urls() {
        let client = client(None);

        assert_eq!(
            client.v1(&["statuses", "42", "reblog"]).as_str(),
            "https://mastodon.example/api/v1/statuses/42/reblog"
        );
        assert_eq!(
            client.v2(&["media"]).as_str(),
            "https://mastodon.example/api/v2/media"
        );
        assert_eq!(
            client.endpoint(&["oauth", "token"]).as_str(),
            "https://mastodon.example/oauth/token"
        );
    }

    #[test]
    fn endpoint_segments_are_escaped() {
        let client = client(None);
        let url = client.v1(&["accounts", "../admin"]);
        assert_eq!(url.path(), "/api/v1/accounts/..%2Fadmin");
    }

    #[test]
    fn get_parameters_go_to_query() {
        let client = client(None);
        let params = Parameters::new().append("local", true);

        let request = client.prepare(
            Method::Get,
            client.v1(&["timelines", "public"]),
            &params,
            map_empty,
        );

        assert_eq!(request.request().url().query(), Some("local=true"));
        assert!(request.request().body().is_none());
    }

    #[test]
    fn post_parameters_go_to_form_body() {
        let client = client(None);
        let params = Parameters::new().append("status", "hello world");

        let request = client.prepare(Method::Post, client.v1(&["statuses"]), &params, map_empty);

        assert!(request.request().url().query().is_none());
        assert_eq!(
            request.request().body().map(|b| b.as_ref()),
            Some(b"status=hello+world".as_slice())
        );
        assert_eq!(
            request.request().header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn post_without_parameters_has_no_body() {
        let client = client(None);

        let request = client.prepare(
            Method::Post,
            client.v1(&["statuses", "1", "favourite"]),
            &Parameters::new(),
            map_empty,
        );

        assert!(request.request().body().is_none());
    }

    #[test]
    fn bearer_token_attached_only_when_configured() {
        let anonymous = client(None);
        let request = anonymous.prepare(
            Method::Get,
            anonymous.v1(&["instance"]),
            &Parameters::new(),
            map_empty,
        );
        assert!(request.request().header("authorization").is_none());

        let authorized = client(Some("t0ken"));
        let request = authorized.prepare(
            Method::Get,
            authorized.v1(&["instance"]),
            &Parameters::new(),
            map_empty,
        );
        assert_eq!(request.request().header("authorization"), Some("Bearer t0ken"));
    }

    #[test]
    fn with_access_token_keeps_instance() {
        let client = client(None).with_access_token("user-token");

        assert_eq!(client.config().host(), "mastodon.example");
        assert_eq!(client.config().access_token(), Some("user-token"));
    }
}
