//! Client configuration types.
//!
//! - [`MastodonConfig`] - which instance to talk to and with which token
//! - [`ClientConfig`] - transport tuning (timeouts, connection pool)

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

// ============================================================================
// Instance Configuration
// ============================================================================

/// Immutable connection settings for one Mastodon instance.
///
/// Built once, then shared read-only by every request of a
/// [`crate::MastodonClient`].
///
/// # Example
///
/// ```
/// use tusk::MastodonConfig;
///
/// let config = MastodonConfig::builder("mastodon.social")
///     .access_token("token")
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.base_url().as_str(), "https://mastodon.social/");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MastodonConfig {
    base_url: Url,
    access_token: Option<String>,
}

impl std::fmt::Debug for MastodonConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MastodonConfig")
            .field("base_url", &self.base_url.as_str())
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl MastodonConfig {
    /// Create a configuration builder for an instance host name.
    #[must_use]
    pub fn builder(host: impl Into<String>) -> MastodonConfigBuilder {
        MastodonConfigBuilder::new(host)
    }

    /// Create a configuration from a base URL such as `http://localhost:3000`.
    ///
    /// Only scheme, host and port are kept.
    pub fn from_base_url(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)?;
        let host = url
            .host_str()
            .ok_or_else(|| Error::invalid_request(format!("no host in '{base_url}'")))?;

        let mut builder = Self::builder(host).scheme(url.scheme());
        if let Some(port) = url.port() {
            builder = builder.port(port);
        }
        builder.build()
    }

    /// Scheme, host and port as a URL with an empty path.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL scheme (`https` or `http`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.base_url.scheme()
    }

    /// Instance host name.
    #[must_use]
    pub fn host(&self) -> &str {
        self.base_url.host_str().unwrap_or_default()
    }

    /// Port, defaulting to the scheme's well-known port.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.base_url.port_or_known_default()
    }

    /// Bearer token attached to every request, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Same instance, different token.
    #[must_use]
    pub fn with_access_token(&self, access_token: impl Into<String>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            access_token: Some(access_token.into()),
        }
    }
}

/// Builder for [`MastodonConfig`].
#[derive(Debug, Clone)]
pub struct MastodonConfigBuilder {
    host: String,
    scheme: String,
    port: Option<u16>,
    access_token: Option<String>,
}

impl MastodonConfigBuilder {
    fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            scheme: "https".to_string(),
            port: None,
            access_token: None,
        }
    }

    /// Set the URL scheme (default `https`).
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Set a non-default port.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the bearer token.
    #[must_use]
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Fails if the scheme is not `http`/`https` or the host does not form a valid URL.
    pub fn build(self) -> Result<MastodonConfig> {
        let scheme = self.scheme.to_ascii_lowercase();
        if scheme != "https" && scheme != "http" {
            return Err(Error::invalid_request(format!(
                "unsupported scheme '{}'",
                self.scheme
            )));
        }

        let mut base_url = Url::parse(&format!("{scheme}://{}/", self.host))?;
        if base_url.host_str().is_none_or(str::is_empty)
            || base_url.path() != "/"
            || base_url.query().is_some()
            || base_url.fragment().is_some()
            || !base_url.username().is_empty()
            || base_url.password().is_some()
        {
            return Err(Error::invalid_request(format!(
                "invalid host '{}'",
                self.host
            )));
        }
        if let Some(port) = self.port {
            base_url
                .set_port(Some(port))
                .map_err(|()| Error::invalid_request(format!("invalid port {port}")))?;
        }

        Ok(MastodonConfig {
            base_url,
            access_token: self.access_token,
        })
    }
}

// ============================================================================
// Transport Configuration
// ============================================================================

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout duration.
    pub timeout: Duration,
    /// Connection timeout duration.
    pub connect_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_idle_per_host: usize,
    /// Idle connection timeout.
    pub pool_idle_timeout: Duration,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 8,
            pool_idle_timeout: Duration::from_secs(90),
            user_agent: concat!("tusk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pool_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.pool_idle_per_host = Some(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            pool_idle_per_host: self
                .pool_idle_per_host
                .unwrap_or(defaults.pool_idle_per_host),
            pool_idle_timeout: self.pool_idle_timeout.unwrap_or(defaults.pool_idle_timeout),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mastodon_config_defaults_to_https() {
        let config = MastodonConfig::builder("mastodon.social")
            .build()
            .expect("config");

        assert_eq!(config.scheme(), "https");
        assert_eq!(config.host(), "mastodon.social");
        assert_eq!(config.port(), Some(443));
        assert!(config.access_token().is_none());
    }

    #[test]
    fn mastodon_config_with_port_and_scheme() {
        let config = MastodonConfig::builder("localhost")
            .scheme("http")
            .port(3000)
            .access_token("abc")
            .build()
            .expect("config");

        assert_eq!(config.base_url().as_str(), "http://localhost:3000/");
        assert_eq!(config.access_token(), Some("abc"));
    }

    #[test]
    fn mastodon_config_rejects_bad_scheme() {
        let err = MastodonConfig::builder("mastodon.social")
            .scheme("ftp")
            .build()
            .expect_err("ftp is rejected");
        assert!(err.is_invalid_request());
    }

    #[test]
    fn mastodon_config_rejects_host_with_path() {
        let result = MastodonConfig::builder("mastodon.social/api").build();
        assert!(result.is_err());
    }

    #[test]
    fn mastodon_config_rejects_host_with_query_or_userinfo() {
        for host in ["a?x", "mastodon.social#top", "user@mastodon.social", "u:p@mastodon.social"] {
            let err = MastodonConfig::builder(host)
                .build()
                .expect_err("host must be a bare name");
            assert!(err.is_invalid_request(), "{host}: {err}");
        }
    }

    #[test]
    fn mastodon_config_from_base_url() {
        let config = MastodonConfig::from_base_url("http://127.0.0.1:8080").expect("config");

        assert_eq!(config.scheme(), "http");
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), Some(8080));
    }

    #[test]
    fn mastodon_config_debug_redacts_token() {
        let config = MastodonConfig::builder("mastodon.social")
            .access_token("super-secret")
            .build()
            .expect("config");

        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn client_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("tusk/"));
    }

    #[test]
    fn client_config_builder_overrides() {
        let config = ClientConfig::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .pool_idle_per_host(2)
            .user_agent("my-bot/1.0")
            .build();

        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.pool_idle_per_host, 2);
        assert_eq!(config.user_agent, "my-bot/1.0");
    }
}
