//! OAuth scopes and the authorization URL.
//!
//! The flow for a new user:
//! 1. register the application with [`Apps::create_app`](crate::method::Apps::create_app)
//! 2. send the user to [`oauth_url`]
//! 3. exchange the code they paste back with
//!    [`Apps::access_token`](crate::method::Apps::access_token)

use tusk_core::ParameterValue;
use url::Url;

use crate::MastodonConfig;

/// Redirect URI that shows the authorization code to the user instead of
/// redirecting, for applications without a web callback.
pub const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

/// One OAuth scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeName {
    /// Read access.
    Read,
    /// Write access.
    Write,
    /// Manage follows, blocks and mutes.
    Follow,
    /// Shorthand for `read write follow`.
    All,
}

impl ScopeName {
    const fn expand(self) -> &'static [&'static str] {
        match self {
            Self::Read => &["read"],
            Self::Write => &["write"],
            Self::Follow => &["follow"],
            Self::All => &["read", "write", "follow"],
        }
    }
}

/// A set of scopes, rendered space separated.
///
/// ```
/// use tusk::oauth::{Scope, ScopeName};
///
/// let scope = Scope::new([ScopeName::Read, ScopeName::All]);
/// assert_eq!(scope.to_string(), "read write follow");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    names: Vec<ScopeName>,
}

impl Scope {
    /// Scope made of `names`.
    pub fn new(names: impl IntoIterator<Item = ScopeName>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// `read write follow`.
    #[must_use]
    pub fn all() -> Self {
        Self::from(ScopeName::All)
    }

    /// Scope names, without duplicates, in first-seen order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for &name in self.names.iter().flat_map(|n| n.expand()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::from(ScopeName::Read)
    }
}

impl From<ScopeName> for Scope {
    fn from(name: ScopeName) -> Self {
        Self { names: vec![name] }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.names().join(" "))
    }
}

impl ParameterValue for Scope {
    fn to_parameter_value(&self) -> String {
        self.to_string()
    }
}

/// URL of the page where the user authorizes the application.
///
/// No network call is made.
#[must_use]
pub fn oauth_url(
    config: &MastodonConfig,
    client_id: &str,
    scope: &Scope,
    redirect_uri: &str,
) -> Url {
    let mut url = config.base_url().clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(["oauth", "authorize"]);
    }
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("scope", &scope.to_string());
    url
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    fn config() -> MastodonConfig {
        MastodonConfig::builder("mastodon.example")
            .build()
            .expect("config")
    }

    #[test]
    fn all_expands_to_three_scopes() {
        check!(Scope::all().to_string() == "read write follow");
    }

    #[test]
    fn duplicates_are_removed_in_order() {
        let scope = Scope::new([ScopeName::Write, ScopeName::All, ScopeName::Write]);
        check!(scope.to_string() == "write read follow");
    }

    #[test]
    fn default_scope_is_read() {
        check!(Scope::default().to_string() == "read");
    }

    #[test]
    fn oauth_url_for_all_scopes() {
        let url = oauth_url(&config(), "abc", &Scope::all(), OOB_REDIRECT_URI);

        check!(
            url.as_str()
                == "https://mastodon.example/oauth/authorize?client_id=abc\
                    &redirect_uri=urn%3Aietf%3Awg%3Aoauth%3A2.0%3Aoob\
                    &response_type=code&scope=read+write+follow"
        );
    }

    #[test]
    fn oauth_url_keeps_port() {
        let config = MastodonConfig::builder("localhost")
            .scheme("http")
            .port(3000)
            .build()
            .expect("config");

        let url = oauth_url(&config, "id", &Scope::from(ScopeName::Read), OOB_REDIRECT_URI);

        check!(url.as_str().starts_with("http://localhost:3000/oauth/authorize?"));
        check!(url.as_str().ends_with("&scope=read"));
    }
}
