use serde::{Deserialize, Serialize};

/// Application that posted a status, or the one verified by
/// `verify_app_credentials`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
}

/// Credentials of a newly registered application.
///
/// `client_id` and `client_secret` are needed for every token exchange and
/// should be stored by the caller.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppRegistration {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    pub redirect_uri: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub vapid_key: Option<String>,
}

impl std::fmt::Debug for AppRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppRegistration")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("redirect_uri", &self.redirect_uri)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Result of an OAuth token exchange.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Granted scopes, space separated.
    #[serde(default)]
    pub scope: String,
    /// UNIX timestamp.
    #[serde(default)]
    pub created_at: u64,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("created_at", &self.created_at)
            .finish()
    }
}
