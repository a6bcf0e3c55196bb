use url::Url;

use crate::entity::{AccessToken, AppRegistration, Application};
use crate::mapper::map_entity;
use crate::oauth::{Scope, oauth_url};
use crate::{MastodonRequest, Method, Parameters};

method_group! {
    /// Application registration and OAuth token exchange.
    Apps
}

impl<C> Apps<'_, C> {
    /// `POST /api/v1/apps`: register an application.
    ///
    /// `redirect_uris` is usually [`OOB_REDIRECT_URI`](crate::oauth::OOB_REDIRECT_URI).
    #[must_use]
    pub fn create_app(
        &self,
        client_name: &str,
        redirect_uris: &str,
        scope: &Scope,
        website: Option<&str>,
    ) -> MastodonRequest<C, AppRegistration> {
        let params = Parameters::new()
            .append("client_name", client_name)
            .append("redirect_uris", redirect_uris)
            .append("scopes", scope)
            .append_opt("website", website);

        self.client
            .prepare(Method::Post, self.client.v1(&["apps"]), &params, map_entity)
    }

    /// `GET /api/v1/apps/verify_credentials`: check the application token.
    #[must_use]
    pub fn verify_app_credentials(&self) -> MastodonRequest<C, Application> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["apps", "verify_credentials"]),
            &Parameters::new(),
            map_entity,
        )
    }

    /// Authorization page for the user; see [`oauth_url`].
    #[must_use]
    pub fn oauth_url(&self, client_id: &str, scope: &Scope, redirect_uri: &str) -> Url {
        oauth_url(self.client.config(), client_id, scope, redirect_uri)
    }

    /// `POST /oauth/token` with `grant_type=authorization_code`.
    #[must_use]
    pub fn access_token(
        &self,
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
        code: &str,
    ) -> MastodonRequest<C, AccessToken> {
        let params = Parameters::new()
            .append("grant_type", "authorization_code")
            .append("client_id", client_id)
            .append("client_secret", client_secret)
            .append("redirect_uri", redirect_uri)
            .append("code", code);

        self.token(&params)
    }

    /// `POST /oauth/token` with `grant_type=password`.
    #[must_use]
    pub fn password_token(
        &self,
        client_id: &str,
        client_secret: &str,
        scope: &Scope,
        username: &str,
        password: &str,
    ) -> MastodonRequest<C, AccessToken> {
        let params = Parameters::new()
            .append("grant_type", "password")
            .append("client_id", client_id)
            .append("client_secret", client_secret)
            .append("scope", scope)
            .append("username", username)
            .append("password", password);

        self.token(&params)
    }

    /// `POST /oauth/token` with `grant_type=client_credentials`, an
    /// application-level token not tied to a user.
    #[must_use]
    pub fn client_credentials_token(
        &self,
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
        scope: &Scope,
    ) -> MastodonRequest<C, AccessToken> {
        let params = Parameters::new()
            .append("grant_type", "client_credentials")
            .append("client_id", client_id)
            .append("client_secret", client_secret)
            .append("redirect_uri", redirect_uri)
            .append("scope", scope);

        self.token(&params)
    }

    fn token(&self, params: &Parameters) -> MastodonRequest<C, AccessToken> {
        self.client.prepare(
            Method::Post,
            self.client.endpoint(&["oauth", "token"]),
            params,
            map_entity,
        )
    }
}
