use super::Single;
use crate::HttpClient;
use crate::entity::{AccessToken, AppRegistration, Application};
use crate::oauth::Scope;

rx_group! {
    /// [`Apps`](crate::method::Apps) as [`Single`]s.
    RxApps
}

impl<C: HttpClient + 'static> RxApps<C> {
    /// See [`Apps::create_app`](crate::method::Apps::create_app).
    pub fn create_app(
        &self,
        client_name: &str,
        redirect_uris: &str,
        scope: &Scope,
        website: Option<&str>,
    ) -> Single<AppRegistration> {
        Single::from_request(self.client.apps().create_app(
            client_name,
            redirect_uris,
            scope,
            website,
        ))
    }

    /// See [`Apps::verify_app_credentials`](crate::method::Apps::verify_app_credentials).
    pub fn verify_app_credentials(&self) -> Single<Application> {
        Single::from_request(self.client.apps().verify_app_credentials())
    }

    /// See [`Apps::access_token`](crate::method::Apps::access_token).
    pub fn access_token(
        &self,
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
        code: &str,
    ) -> Single<AccessToken> {
        Single::from_request(self.client.apps().access_token(
            client_id,
            client_secret,
            redirect_uri,
            code,
        ))
    }

    /// See [`Apps::password_token`](crate::method::Apps::password_token).
    pub fn password_token(
        &self,
        client_id: &str,
        client_secret: &str,
        scope: &Scope,
        username: &str,
        password: &str,
    ) -> Single<AccessToken> {
        Single::from_request(self.client.apps().password_token(
            client_id,
            client_secret,
            scope,
            username,
            password,
        ))
    }

    /// See [`Apps::client_credentials_token`](crate::method::Apps::client_credentials_token).
    pub fn client_credentials_token(
        &self,
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
        scope: &Scope,
    ) -> Single<AccessToken> {
        Single::from_request(self.client.apps().client_credentials_token(
            client_id,
            client_secret,
            redirect_uri,
            scope,
        ))
    }
}
