use super::Single;
use crate::entity::{Account, Relationship, Status};
use crate::method::{AccountStatusesQuery, CredentialsForm};
use crate::{HttpClient, Pageable, Range};

rx_group! {
    /// [`Accounts`](crate::method::Accounts) as [`Single`]s.
    RxAccounts
}

impl<C: HttpClient + 'static> RxAccounts<C> {
    /// See [`Accounts::account`](crate::method::Accounts::account).
    pub fn account(&self, id: &str) -> Single<Account> {
        Single::from_request(self.client.accounts().account(id))
    }

    /// See [`Accounts::verify_credentials`](crate::method::Accounts::verify_credentials).
    pub fn verify_credentials(&self) -> Single<Account> {
        Single::from_request(self.client.accounts().verify_credentials())
    }

    /// See [`Accounts::update_credentials`](crate::method::Accounts::update_credentials).
    pub fn update_credentials(&self, form: &CredentialsForm) -> Single<Account> {
        Single::from_request(self.client.accounts().update_credentials(form))
    }

    /// See [`Accounts::followers`](crate::method::Accounts::followers).
    pub fn followers(&self, id: &str, range: &Range) -> Single<Pageable<Account>> {
        Single::from_request(self.client.accounts().followers(id, range))
    }

    /// See [`Accounts::following`](crate::method::Accounts::following).
    pub fn following(&self, id: &str, range: &Range) -> Single<Pageable<Account>> {
        Single::from_request(self.client.accounts().following(id, range))
    }

    /// See [`Accounts::statuses`](crate::method::Accounts::statuses).
    pub fn statuses(
        &self,
        id: &str,
        query: &AccountStatusesQuery,
        range: &Range,
    ) -> Single<Pageable<Status>> {
        Single::from_request(self.client.accounts().statuses(id, query, range))
    }

    /// See [`Accounts::follow`](crate::method::Accounts::follow).
    pub fn follow(&self, id: &str, reblogs: bool) -> Single<Relationship> {
        Single::from_request(self.client.accounts().follow(id, reblogs))
    }

    /// See [`Accounts::unfollow`](crate::method::Accounts::unfollow).
    pub fn unfollow(&self, id: &str) -> Single<Relationship> {
        Single::from_request(self.client.accounts().unfollow(id))
    }

    /// See [`Accounts::block`](crate::method::Accounts::block).
    pub fn block(&self, id: &str) -> Single<Relationship> {
        Single::from_request(self.client.accounts().block(id))
    }

    /// See [`Accounts::unblock`](crate::method::Accounts::unblock).
    pub fn unblock(&self, id: &str) -> Single<Relationship> {
        Single::from_request(self.client.accounts().unblock(id))
    }

    /// See [`Accounts::mute`](crate::method::Accounts::mute).
    pub fn mute(&self, id: &str, notifications: bool) -> Single<Relationship> {
        Single::from_request(self.client.accounts().mute(id, notifications))
    }

    /// See [`Accounts::unmute`](crate::method::Accounts::unmute).
    pub fn unmute(&self, id: &str) -> Single<Relationship> {
        Single::from_request(self.client.accounts().unmute(id))
    }

    /// See [`Accounts::relationships`](crate::method::Accounts::relationships).
    pub fn relationships(&self, ids: &[&str]) -> Single<Vec<Relationship>> {
        Single::from_request(self.client.accounts().relationships(ids))
    }

    /// See [`Accounts::search`](crate::method::Accounts::search).
    pub fn search(
        &self,
        q: &str,
        limit: Option<u32>,
        resolve: bool,
        following: bool,
    ) -> Single<Vec<Account>> {
        Single::from_request(self.client.accounts().search(q, limit, resolve, following))
    }
}
