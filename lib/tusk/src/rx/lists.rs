use super::{Completable, Single};
use crate::entity::{Account, MastodonList};
use crate::{HttpClient, Pageable, Range};

rx_group! {
    /// [`Lists`](crate::method::Lists) as [`Single`]s and [`Completable`]s.
    RxLists
}

impl<C: HttpClient + 'static> RxLists<C> {
    /// See [`Lists::lists`](crate::method::Lists::lists).
    pub fn lists(&self) -> Single<Vec<MastodonList>> {
        Single::from_request(self.client.lists().lists())
    }

    /// See [`Lists::list`](crate::method::Lists::list).
    pub fn list(&self, id: &str) -> Single<MastodonList> {
        Single::from_request(self.client.lists().list(id))
    }

    /// See [`Lists::create_list`](crate::method::Lists::create_list).
    pub fn create_list(&self, title: &str) -> Single<MastodonList> {
        Single::from_request(self.client.lists().create_list(title))
    }

    /// See [`Lists::update_list`](crate::method::Lists::update_list).
    pub fn update_list(&self, id: &str, title: &str) -> Single<MastodonList> {
        Single::from_request(self.client.lists().update_list(id, title))
    }

    /// See [`Lists::delete_list`](crate::method::Lists::delete_list).
    pub fn delete_list(&self, id: &str) -> Completable {
        Completable::from_request(self.client.lists().delete_list(id))
    }

    /// See [`Lists::accounts`](crate::method::Lists::accounts).
    pub fn accounts(&self, id: &str, range: &Range) -> Single<Pageable<Account>> {
        Single::from_request(self.client.lists().accounts(id, range))
    }

    /// See [`Lists::add_accounts`](crate::method::Lists::add_accounts).
    pub fn add_accounts(&self, id: &str, account_ids: &[&str]) -> Completable {
        Completable::from_request(self.client.lists().add_accounts(id, account_ids))
    }

    /// See [`Lists::remove_accounts`](crate::method::Lists::remove_accounts).
    pub fn remove_accounts(&self, id: &str, account_ids: &[&str]) -> Completable {
        Completable::from_request(self.client.lists().remove_accounts(id, account_ids))
    }
}
