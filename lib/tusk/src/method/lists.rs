use crate::entity::{Account, MastodonList};
use crate::mapper::{map_empty, map_entity, map_list, map_pageable};
use crate::{MastodonRequest, Method, Pageable, Parameters, Range, ToParameters};

method_group! {
    /// Lists of followed accounts.
    Lists
}

impl<C> Lists<'_, C> {
    /// `GET lists`.
    #[must_use]
    pub fn lists(&self) -> MastodonRequest<C, Vec<MastodonList>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["lists"]),
            &Parameters::new(),
            map_list,
        )
    }

    /// `GET lists/:id`.
    #[must_use]
    pub fn list(&self, id: &str) -> MastodonRequest<C, MastodonList> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["lists", id]),
            &Parameters::new(),
            map_entity,
        )
    }

    /// `POST lists`.
    #[must_use]
    pub fn create_list(&self, title: &str) -> MastodonRequest<C, MastodonList> {
        self.client.prepare(
            Method::Post,
            self.client.v1(&["lists"]),
            &Parameters::new().append("title", title),
            map_entity,
        )
    }

    /// `PUT lists/:id`: rename.
    #[must_use]
    pub fn update_list(&self, id: &str, title: &str) -> MastodonRequest<C, MastodonList> {
        self.client.prepare(
            Method::Put,
            self.client.v1(&["lists", id]),
            &Parameters::new().append("title", title),
            map_entity,
        )
    }

    /// `DELETE lists/:id`.
    #[must_use]
    pub fn delete_list(&self, id: &str) -> MastodonRequest<C, ()> {
        self.client.prepare(
            Method::Delete,
            self.client.v1(&["lists", id]),
            &Parameters::new(),
            map_empty,
        )
    }

    /// `GET lists/:id/accounts`. An unbounded range with `limit=0` returns
    /// every member at once.
    #[must_use]
    pub fn accounts(&self, id: &str, range: &Range) -> MastodonRequest<C, Pageable<Account>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["lists", id, "accounts"]),
            &range.to_parameters(),
            map_pageable,
        )
    }

    /// `POST lists/:id/accounts`. Only followed accounts can be added.
    #[must_use]
    pub fn add_accounts(&self, id: &str, account_ids: &[&str]) -> MastodonRequest<C, ()> {
        self.members(Method::Post, id, account_ids)
    }

    /// `DELETE lists/:id/accounts`.
    #[must_use]
    pub fn remove_accounts(&self, id: &str, account_ids: &[&str]) -> MastodonRequest<C, ()> {
        self.members(Method::Delete, id, account_ids)
    }

    fn members(&self, method: Method, id: &str, account_ids: &[&str]) -> MastodonRequest<C, ()> {
        self.client.prepare(
            method,
            self.client.v1(&["lists", id, "accounts"]),
            &Parameters::new().append_all("account_ids", account_ids),
            map_empty,
        )
    }
}
