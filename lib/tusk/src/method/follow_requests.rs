use crate::entity::{Account, Relationship};
use crate::mapper::{map_entity, map_pageable};
use crate::{MastodonRequest, Method, Pageable, Parameters, Range, ToParameters};

method_group! {
    /// Follow requests waiting for approval, for locked accounts.
    FollowRequests
}

impl<C> FollowRequests<'_, C> {
    /// `GET follow_requests`.
    #[must_use]
    pub fn follow_requests(&self, range: &Range) -> MastodonRequest<C, Pageable<Account>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["follow_requests"]),
            &range.to_parameters(),
            map_pageable,
        )
    }

    /// `POST follow_requests/:account_id/authorize`.
    #[must_use]
    pub fn authorize(&self, account_id: &str) -> MastodonRequest<C, Relationship> {
        self.decide(account_id, "authorize")
    }

    /// `POST follow_requests/:account_id/reject`.
    #[must_use]
    pub fn reject(&self, account_id: &str) -> MastodonRequest<C, Relationship> {
        self.decide(account_id, "reject")
    }

    fn decide(&self, account_id: &str, decision: &str) -> MastodonRequest<C, Relationship> {
        self.client.prepare(
            Method::Post,
            self.client.v1(&["follow_requests", account_id, decision]),
            &Parameters::new(),
            map_entity,
        )
    }
}
