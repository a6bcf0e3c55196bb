use crate::entity::Poll;
use crate::mapper::map_entity;
use crate::{MastodonRequest, Method, Parameters};

method_group! {
    /// Polls attached to statuses.
    Polls
}

impl<C> Polls<'_, C> {
    /// `GET polls/:id`.
    #[must_use]
    pub fn poll(&self, id: &str) -> MastodonRequest<C, Poll> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["polls", id]),
            &Parameters::new(),
            map_entity,
        )
    }

    /// `POST polls/:id/votes`, `choices` being option indexes.
    #[must_use]
    pub fn vote(&self, id: &str, choices: &[u32]) -> MastodonRequest<C, Poll> {
        self.client.prepare(
            Method::Post,
            self.client.v1(&["polls", id, "votes"]),
            &Parameters::new().append_all("choices", choices),
            map_entity,
        )
    }
}
