use crate::entity::ScheduledStatus;
use crate::mapper::{map_empty, map_entity, map_pageable};
use crate::{MastodonRequest, Method, Pageable, Parameters, Range, ToParameters};

method_group! {
    /// Statuses waiting to be posted.
    ScheduledStatuses
}

impl<C> ScheduledStatuses<'_, C> {
    /// `GET scheduled_statuses`.
    #[must_use]
    pub fn scheduled_statuses(
        &self,
        range: &Range,
    ) -> MastodonRequest<C, Pageable<ScheduledStatus>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["scheduled_statuses"]),
            &range.to_parameters(),
            map_pageable,
        )
    }

    /// `GET scheduled_statuses/:id`.
    #[must_use]
    pub fn scheduled_status(&self, id: &str) -> MastodonRequest<C, ScheduledStatus> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["scheduled_statuses", id]),
            &Parameters::new(),
            map_entity,
        )
    }

    /// `PUT scheduled_statuses/:id` with a new ISO 8601 date.
    #[must_use]
    pub fn reschedule(&self, id: &str, scheduled_at: &str) -> MastodonRequest<C, ScheduledStatus> {
        self.client.prepare(
            Method::Put,
            self.client.v1(&["scheduled_statuses", id]),
            &Parameters::new().append("scheduled_at", scheduled_at),
            map_entity,
        )
    }

    /// `DELETE scheduled_statuses/:id`.
    #[must_use]
    pub fn cancel(&self, id: &str) -> MastodonRequest<C, ()> {
        self.client.prepare(
            Method::Delete,
            self.client.v1(&["scheduled_statuses", id]),
            &Parameters::new(),
            map_empty,
        )
    }
}
