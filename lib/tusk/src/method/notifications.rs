use crate::entity::{Notification, NotificationType};
use crate::mapper::{map_empty, map_entity, map_pageable};
use crate::{MastodonRequest, Method, Pageable, Parameters, Range, ToParameters};

method_group! {
    /// Notifications of the authenticated user.
    Notifications
}

/// Filters for [`Notifications::notifications`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationsQuery {
    types: Vec<NotificationType>,
    exclude_types: Vec<NotificationType>,
    account_id: Option<String>,
}

impl NotificationsQuery {
    /// Every notification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only this type; may be repeated.
    #[must_use]
    pub fn only(mut self, kind: NotificationType) -> Self {
        self.types.push(kind);
        self
    }

    /// Skip this type; may be repeated.
    #[must_use]
    pub fn exclude(mut self, kind: NotificationType) -> Self {
        self.exclude_types.push(kind);
        self
    }

    /// Only notifications triggered by this account.
    #[must_use]
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }
}

impl ToParameters for NotificationsQuery {
    fn to_parameters(&self) -> Parameters {
        Parameters::new()
            .append_all("types", &self.types)
            .append_all("exclude_types", &self.exclude_types)
            .append_opt("account_id", self.account_id.as_deref())
    }
}

impl<C> Notifications<'_, C> {
    /// `GET notifications`.
    #[must_use]
    pub fn notifications(
        &self,
        query: &NotificationsQuery,
        range: &Range,
    ) -> MastodonRequest<C, Pageable<Notification>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["notifications"]),
            &query.to_parameters().extend(range.to_parameters()),
            map_pageable,
        )
    }

    /// `GET notifications/:id`.
    #[must_use]
    pub fn notification(&self, id: &str) -> MastodonRequest<C, Notification> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["notifications", id]),
            &Parameters::new(),
            map_entity,
        )
    }

    /// `POST notifications/clear`: dismiss everything.
    #[must_use]
    pub fn clear(&self) -> MastodonRequest<C, ()> {
        self.client.prepare(
            Method::Post,
            self.client.v1(&["notifications", "clear"]),
            &Parameters::new(),
            map_empty,
        )
    }

    /// `POST notifications/:id/dismiss`.
    #[must_use]
    pub fn dismiss(&self, id: &str) -> MastodonRequest<C, ()> {
        self.client.prepare(
            Method::Post,
            self.client.v1(&["notifications", id, "dismiss"]),
            &Parameters::new(),
            map_empty,
        )
    }
}
