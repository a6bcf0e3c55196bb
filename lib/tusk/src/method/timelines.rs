use crate::entity::Status;
use crate::mapper::map_pageable;
use crate::{MastodonRequest, Method, Pageable, Parameters, Range, ToParameters};

method_group! {
    /// Home, public, hashtag and list timelines.
    Timelines
}

/// Filters for [`Timelines::public`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublicTimelineQuery {
    local: bool,
    remote: bool,
    only_media: bool,
}

impl PublicTimelineQuery {
    /// The federated timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only statuses from this instance.
    #[must_use]
    pub const fn local(mut self) -> Self {
        self.local = true;
        self
    }

    /// Only statuses from other instances.
    #[must_use]
    pub const fn remote(mut self) -> Self {
        self.remote = true;
        self
    }

    /// Only statuses with media.
    #[must_use]
    pub const fn only_media(mut self) -> Self {
        self.only_media = true;
        self
    }
}

impl ToParameters for PublicTimelineQuery {
    fn to_parameters(&self) -> Parameters {
        Parameters::new()
            .append_opt("local", self.local.then_some(true))
            .append_opt("remote", self.remote.then_some(true))
            .append_opt("only_media", self.only_media.then_some(true))
    }
}

impl<C> Timelines<'_, C> {
    /// `GET timelines/home`: statuses from followed accounts.
    #[must_use]
    pub fn home(&self, range: &Range) -> MastodonRequest<C, Pageable<Status>> {
        self.timeline(&["timelines", "home"], Parameters::new(), range)
    }

    /// `GET timelines/public`.
    #[must_use]
    pub fn public(
        &self,
        query: &PublicTimelineQuery,
        range: &Range,
    ) -> MastodonRequest<C, Pageable<Status>> {
        self.timeline(&["timelines", "public"], query.to_parameters(), range)
    }

    /// `GET timelines/tag/:hashtag`, `hashtag` without the `#`.
    #[must_use]
    pub fn tag(
        &self,
        hashtag: &str,
        local: bool,
        only_media: bool,
        range: &Range,
    ) -> MastodonRequest<C, Pageable<Status>> {
        let params = Parameters::new()
            .append_opt("local", local.then_some(true))
            .append_opt("only_media", only_media.then_some(true));

        self.timeline(&["timelines", "tag", hashtag], params, range)
    }

    /// `GET timelines/list/:list_id`.
    #[must_use]
    pub fn list(&self, list_id: &str, range: &Range) -> MastodonRequest<C, Pageable<Status>> {
        self.timeline(&["timelines", "list", list_id], Parameters::new(), range)
    }

    fn timeline(
        &self,
        segments: &[&str],
        params: Parameters,
        range: &Range,
    ) -> MastodonRequest<C, Pageable<Status>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(segments),
            &params.extend(range.to_parameters()),
            map_pageable,
        )
    }
}
