use crate::entity::Status;
use crate::mapper::map_pageable;
use crate::{MastodonRequest, Method, Pageable, Range, ToParameters};

method_group! {
    /// Statuses the user favourited.
    Favourites
}

method_group! {
    /// Statuses the user bookmarked.
    Bookmarks
}

impl<C> Favourites<'_, C> {
    /// `GET favourites`.
    #[must_use]
    pub fn favourites(&self, range: &Range) -> MastodonRequest<C, Pageable<Status>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["favourites"]),
            &range.to_parameters(),
            map_pageable,
        )
    }
}

impl<C> Bookmarks<'_, C> {
    /// `GET bookmarks`.
    #[must_use]
    pub fn bookmarks(&self, range: &Range) -> MastodonRequest<C, Pageable<Status>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["bookmarks"]),
            &range.to_parameters(),
            map_pageable,
        )
    }
}
