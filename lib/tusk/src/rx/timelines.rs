use super::Single;
use crate::entity::Status;
use crate::method::PublicTimelineQuery;
use crate::{HttpClient, Pageable, Range};

rx_group! {
    /// [`Timelines`](crate::method::Timelines) as [`Single`]s.
    RxTimelines
}

impl<C: HttpClient + 'static> RxTimelines<C> {
    /// See [`Timelines::home`](crate::method::Timelines::home).
    pub fn home(&self, range: &Range) -> Single<Pageable<Status>> {
        Single::from_request(self.client.timelines().home(range))
    }

    /// See [`Timelines::public`](crate::method::Timelines::public).
    pub fn public(&self, query: &PublicTimelineQuery, range: &Range) -> Single<Pageable<Status>> {
        Single::from_request(self.client.timelines().public(query, range))
    }

    /// See [`Timelines::tag`](crate::method::Timelines::tag).
    pub fn tag(
        &self,
        hashtag: &str,
        local: bool,
        only_media: bool,
        range: &Range,
    ) -> Single<Pageable<Status>> {
        Single::from_request(self.client.timelines().tag(hashtag, local, only_media, range))
    }

    /// See [`Timelines::list`](crate::method::Timelines::list).
    pub fn list(&self, list_id: &str, range: &Range) -> Single<Pageable<Status>> {
        Single::from_request(self.client.timelines().list(list_id, range))
    }
}
