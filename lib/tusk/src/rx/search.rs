use super::Single;
use crate::entity::Results;
use crate::method::SearchQuery;
use crate::{HttpClient, Range};

rx_group! {
    /// [`Search`](crate::method::Search) as a [`Single`].
    RxSearch
}

impl<C: HttpClient + 'static> RxSearch<C> {
    /// See [`Search::search`](crate::method::Search::search).
    pub fn search(&self, query: &SearchQuery, range: &Range) -> Single<Results> {
        Single::from_request(self.client.search().search(query, range))
    }
}
