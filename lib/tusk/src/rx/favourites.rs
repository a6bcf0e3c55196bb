use super::Single;
use crate::entity::Status;
use crate::{HttpClient, Pageable, Range};

rx_group! {
    /// [`Favourites`](crate::method::Favourites) as a [`Single`].
    RxFavourites
}

rx_group! {
    /// [`Bookmarks`](crate::method::Bookmarks) as a [`Single`].
    RxBookmarks
}

impl<C: HttpClient + 'static> RxFavourites<C> {
    /// See [`Favourites::favourites`](crate::method::Favourites::favourites).
    pub fn favourites(&self, range: &Range) -> Single<Pageable<Status>> {
        Single::from_request(self.client.favourites().favourites(range))
    }
}

impl<C: HttpClient + 'static> RxBookmarks<C> {
    /// See [`Bookmarks::bookmarks`](crate::method::Bookmarks::bookmarks).
    pub fn bookmarks(&self, range: &Range) -> Single<Pageable<Status>> {
        Single::from_request(self.client.bookmarks().bookmarks(range))
    }
}
