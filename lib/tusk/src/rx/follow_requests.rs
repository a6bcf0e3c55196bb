use super::Single;
use crate::entity::{Account, Relationship};
use crate::{HttpClient, Pageable, Range};

rx_group! {
    /// [`FollowRequests`](crate::method::FollowRequests) as [`Single`]s.
    RxFollowRequests
}

impl<C: HttpClient + 'static> RxFollowRequests<C> {
    /// See [`FollowRequests::follow_requests`](crate::method::FollowRequests::follow_requests).
    pub fn follow_requests(&self, range: &Range) -> Single<Pageable<Account>> {
        Single::from_request(self.client.follow_requests().follow_requests(range))
    }

    /// See [`FollowRequests::authorize`](crate::method::FollowRequests::authorize).
    pub fn authorize(&self, account_id: &str) -> Single<Relationship> {
        Single::from_request(self.client.follow_requests().authorize(account_id))
    }

    /// See [`FollowRequests::reject`](crate::method::FollowRequests::reject).
    pub fn reject(&self, account_id: &str) -> Single<Relationship> {
        Single::from_request(self.client.follow_requests().reject(account_id))
    }
}
