use super::Single;
use crate::HttpClient;
use crate::entity::Poll;

rx_group! {
    /// [`Polls`](crate::method::Polls) as [`Single`]s.
    RxPolls
}

impl<C: HttpClient + 'static> RxPolls<C> {
    /// See [`Polls::poll`](crate::method::Polls::poll).
    pub fn poll(&self, id: &str) -> Single<Poll> {
        Single::from_request(self.client.polls().poll(id))
    }

    /// See [`Polls::vote`](crate::method::Polls::vote).
    pub fn vote(&self, id: &str, choices: &[u32]) -> Single<Poll> {
        Single::from_request(self.client.polls().vote(id, choices))
    }
}
