use super::{Completable, Single};
use crate::entity::{Account, Card, Context, ScheduledStatus, Status, Visibility};
use crate::method::StatusForm;
use crate::{HttpClient, Pageable, Range};

rx_group! {
    /// [`Statuses`](crate::method::Statuses) as [`Single`]s and
    /// [`Completable`]s.
    RxStatuses
}

impl<C: HttpClient + 'static> RxStatuses<C> {
    /// See [`Statuses::status`](crate::method::Statuses::status).
    pub fn status(&self, id: &str) -> Single<Status> {
        Single::from_request(self.client.statuses().status(id))
    }

    /// See [`Statuses::context`](crate::method::Statuses::context).
    pub fn context(&self, id: &str) -> Single<Context> {
        Single::from_request(self.client.statuses().context(id))
    }

    /// See [`Statuses::card`](crate::method::Statuses::card).
    pub fn card(&self, id: &str) -> Single<Card> {
        Single::from_request(self.client.statuses().card(id))
    }

    /// See [`Statuses::reblogged_by`](crate::method::Statuses::reblogged_by).
    pub fn reblogged_by(&self, id: &str, range: &Range) -> Single<Pageable<Account>> {
        Single::from_request(self.client.statuses().reblogged_by(id, range))
    }

    /// See [`Statuses::favourited_by`](crate::method::Statuses::favourited_by).
    pub fn favourited_by(&self, id: &str, range: &Range) -> Single<Pageable<Account>> {
        Single::from_request(self.client.statuses().favourited_by(id, range))
    }

    /// See [`Statuses::post_status`](crate::method::Statuses::post_status).
    pub fn post_status(&self, form: &StatusForm) -> Single<Status> {
        Single::from_request(self.client.statuses().post_status(form))
    }

    /// See [`Statuses::schedule_status`](crate::method::Statuses::schedule_status).
    pub fn schedule_status(
        &self,
        form: &StatusForm,
        scheduled_at: &str,
    ) -> Single<ScheduledStatus> {
        Single::from_request(self.client.statuses().schedule_status(form, scheduled_at))
    }

    /// See [`Statuses::delete_status`](crate::method::Statuses::delete_status).
    pub fn delete_status(&self, id: &str) -> Completable {
        Completable::from_request(self.client.statuses().delete_status(id))
    }

    /// See [`Statuses::reblog`](crate::method::Statuses::reblog).
    ///
    /// A [`Visibility::Direct`] reblog fails on the error channel without
    /// any request.
    pub fn reblog(&self, id: &str, visibility: Visibility) -> Single<Status> {
        Single::from_result(self.client.statuses().reblog(id, visibility))
    }

    /// See [`Statuses::unreblog`](crate::method::Statuses::unreblog).
    pub fn unreblog(&self, id: &str) -> Single<Status> {
        Single::from_request(self.client.statuses().unreblog(id))
    }

    /// See [`Statuses::favourite`](crate::method::Statuses::favourite).
    pub fn favourite(&self, id: &str) -> Single<Status> {
        Single::from_request(self.client.statuses().favourite(id))
    }

    /// See [`Statuses::unfavourite`](crate::method::Statuses::unfavourite).
    pub fn unfavourite(&self, id: &str) -> Single<Status> {
        Single::from_request(self.client.statuses().unfavourite(id))
    }

    /// See [`Statuses::bookmark`](crate::method::Statuses::bookmark).
    pub fn bookmark(&self, id: &str) -> Single<Status> {
        Single::from_request(self.client.statuses().bookmark(id))
    }

    /// See [`Statuses::unbookmark`](crate::method::Statuses::unbookmark).
    pub fn unbookmark(&self, id: &str) -> Single<Status> {
        Single::from_request(self.client.statuses().unbookmark(id))
    }

    /// See [`Statuses::pin`](crate::method::Statuses::pin).
    pub fn pin(&self, id: &str) -> Single<Status> {
        Single::from_request(self.client.statuses().pin(id))
    }

    /// See [`Statuses::unpin`](crate::method::Statuses::unpin).
    pub fn unpin(&self, id: &str) -> Single<Status> {
        Single::from_request(self.client.statuses().unpin(id))
    }

    /// See [`Statuses::mute_conversation`](crate::method::Statuses::mute_conversation).
    pub fn mute_conversation(&self, id: &str) -> Single<Status> {
        Single::from_request(self.client.statuses().mute_conversation(id))
    }

    /// See [`Statuses::unmute_conversation`](crate::method::Statuses::unmute_conversation).
    pub fn unmute_conversation(&self, id: &str) -> Single<Status> {
        Single::from_request(self.client.statuses().unmute_conversation(id))
    }
}
