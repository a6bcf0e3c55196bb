use super::{Completable, Single};
use crate::entity::Notification;
use crate::method::NotificationsQuery;
use crate::{HttpClient, Pageable, Range};

rx_group! {
    /// [`Notifications`](crate::method::Notifications) as [`Single`]s and
    /// [`Completable`]s.
    RxNotifications
}

impl<C: HttpClient + 'static> RxNotifications<C> {
    /// See [`Notifications::notifications`](crate::method::Notifications::notifications).
    pub fn notifications(
        &self,
        query: &NotificationsQuery,
        range: &Range,
    ) -> Single<Pageable<Notification>> {
        Single::from_request(self.client.notifications().notifications(query, range))
    }

    /// See [`Notifications::notification`](crate::method::Notifications::notification).
    pub fn notification(&self, id: &str) -> Single<Notification> {
        Single::from_request(self.client.notifications().notification(id))
    }

    /// See [`Notifications::clear`](crate::method::Notifications::clear).
    pub fn clear(&self) -> Completable {
        Completable::from_request(self.client.notifications().clear())
    }

    /// See [`Notifications::dismiss`](crate::method::Notifications::dismiss).
    pub fn dismiss(&self, id: &str) -> Completable {
        Completable::from_request(self.client.notifications().dismiss(id))
    }
}
