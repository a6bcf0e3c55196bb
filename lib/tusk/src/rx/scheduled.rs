use super::{Completable, Single};
use crate::entity::ScheduledStatus;
use crate::{HttpClient, Pageable, Range};

rx_group! {
    /// [`ScheduledStatuses`](crate::method::ScheduledStatuses) as [`Single`]s
    /// and [`Completable`]s.
    RxScheduledStatuses
}

impl<C: HttpClient + 'static> RxScheduledStatuses<C> {
    /// See [`ScheduledStatuses::scheduled_statuses`](crate::method::ScheduledStatuses::scheduled_statuses).
    pub fn scheduled_statuses(&self, range: &Range) -> Single<Pageable<ScheduledStatus>> {
        Single::from_request(self.client.scheduled_statuses().scheduled_statuses(range))
    }

    /// See [`ScheduledStatuses::scheduled_status`](crate::method::ScheduledStatuses::scheduled_status).
    pub fn scheduled_status(&self, id: &str) -> Single<ScheduledStatus> {
        Single::from_request(self.client.scheduled_statuses().scheduled_status(id))
    }

    /// See [`ScheduledStatuses::reschedule`](crate::method::ScheduledStatuses::reschedule).
    pub fn reschedule(&self, id: &str, scheduled_at: &str) -> Single<ScheduledStatus> {
        Single::from_request(self.client.scheduled_statuses().reschedule(id, scheduled_at))
    }

    /// See [`ScheduledStatuses::cancel`](crate::method::ScheduledStatuses::cancel).
    pub fn cancel(&self, id: &str) -> Completable {
        Completable::from_request(self.client.scheduled_statuses().cancel(id))
    }
}
