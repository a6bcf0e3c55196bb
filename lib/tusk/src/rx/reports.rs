use super::Single;
use crate::HttpClient;
use crate::entity::Report;

rx_group! {
    /// [`Reports`](crate::method::Reports) as [`Single`]s.
    RxReports
}

impl<C: HttpClient + 'static> RxReports<C> {
    /// See [`Reports::reports`](crate::method::Reports::reports).
    pub fn reports(&self) -> Single<Vec<Report>> {
        Single::from_request(self.client.reports().reports())
    }

    /// See [`Reports::report`](crate::method::Reports::report).
    pub fn report(
        &self,
        account_id: &str,
        status_ids: &[&str],
        comment: Option<&str>,
    ) -> Single<Report> {
        Single::from_request(self.client.reports().report(account_id, status_ids, comment))
    }
}
