use crate::entity::Report;
use crate::mapper::{map_entity, map_list};
use crate::{MastodonRequest, Method, Parameters};

method_group! {
    /// Reports sent to the moderators.
    Reports
}

impl<C> Reports<'_, C> {
    /// `GET reports`: reports filed by the user.
    #[must_use]
    pub fn reports(&self) -> MastodonRequest<C, Vec<Report>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["reports"]),
            &Parameters::new(),
            map_list,
        )
    }

    /// `POST reports`.
    #[must_use]
    pub fn report(
        &self,
        account_id: &str,
        status_ids: &[&str],
        comment: Option<&str>,
    ) -> MastodonRequest<C, Report> {
        let params = Parameters::new()
            .append("account_id", account_id)
            .append_all("status_ids", status_ids)
            .append_opt("comment", comment);

        self.client
            .prepare(Method::Post, self.client.v1(&["reports"]), &params, map_entity)
    }
}
