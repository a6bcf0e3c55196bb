use crate::entity::{Account, Card, Context, ScheduledStatus, Status, Visibility};
use crate::mapper::{map_empty, map_entity, map_pageable};
use crate::{Error, MastodonRequest, Method, Pageable, Parameters, Range, Result, ToParameters};

method_group! {
    /// Posting, reading and acting on statuses.
    Statuses
}

/// A poll attached to a new status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollForm {
    options: Vec<String>,
    expires_in: u64,
    multiple: bool,
    hide_totals: bool,
}

impl PollForm {
    /// Poll with these choices, closing after `expires_in` seconds.
    pub fn new<I, S>(options: I, expires_in: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            expires_in,
            multiple: false,
            hide_totals: false,
        }
    }

    /// Allow several choices.
    #[must_use]
    pub const fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Hide vote counts until the poll ends.
    #[must_use]
    pub const fn hide_totals(mut self) -> Self {
        self.hide_totals = true;
        self
    }
}

impl ToParameters for PollForm {
    fn to_parameters(&self) -> Parameters {
        Parameters::new()
            .append_all("poll[options]", &self.options)
            .append("poll[expires_in]", self.expires_in)
            .append_opt("poll[multiple]", self.multiple.then_some(true))
            .append_opt("poll[hide_totals]", self.hide_totals.then_some(true))
    }
}

/// A new status.
///
/// ```
/// use tusk::method::StatusForm;
/// use tusk::entity::Visibility;
///
/// let form = StatusForm::new("Hello, fediverse!")
///     .visibility(Visibility::Unlisted)
///     .spoiler_text("greeting");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusForm {
    status: String,
    in_reply_to_id: Option<String>,
    media_ids: Vec<String>,
    sensitive: bool,
    spoiler_text: Option<String>,
    visibility: Option<Visibility>,
    language: Option<String>,
    poll: Option<PollForm>,
}

impl StatusForm {
    /// Status with this text.
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    /// Reply to another status.
    #[must_use]
    pub fn in_reply_to(mut self, status_id: impl Into<String>) -> Self {
        self.in_reply_to_id = Some(status_id.into());
        self
    }

    /// Attach an uploaded media.
    #[must_use]
    pub fn media_id(mut self, media_id: impl Into<String>) -> Self {
        self.media_ids.push(media_id.into());
        self
    }

    /// Hide the media behind a warning.
    #[must_use]
    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Content warning shown instead of the text.
    #[must_use]
    pub fn spoiler_text(mut self, spoiler_text: impl Into<String>) -> Self {
        self.spoiler_text = Some(spoiler_text.into());
        self
    }

    /// Who can see the status; the account default otherwise.
    #[must_use]
    pub const fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// ISO 639-1 language code.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Attach a poll. A status cannot have both media and a poll.
    #[must_use]
    pub fn poll(mut self, poll: PollForm) -> Self {
        self.poll = Some(poll);
        self
    }
}

impl ToParameters for StatusForm {
    fn to_parameters(&self) -> Parameters {
        let params = Parameters::new()
            .append("status", &self.status)
            .append_opt("in_reply_to_id", self.in_reply_to_id.as_deref())
            .append_all("media_ids", &self.media_ids)
            .append_opt("sensitive", self.sensitive.then_some(true))
            .append_opt("spoiler_text", self.spoiler_text.as_deref())
            .append_opt("visibility", self.visibility)
            .append_opt("language", self.language.as_deref());

        match &self.poll {
            Some(poll) => params.extend(poll.to_parameters()),
            None => params,
        }
    }
}

impl<C> Statuses<'_, C> {
    /// `GET statuses/:id`.
    #[must_use]
    pub fn status(&self, id: &str) -> MastodonRequest<C, Status> {
        self.get(&["statuses", id])
    }

    /// `GET statuses/:id/context`: ancestors and replies.
    #[must_use]
    pub fn context(&self, id: &str) -> MastodonRequest<C, Context> {
        self.get(&["statuses", id, "context"])
    }

    /// `GET statuses/:id/card`.
    #[must_use]
    pub fn card(&self, id: &str) -> MastodonRequest<C, Card> {
        self.get(&["statuses", id, "card"])
    }

    /// `GET statuses/:id/reblogged_by`.
    #[must_use]
    pub fn reblogged_by(&self, id: &str, range: &Range) -> MastodonRequest<C, Pageable<Account>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["statuses", id, "reblogged_by"]),
            &range.to_parameters(),
            map_pageable,
        )
    }

    /// `GET statuses/:id/favourited_by`.
    #[must_use]
    pub fn favourited_by(&self, id: &str, range: &Range) -> MastodonRequest<C, Pageable<Account>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["statuses", id, "favourited_by"]),
            &range.to_parameters(),
            map_pageable,
        )
    }

    /// `POST statuses`.
    #[must_use]
    pub fn post_status(&self, form: &StatusForm) -> MastodonRequest<C, Status> {
        self.client.prepare(
            Method::Post,
            self.client.v1(&["statuses"]),
            &form.to_parameters(),
            map_entity,
        )
    }

    /// `POST statuses` with `scheduled_at` (ISO 8601, at least five minutes
    /// ahead): the server answers with the scheduled status.
    #[must_use]
    pub fn schedule_status(
        &self,
        form: &StatusForm,
        scheduled_at: &str,
    ) -> MastodonRequest<C, ScheduledStatus> {
        self.client.prepare(
            Method::Post,
            self.client.v1(&["statuses"]),
            &form.to_parameters().append("scheduled_at", scheduled_at),
            map_entity,
        )
    }

    /// `DELETE statuses/:id`.
    #[must_use]
    pub fn delete_status(&self, id: &str) -> MastodonRequest<C, ()> {
        self.client.prepare(
            Method::Delete,
            self.client.v1(&["statuses", id]),
            &Parameters::new(),
            map_empty,
        )
    }

    /// `POST statuses/:id/reblog`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRequest`] for [`Visibility::Direct`]: a reblog can only
    /// be public, unlisted or private. Nothing is sent.
    pub fn reblog(&self, id: &str, visibility: Visibility) -> Result<MastodonRequest<C, Status>> {
        if visibility == Visibility::Direct {
            return Err(Error::invalid_request(format!(
                "cannot reblog status {id} with visibility '{visibility}'"
            )));
        }

        Ok(self.action(
            id,
            "reblog",
            &Parameters::new().append("visibility", visibility),
        ))
    }

    /// `POST statuses/:id/unreblog`.
    #[must_use]
    pub fn unreblog(&self, id: &str) -> MastodonRequest<C, Status> {
        self.action(id, "unreblog", &Parameters::new())
    }

    /// `POST statuses/:id/favourite`.
    #[must_use]
    pub fn favourite(&self, id: &str) -> MastodonRequest<C, Status> {
        self.action(id, "favourite", &Parameters::new())
    }

    /// `POST statuses/:id/unfavourite`.
    #[must_use]
    pub fn unfavourite(&self, id: &str) -> MastodonRequest<C, Status> {
        self.action(id, "unfavourite", &Parameters::new())
    }

    /// `POST statuses/:id/bookmark`.
    #[must_use]
    pub fn bookmark(&self, id: &str) -> MastodonRequest<C, Status> {
        self.action(id, "bookmark", &Parameters::new())
    }

    /// `POST statuses/:id/unbookmark`.
    #[must_use]
    pub fn unbookmark(&self, id: &str) -> MastodonRequest<C, Status> {
        self.action(id, "unbookmark", &Parameters::new())
    }

    /// `POST statuses/:id/pin`, on the user's own profile.
    #[must_use]
    pub fn pin(&self, id: &str) -> MastodonRequest<C, Status> {
        self.action(id, "pin", &Parameters::new())
    }

    /// `POST statuses/:id/unpin`.
    #[must_use]
    pub fn unpin(&self, id: &str) -> MastodonRequest<C, Status> {
        self.action(id, "unpin", &Parameters::new())
    }

    /// `POST statuses/:id/mute`: stop notifications from the thread.
    #[must_use]
    pub fn mute_conversation(&self, id: &str) -> MastodonRequest<C, Status> {
        self.action(id, "mute", &Parameters::new())
    }

    /// `POST statuses/:id/unmute`.
    #[must_use]
    pub fn unmute_conversation(&self, id: &str) -> MastodonRequest<C, Status> {
        self.action(id, "unmute", &Parameters::new())
    }

    fn get<T: serde::de::DeserializeOwned>(&self, segments: &[&str]) -> MastodonRequest<C, T> {
        self.client.prepare(
            Method::Get,
            self.client.v1(segments),
            &Parameters::new(),
            map_entity,
        )
    }

    fn action(&self, id: &str, action: &str, params: &Parameters) -> MastodonRequest<C, Status> {
        self.client.prepare(
            Method::Post,
            self.client.v1(&["statuses", id, action]),
            params,
            map_entity,
        )
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;
    use crate::{MastodonClient, MastodonConfig};

    fn client() -> MastodonClient<()> {
        MastodonClient::with_http(
            MastodonConfig::builder("mastodon.example")
                .build()
                .expect("config"),
            (),
        )
    }

    #[test]
    fn status_form_parameters() {
        let params = StatusForm::new("hello")
            .in_reply_to("99")
            .media_id("m1")
            .media_id("m2")
            .visibility(Visibility::Private)
            .to_parameters();

        check!(params.get("status") == Some("hello"));
        check!(params.get("in_reply_to_id") == Some("99"));
        check!(params.get_all("media_ids[]") == vec!["m1", "m2"]);
        check!(params.get("visibility") == Some("private"));
        check!(params.get("sensitive").is_none());
    }

    #[test]
    fn poll_options_use_one_array_key() {
        let params = StatusForm::new("Tabs or spaces?")
            .poll(PollForm::new(["tabs", "spaces"], 3600).multiple())
            .to_parameters();

        check!(params.get_all("poll[options][]") == vec!["tabs", "spaces"]);
        check!(params.get("poll[expires_in]") == Some("3600"));
        check!(params.get("poll[multiple]") == Some("true"));
        check!(params.get("poll[hide_totals]").is_none());
    }

    #[test]
    fn reblog_with_direct_visibility_fails_fast() {
        let client = client();

        let err = client
            .statuses()
            .reblog("1", Visibility::Direct)
            .expect_err("direct reblog");

        check!(err.is_invalid_request());
        check!(err.status().is_none());
    }

    #[test]
    fn reblog_sends_visibility() {
        let client = client();

        let request = client
            .statuses()
            .reblog("1", Visibility::Unlisted)
            .expect("unlisted reblog");

        check!(request.request().url().path() == "/api/v1/statuses/1/reblog");
        let body = request.request().body().map(|b| b.as_ref());
        check!(body == Some(b"visibility=unlisted".as_slice()));
    }

    #[test]
    fn mute_conversation_path() {
        let client = client();
        let request = client.statuses().mute_conversation("5");
        check!(request.request().url().path() == "/api/v1/statuses/5/mute");
    }

    #[test]
    fn schedule_status_appends_date() {
        let client = client();
        let request = client
            .statuses()
            .schedule_status(&StatusForm::new("later"), "2030-01-01T00:00:00Z");

        let body = request
            .request()
            .body()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default();
        check!(body == "status=later&scheduled_at=2030-01-01T00%3A00%3A00Z");
    }
}
