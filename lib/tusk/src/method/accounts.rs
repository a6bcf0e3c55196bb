use crate::entity::{Account, Relationship, Status, Visibility};
use crate::mapper::{map_entity, map_list, map_pageable};
use crate::{MastodonRequest, Method, Pageable, Parameters, Range, ToParameters};

method_group! {
    /// Accounts, relationships and account actions.
    Accounts
}

/// Filters for [`Accounts::statuses`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountStatusesQuery {
    only_media: bool,
    pinned: bool,
    exclude_replies: bool,
    exclude_reblogs: bool,
    tagged: Option<String>,
}

impl AccountStatusesQuery {
    /// No filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only statuses with media attachments.
    #[must_use]
    pub const fn only_media(mut self) -> Self {
        self.only_media = true;
        self
    }

    /// Only pinned statuses.
    #[must_use]
    pub const fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Skip replies.
    #[must_use]
    pub const fn exclude_replies(mut self) -> Self {
        self.exclude_replies = true;
        self
    }

    /// Skip reblogs.
    #[must_use]
    pub const fn exclude_reblogs(mut self) -> Self {
        self.exclude_reblogs = true;
        self
    }

    /// Only statuses using this hashtag.
    #[must_use]
    pub fn tagged(mut self, hashtag: impl Into<String>) -> Self {
        self.tagged = Some(hashtag.into());
        self
    }
}

impl ToParameters for AccountStatusesQuery {
    fn to_parameters(&self) -> Parameters {
        Parameters::new()
            .append_opt("only_media", self.only_media.then_some(true))
            .append_opt("pinned", self.pinned.then_some(true))
            .append_opt("exclude_replies", self.exclude_replies.then_some(true))
            .append_opt("exclude_reblogs", self.exclude_reblogs.then_some(true))
            .append_opt("tagged", self.tagged.as_deref())
    }
}

/// Profile changes for [`Accounts::update_credentials`]. Unset fields are
/// left unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsForm {
    display_name: Option<String>,
    note: Option<String>,
    locked: Option<bool>,
    bot: Option<bool>,
    discoverable: Option<bool>,
    fields: Vec<(String, String)>,
    privacy: Option<Visibility>,
    sensitive: Option<bool>,
    language: Option<String>,
}

impl CredentialsForm {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name.
    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the bio, as plain text.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Require approval of new followers.
    #[must_use]
    pub const fn locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    /// Mark the account as automated.
    #[must_use]
    pub const fn bot(mut self, bot: bool) -> Self {
        self.bot = Some(bot);
        self
    }

    /// List the account in the profile directory.
    #[must_use]
    pub const fn discoverable(mut self, discoverable: bool) -> Self {
        self.discoverable = Some(discoverable);
        self
    }

    /// Add a row to the profile metadata table; rows replace the existing table.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Default visibility of new statuses.
    #[must_use]
    pub const fn privacy(mut self, privacy: Visibility) -> Self {
        self.privacy = Some(privacy);
        self
    }

    /// Mark new media as sensitive by default.
    #[must_use]
    pub const fn sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = Some(sensitive);
        self
    }

    /// Default language of new statuses (ISO 639-1).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl ToParameters for CredentialsForm {
    fn to_parameters(&self) -> Parameters {
        let params = Parameters::new()
            .append_opt("display_name", self.display_name.as_deref())
            .append_opt("note", self.note.as_deref())
            .append_opt("locked", self.locked)
            .append_opt("bot", self.bot)
            .append_opt("discoverable", self.discoverable);

        let params = self
            .fields
            .iter()
            .enumerate()
            .fold(params, |params, (index, (name, value))| {
                params
                    .append(format!("fields_attributes[{index}][name]"), name)
                    .append(format!("fields_attributes[{index}][value]"), value)
            });

        params
            .append_opt("source[privacy]", self.privacy)
            .append_opt("source[sensitive]", self.sensitive)
            .append_opt("source[language]", self.language.as_deref())
    }
}

impl<C> Accounts<'_, C> {
    /// `GET accounts/:id`.
    #[must_use]
    pub fn account(&self, id: &str) -> MastodonRequest<C, Account> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["accounts", id]),
            &Parameters::new(),
            map_entity,
        )
    }

    /// `GET accounts/verify_credentials`: the authenticated user, with `source`.
    #[must_use]
    pub fn verify_credentials(&self) -> MastodonRequest<C, Account> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["accounts", "verify_credentials"]),
            &Parameters::new(),
            map_entity,
        )
    }

    /// `PATCH accounts/update_credentials`.
    #[must_use]
    pub fn update_credentials(&self, form: &CredentialsForm) -> MastodonRequest<C, Account> {
        self.client.prepare(
            Method::Patch,
            self.client.v1(&["accounts", "update_credentials"]),
            &form.to_parameters(),
            map_entity,
        )
    }

    /// `GET accounts/:id/followers`.
    #[must_use]
    pub fn followers(&self, id: &str, range: &Range) -> MastodonRequest<C, Pageable<Account>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["accounts", id, "followers"]),
            &range.to_parameters(),
            map_pageable,
        )
    }

    /// `GET accounts/:id/following`.
    #[must_use]
    pub fn following(&self, id: &str, range: &Range) -> MastodonRequest<C, Pageable<Account>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["accounts", id, "following"]),
            &range.to_parameters(),
            map_pageable,
        )
    }

    /// `GET accounts/:id/statuses`.
    #[must_use]
    pub fn statuses(
        &self,
        id: &str,
        query: &AccountStatusesQuery,
        range: &Range,
    ) -> MastodonRequest<C, Pageable<Status>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["accounts", id, "statuses"]),
            &query.to_parameters().extend(range.to_parameters()),
            map_pageable,
        )
    }

    /// `POST accounts/:id/follow`. `reblogs` controls whether their reblogs
    /// show up in the home timeline.
    #[must_use]
    pub fn follow(&self, id: &str, reblogs: bool) -> MastodonRequest<C, Relationship> {
        self.action(id, "follow", &Parameters::new().append("reblogs", reblogs))
    }

    /// `POST accounts/:id/unfollow`.
    #[must_use]
    pub fn unfollow(&self, id: &str) -> MastodonRequest<C, Relationship> {
        self.action(id, "unfollow", &Parameters::new())
    }

    /// `POST accounts/:id/block`.
    #[must_use]
    pub fn block(&self, id: &str) -> MastodonRequest<C, Relationship> {
        self.action(id, "block", &Parameters::new())
    }

    /// `POST accounts/:id/unblock`.
    #[must_use]
    pub fn unblock(&self, id: &str) -> MastodonRequest<C, Relationship> {
        self.action(id, "unblock", &Parameters::new())
    }

    /// `POST accounts/:id/mute`, optionally muting their notifications too.
    #[must_use]
    pub fn mute(&self, id: &str, notifications: bool) -> MastodonRequest<C, Relationship> {
        self.action(
            id,
            "mute",
            &Parameters::new().append("notifications", notifications),
        )
    }

    /// `POST accounts/:id/unmute`.
    #[must_use]
    pub fn unmute(&self, id: &str) -> MastodonRequest<C, Relationship> {
        self.action(id, "unmute", &Parameters::new())
    }

    /// `GET accounts/relationships` for several accounts at once.
    #[must_use]
    pub fn relationships(&self, ids: &[&str]) -> MastodonRequest<C, Vec<Relationship>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["accounts", "relationships"]),
            &Parameters::new().append_all("id", ids),
            map_list,
        )
    }

    /// `GET accounts/search`. `resolve` looks up remote accounts through
    /// webfinger, `following` restricts matches to followed accounts.
    #[must_use]
    pub fn search(
        &self,
        q: &str,
        limit: Option<u32>,
        resolve: bool,
        following: bool,
    ) -> MastodonRequest<C, Vec<Account>> {
        let params = Parameters::new()
            .append("q", q)
            .append_opt("limit", limit)
            .append("resolve", resolve)
            .append("following", following);

        self.client.prepare(
            Method::Get,
            self.client.v1(&["accounts", "search"]),
            &params,
            map_list,
        )
    }

    fn action(
        &self,
        id: &str,
        action: &str,
        params: &Parameters,
    ) -> MastodonRequest<C, Relationship> {
        self.client.prepare(
            Method::Post,
            self.client.v1(&["accounts", id, action]),
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
    fn statuses_query_then_range() {
        let client = client();
        let request = client.accounts().statuses(
            "42",
            &AccountStatusesQuery::new().exclude_replies().tagged("rust"),
            &Range::new().with_max_id("100").with_limit(20),
        );

        check!(request.request().url().path() == "/api/v1/accounts/42/statuses");
        check!(
            request.request().url().query()
                == Some("exclude_replies=true&tagged=rust&max_id=100&limit=20")
        );
    }

    #[test]
    fn relationships_use_array_parameter() {
        let client = client();
        let request = client.accounts().relationships(&["1", "2"]);

        check!(request.request().url().query() == Some("id%5B%5D=1&id%5B%5D=2"));
    }

    #[test]
    fn mute_sends_notifications_flag() {
        let client = client();
        let request = client.accounts().mute("7", false);

        check!(request.request().url().path() == "/api/v1/accounts/7/mute");
        let body = request.request().body().map(|b| b.as_ref());
        check!(body == Some(b"notifications=false".as_slice()));
    }

    #[test]
    fn credentials_form_fields() {
        let params = CredentialsForm::new()
            .display_name("Tusk")
            .field("Pronouns", "they/them")
            .field("Site", "https://example.org")
            .privacy(Visibility::Unlisted)
            .to_parameters();

        check!(params.get("display_name") == Some("Tusk"));
        check!(params.get("fields_attributes[0][name]") == Some("Pronouns"));
        check!(params.get("fields_attributes[1][value]") == Some("https://example.org"));
        check!(params.get("source[privacy]") == Some("unlisted"));
        check!(params.get("note").is_none());
    }

    #[test]
    fn update_credentials_is_patch() {
        let client = client();
        let request = client
            .accounts()
            .update_credentials(&CredentialsForm::new().bot(true));

        check!(request.request().method() == Method::Patch);
    }
}
