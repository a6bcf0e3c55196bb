use crate::entity::Results;
use crate::mapper::map_entity;
use crate::{MastodonRequest, Method, Parameters, Range, ToParameters};

method_group! {
    /// Full-text search.
    Search
}

/// Options for [`Search::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    q: String,
    kind: Option<String>,
    resolve: bool,
    following: bool,
    account_id: Option<String>,
}

impl SearchQuery {
    /// Search for `q`.
    #[must_use]
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    /// Restrict to `accounts`, `hashtags` or `statuses`.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Look up remote accounts and statuses by URL or handle.
    #[must_use]
    pub const fn resolve(mut self) -> Self {
        self.resolve = true;
        self
    }

    /// Only accounts the user follows.
    #[must_use]
    pub const fn following(mut self) -> Self {
        self.following = true;
        self
    }

    /// Only statuses by this account.
    #[must_use]
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }
}

impl ToParameters for SearchQuery {
    fn to_parameters(&self) -> Parameters {
        Parameters::new()
            .append("q", &self.q)
            .append_opt("type", self.kind.as_deref())
            .append("resolve", self.resolve)
            .append_opt("following", self.following.then_some(true))
            .append_opt("account_id", self.account_id.as_deref())
    }
}

impl<C> Search<'_, C> {
    /// `GET /api/v2/search`.
    #[must_use]
    pub fn search(&self, query: &SearchQuery, range: &Range) -> MastodonRequest<C, Results> {
        self.client.prepare(
            Method::Get,
            self.client.v2(&["search"]),
            &query.to_parameters().extend(range.to_parameters()),
            map_entity,
        )
    }
}
