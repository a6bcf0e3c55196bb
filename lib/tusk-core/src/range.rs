//! Pagination bounds.

use url::Url;

use crate::{Parameters, ToParameters};

/// Optional pagination bounds for collection endpoints.
///
/// A `Range` is either built by the caller or derived from a `Link` header
/// (see [`crate::Pageable::next`]). Mastodon ids are opaque strings.
///
/// # Example
///
/// ```
/// use tusk_core::{Range, ToParameters};
///
/// let range = Range::new().with_max_id("109").with_limit(40);
/// assert_eq!(range.to_parameters().to_query_string(), "max_id=109&limit=40");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Range {
    max_id: Option<String>,
    min_id: Option<String>,
    since_id: Option<String>,
    limit: Option<u32>,
}

impl Range {
    /// An unbounded range: the server picks the first page and its size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only results older than this id.
    #[must_use]
    pub fn with_max_id(mut self, max_id: impl Into<String>) -> Self {
        self.max_id = Some(max_id.into());
        self
    }

    /// Results immediately newer than this id.
    #[must_use]
    pub fn with_min_id(mut self, min_id: impl Into<String>) -> Self {
        self.min_id = Some(min_id.into());
        self
    }

    /// Only results newer than this id.
    #[must_use]
    pub fn with_since_id(mut self, since_id: impl Into<String>) -> Self {
        self.since_id = Some(since_id.into());
        self
    }

    /// Maximum number of results.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Upper id bound.
    #[must_use]
    pub fn max_id(&self) -> Option<&str> {
        self.max_id.as_deref()
    }

    /// Lower id bound, adjacent results.
    #[must_use]
    pub fn min_id(&self) -> Option<&str> {
        self.min_id.as_deref()
    }

    /// Lower id bound.
    #[must_use]
    pub fn since_id(&self) -> Option<&str> {
        self.since_id.as_deref()
    }

    /// Page size.
    #[must_use]
    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Returns `true` if no bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.max_id.is_none()
            && self.min_id.is_none()
            && self.since_id.is_none()
            && self.limit.is_none()
    }

    /// Extract the bounds from the query string of a pagination URL.
    ///
    /// Unknown parameters are ignored; an unparsable `limit` is dropped.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        url.query_pairs()
            .fold(Self::new(), |range, (key, value)| match key.as_ref() {
                "max_id" => range.with_max_id(value),
                "min_id" => range.with_min_id(value),
                "since_id" => range.with_since_id(value),
                "limit" => match value.parse() {
                    Ok(limit) => range.with_limit(limit),
                    Err(_) => range,
                },
                _ => range,
            })
    }
}

impl ToParameters for Range {
    fn to_parameters(&self) -> Parameters {
        Parameters::new()
            .append_opt("max_id", self.max_id.as_deref())
            .append_opt("min_id", self.min_id.as_deref())
            .append_opt("since_id", self.since_id.as_deref())
            .append_opt("limit", self.limit)
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn unbounded_range_has_no_parameters() {
        let range = Range::new();
        check!(range.is_unbounded());
        check!(range.to_parameters().is_empty());
    }

    #[test]
    fn parameters_follow_fixed_order() {
        let range = Range::new()
            .with_limit(20)
            .with_since_id("5")
            .with_min_id("7")
            .with_max_id("9");

        check!(
            range.to_parameters().to_query_string() == "max_id=9&min_id=7&since_id=5&limit=20"
        );
    }

    #[test]
    fn to_parameters_is_pure() {
        let range = Range::new().with_max_id("42");
        let first = range.to_parameters();
        let second = range.to_parameters();

        check!(first == second);
        check!(range.max_id() == Some("42"));
    }

    #[test]
    fn from_url_extracts_bounds() {
        let url = Url::parse(
            "https://mastodon.social/api/v1/timelines/home?limit=40&max_id=109836&exclude_replies=true",
        )
        .expect("valid URL");

        let range = Range::from_url(&url);

        check!(range.max_id() == Some("109836"));
        check!(range.limit() == Some(40));
        check!(range.min_id().is_none());
        check!(range.since_id().is_none());
    }

    #[test]
    fn from_url_ignores_bad_limit() {
        let url = Url::parse("https://example.org/api/v1/blocks?limit=lots&min_id=3")
            .expect("valid URL");

        let range = Range::from_url(&url);

        check!(range.limit().is_none());
        check!(range.min_id() == Some("3"));
    }
}
