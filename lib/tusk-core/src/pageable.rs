//! One page of a paginated collection.

use bytes::Bytes;
use url::Url;

use crate::{Range, Response, Result, link::parse_link_header};

/// The items of one page plus the cursors to its neighbours.
///
/// Cursors come from the `Link` response header: the query parameters of the
/// `rel="next"` URL become [`Pageable::next`], those of `rel="prev"` become
/// [`Pageable::prev`]. A missing direction means iteration stops there.
///
/// # Example
///
/// ```ignore
/// let mut range = Range::new().with_limit(40);
/// loop {
///     let page = client.timelines().home(&range).execute().await?;
///     for status in page.iter() {
///         println!("{}", status.content);
///     }
///     match page.next() {
///         Some(next) => range = next.clone(),
///         None => break,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pageable<T> {
    items: Vec<T>,
    next: Option<Range>,
    prev: Option<Range>,
}

impl<T> Pageable<T> {
    /// Creates a page from its items and cursors.
    #[must_use]
    pub fn new(items: Vec<T>, next: Option<Range>, prev: Option<Range>) -> Self {
        Self { items, next, prev }
    }

    /// Creates a page from its items and a raw `Link` header value.
    ///
    /// Relative or malformed link URLs yield no cursor.
    #[must_use]
    pub fn with_link_header(items: Vec<T>, link_header: Option<&str>) -> Self {
        let links = link_header.map(parse_link_header).unwrap_or_default();
        let cursor = |url: Option<&str>| {
            url.and_then(|u| Url::parse(u).ok())
                .map(|u| Range::from_url(&u))
        };

        Self {
            next: cursor(links.next()),
            prev: cursor(links.prev()),
            items,
        }
    }

    /// Items of this page, in server order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume into the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Bounds for fetching the next (older) page.
    #[must_use]
    pub const fn next(&self) -> Option<&Range> {
        self.next.as_ref()
    }

    /// Bounds for fetching the previous (newer) page.
    #[must_use]
    pub const fn prev(&self) -> Option<&Range> {
        self.prev.as_ref()
    }

    /// Returns `true` if the server advertised a next page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if the server advertised a previous page.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the page has no item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Transform the items, keeping the cursors.
    pub fn map<U, F>(self, f: F) -> Pageable<U>
    where
        F: FnMut(T) -> U,
    {
        Pageable {
            items: self.items.into_iter().map(f).collect(),
            next: self.next,
            prev: self.prev,
        }
    }
}

impl<T: serde::de::DeserializeOwned> Pageable<T> {
    /// Parse a collection response: JSON list body plus `Link` header.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a JSON list of `T`.
    pub fn from_response(response: Response<Bytes>) -> Result<Self> {
        let link_header = response.header("link").map(str::to_string);
        let items: Vec<T> = response.json()?;
        Ok(Self::with_link_header(items, link_header.as_deref()))
    }
}

impl<T> IntoIterator for Pageable<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Pageable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::check;

    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Item {
        id: String,
    }

    fn response(headers: &[(&str, &str)], body: &'static str) -> Response<Bytes> {
        let headers: HashMap<String, String> = headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Response::new(200, headers, Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn from_response_with_both_links() {
        let link = r#"<https://m.example/api/v1/timelines/home?limit=2&max_id=100>; rel="next", <https://m.example/api/v1/timelines/home?limit=2&min_id=105>; rel="prev""#;
        let response = response(&[("Link", link)], r#"[{"id":"105"},{"id":"101"}]"#);

        let page: Pageable<Item> = Pageable::from_response(response).expect("page");

        check!(page.len() == 2);
        let next = page.next().expect("next cursor");
        check!(next.max_id() == Some("100"));
        check!(next.limit() == Some(2));
        let prev = page.prev().expect("prev cursor");
        check!(prev.min_id() == Some("105"));
        check!(prev.max_id().is_none());
    }

    #[test]
    fn from_response_without_link() {
        let response = response(&[], r#"[{"id":"1"}]"#);

        let page: Pageable<Item> = Pageable::from_response(response).expect("page");

        check!(page.items() == &[Item { id: "1".to_string() }]);
        check!(!page.has_next());
        check!(!page.has_prev());
    }

    #[test]
    fn from_response_rejects_non_list() {
        let response = response(&[], r#"{"error":"nope"}"#);

        let result: Result<Pageable<Item>> = Pageable::from_response(response);

        check!(result.is_err());
    }

    #[test]
    fn relative_link_yields_no_cursor() {
        let page: Pageable<Item> = Pageable::with_link_header(
            Vec::new(),
            Some(r#"</api/v1/blocks?max_id=3>; rel="next""#),
        );

        check!(page.is_empty());
        check!(page.next().is_none());
    }

    #[test]
    fn map_keeps_cursors() {
        let page = Pageable::new(
            vec![Item { id: "7".to_string() }],
            Some(Range::new().with_max_id("7")),
            None,
        );

        let ids = page.map(|item| item.id);

        check!(ids.items() == &["7".to_string()]);
        check!(ids.next().and_then(Range::max_id) == Some("7"));
    }
}
