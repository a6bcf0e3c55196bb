//! Response mappers used by the endpoint functions.
//!
//! Each one has the [`Mapper`](crate::Mapper) signature so it can be stored
//! in a [`MastodonRequest`](crate::MastodonRequest) as a plain function pointer.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::{Pageable, Response, Result};

/// A single JSON object.
///
/// # Errors
///
/// Fails when the body does not deserialize into `T`.
pub fn map_entity<T: DeserializeOwned>(response: Response<Bytes>) -> Result<T> {
    response.json()
}

/// A JSON list plus the `next`/`prev` cursors from the `Link` header.
///
/// # Errors
///
/// Fails when the body is not a list of `T`.
pub fn map_pageable<T: DeserializeOwned>(response: Response<Bytes>) -> Result<Pageable<T>> {
    Pageable::from_response(response)
}

/// A JSON list from an endpoint without pagination.
///
/// # Errors
///
/// Fails when the body is not a list of `T`.
pub fn map_list<T: DeserializeOwned>(response: Response<Bytes>) -> Result<Vec<T>> {
    response.json()
}

/// Ignores the body; endpoints like `unfollow` answer with `{}` or nothing.
///
/// # Errors
///
/// Never fails; the signature matches the other mappers.
#[allow(clippy::needless_pass_by_value, clippy::unnecessary_wraps)]
pub fn map_empty(_response: Response<Bytes>) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    fn response(body: &'static str, link: Option<&str>) -> Response<Bytes> {
        let mut headers = HashMap::new();
        if let Some(link) = link {
            headers.insert("Link".to_string(), link.to_string());
        }
        Response::new(200, headers, Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn entity() {
        let item: Item = map_entity(response(r#"{"id":"1"}"#, None)).expect("entity");
        assert_eq!(item, Item { id: "1".into() });
    }

    #[test]
    fn entity_reports_path_on_mismatch() {
        let err = map_entity::<Item>(response(r#"{"id":1}"#, None)).expect_err("wrong type");
        assert!(err.is_deserialization());
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn pageable_with_cursors() {
        let page: Pageable<Item> = map_pageable(response(
            r#"[{"id":"9"},{"id":"8"}]"#,
            Some(
                "<https://m.example/api/v1/timelines/home?max_id=8>; rel=\"next\", \
                 <https://m.example/api/v1/timelines/home?min_id=9>; rel=\"prev\"",
            ),
        ))
        .expect("page");

        assert_eq!(page.len(), 2);
        assert_eq!(page.next().and_then(|r| r.max_id()), Some("8"));
        assert_eq!(page.prev().and_then(|r| r.min_id()), Some("9"));
    }

    #[test]
    fn list_ignores_link() {
        let items: Vec<Item> = map_list(response(r#"[{"id":"1"}]"#, None)).expect("list");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn empty_ignores_body() {
        assert!(map_empty(response("not json", None)).is_ok());
    }
}
