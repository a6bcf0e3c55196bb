//! `Link` response header parsing.
//!
//! Mastodon paginates collections with RFC 8288 links:
//!
//! ```text
//! <https://mastodon.social/api/v1/timelines/home?max_id=109>; rel="next",
//! <https://mastodon.social/api/v1/timelines/home?min_id=120>; rel="prev"
//! ```

/// Parsed `Link` header: relation types mapped to their target URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkHeader {
    links: Vec<(String, String)>,
}

impl LinkHeader {
    /// URL for a relation type, compared case-insensitively.
    #[must_use]
    pub fn get(&self, rel: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|(r, _)| r.eq_ignore_ascii_case(rel))
            .map(|(_, url)| url.as_str())
    }

    /// URL of the next (older) page.
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.get("next")
    }

    /// URL of the previous (newer) page; `rel="previous"` is accepted too.
    #[must_use]
    pub fn prev(&self) -> Option<&str> {
        self.get("prev").or_else(|| self.get("previous"))
    }

    /// Returns `true` if no link was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Parse a `Link` header value.
///
/// Entries without a `<url>` or without a `rel` parameter are skipped, and a
/// `rel` holding several space-separated types registers the URL for each.
/// The first URL seen for a relation wins.
#[must_use]
pub fn parse_link_header(header: &str) -> LinkHeader {
    let mut links: Vec<(String, String)> = Vec::new();

    for part in header.split(',') {
        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if let Some(inner) = segment
                .strip_prefix('<')
                .and_then(|s| s.strip_suffix('>'))
            {
                url = Some(inner.trim());
            } else if let Some((name, value)) = segment.split_once('=')
                && name.trim().eq_ignore_ascii_case("rel")
            {
                rel = Some(value.trim().trim_matches('"'));
            }
        }

        if let (Some(url), Some(rel)) = (url, rel) {
            for rel_type in rel.split_whitespace() {
                if !links.iter().any(|(r, _)| r.eq_ignore_ascii_case(rel_type)) {
                    links.push((rel_type.to_ascii_lowercase(), url.to_string()));
                }
            }
        }
    }

    LinkHeader { links }
}
