use crate::entity::Account;
use crate::mapper::{map_empty, map_pageable};
use crate::{MastodonRequest, Method, Pageable, Parameters, Range, ToParameters};

method_group! {
    /// Accounts the user blocked.
    Blocks
}

method_group! {
    /// Accounts the user muted.
    Mutes
}

method_group! {
    /// Domains the user has hidden.
    DomainBlocks
}

impl<C> Blocks<'_, C> {
    /// `GET blocks`.
    #[must_use]
    pub fn blocks(&self, range: &Range) -> MastodonRequest<C, Pageable<Account>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["blocks"]),
            &range.to_parameters(),
            map_pageable,
        )
    }
}

impl<C> Mutes<'_, C> {
    /// `GET mutes`.
    #[must_use]
    pub fn mutes(&self, range: &Range) -> MastodonRequest<C, Pageable<Account>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["mutes"]),
            &range.to_parameters(),
            map_pageable,
        )
    }
}

impl<C> DomainBlocks<'_, C> {
    /// `GET domain_blocks`: blocked domain names.
    #[must_use]
    pub fn domain_blocks(&self, range: &Range) -> MastodonRequest<C, Pageable<String>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["domain_blocks"]),
            &range.to_parameters(),
            map_pageable,
        )
    }

    /// `POST domain_blocks`: hide everything from `domain`.
    #[must_use]
    pub fn block_domain(&self, domain: &str) -> MastodonRequest<C, ()> {
        self.client.prepare(
            Method::Post,
            self.client.v1(&["domain_blocks"]),
            &Parameters::new().append("domain", domain),
            map_empty,
        )
    }

    /// `DELETE domain_blocks`.
    #[must_use]
    pub fn unblock_domain(&self, domain: &str) -> MastodonRequest<C, ()> {
        self.client.prepare(
            Method::Delete,
            self.client.v1(&["domain_blocks"]),
            &Parameters::new().append("domain", domain),
            map_empty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MastodonClient, MastodonConfig};

    #[test]
    fn unblock_domain_sends_domain_in_query() {
        let client = MastodonClient::with_http(
            MastodonConfig::builder("mastodon.example")
                .build()
                .expect("config"),
            (),
        );

        let request = client.domain_blocks().unblock_domain("spam.example");

        assert_eq!(request.request().method(), Method::Delete);
        assert_eq!(request.request().url().query(), Some("domain=spam.example"));
        assert!(request.request().body().is_none());
    }
}
