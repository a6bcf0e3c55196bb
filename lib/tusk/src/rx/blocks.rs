use super::{Completable, Single};
use crate::entity::Account;
use crate::{HttpClient, Pageable, Range};

rx_group! {
    /// [`Blocks`](crate::method::Blocks) as a [`Single`].
    RxBlocks
}

rx_group! {
    /// [`Mutes`](crate::method::Mutes) as a [`Single`].
    RxMutes
}

rx_group! {
    /// [`DomainBlocks`](crate::method::DomainBlocks) as [`Single`]s and
    /// [`Completable`]s.
    RxDomainBlocks
}

impl<C: HttpClient + 'static> RxBlocks<C> {
    /// See [`Blocks::blocks`](crate::method::Blocks::blocks).
    pub fn blocks(&self, range: &Range) -> Single<Pageable<Account>> {
        Single::from_request(self.client.blocks().blocks(range))
    }
}

impl<C: HttpClient + 'static> RxMutes<C> {
    /// See [`Mutes::mutes`](crate::method::Mutes::mutes).
    pub fn mutes(&self, range: &Range) -> Single<Pageable<Account>> {
        Single::from_request(self.client.mutes().mutes(range))
    }
}

impl<C: HttpClient + 'static> RxDomainBlocks<C> {
    /// See [`DomainBlocks::domain_blocks`](crate::method::DomainBlocks::domain_blocks).
    pub fn domain_blocks(&self, range: &Range) -> Single<Pageable<String>> {
        Single::from_request(self.client.domain_blocks().domain_blocks(range))
    }

    /// See [`DomainBlocks::block_domain`](crate::method::DomainBlocks::block_domain).
    pub fn block_domain(&self, domain: &str) -> Completable {
        Completable::from_request(self.client.domain_blocks().block_domain(domain))
    }

    /// See [`DomainBlocks::unblock_domain`](crate::method::DomainBlocks::unblock_domain).
    pub fn unblock_domain(&self, domain: &str) -> Completable {
        Completable::from_request(self.client.domain_blocks().unblock_domain(domain))
    }
}
