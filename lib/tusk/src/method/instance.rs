use crate::entity::{Emoji, Instance};
use crate::mapper::{map_entity, map_list};
use crate::{MastodonRequest, Method, Parameters};

method_group! {
    /// Instance metadata; no token needed.
    Instances
}

impl<C> Instances<'_, C> {
    /// `GET instance`.
    #[must_use]
    pub fn instance(&self) -> MastodonRequest<C, Instance> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["instance"]),
            &Parameters::new(),
            map_entity,
        )
    }

    /// `GET instance/peers`: domains this instance federates with.
    #[must_use]
    pub fn peers(&self) -> MastodonRequest<C, Vec<String>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["instance", "peers"]),
            &Parameters::new(),
            map_list,
        )
    }

    /// `GET custom_emojis`.
    #[must_use]
    pub fn custom_emojis(&self) -> MastodonRequest<C, Vec<Emoji>> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["custom_emojis"]),
            &Parameters::new(),
            map_list,
        )
    }
}
