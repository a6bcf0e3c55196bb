use super::Single;
use crate::HttpClient;
use crate::entity::{Emoji, Instance};

rx_group! {
    /// [`Instances`](crate::method::Instances) as [`Single`]s.
    RxInstance
}

impl<C: HttpClient + 'static> RxInstance<C> {
    /// See [`Instances::instance`](crate::method::Instances::instance).
    pub fn instance(&self) -> Single<Instance> {
        Single::from_request(self.client.instance().instance())
    }

    /// See [`Instances::peers`](crate::method::Instances::peers).
    pub fn peers(&self) -> Single<Vec<String>> {
        Single::from_request(self.client.instance().peers())
    }

    /// See [`Instances::custom_emojis`](crate::method::Instances::custom_emojis).
    pub fn custom_emojis(&self) -> Single<Vec<Emoji>> {
        Single::from_request(self.client.instance().custom_emojis())
    }
}
