use super::Single;
use crate::HttpClient;
use crate::entity::Attachment;
use crate::method::MediaUpload;

rx_group! {
    /// [`Media`](crate::method::Media) as [`Single`]s.
    RxMedia
}

impl<C: HttpClient + 'static> RxMedia<C> {
    /// See [`Media::upload`](crate::method::Media::upload).
    pub fn upload(&self, upload: MediaUpload) -> Single<Attachment> {
        Single::from_request(self.client.media().upload(upload))
    }

    /// See [`Media::attachment`](crate::method::Media::attachment).
    pub fn attachment(&self, id: &str) -> Single<Attachment> {
        Single::from_request(self.client.media().attachment(id))
    }

    /// See [`Media::update`](crate::method::Media::update).
    pub fn update(
        &self,
        id: &str,
        description: Option<&str>,
        focus: Option<(f64, f64)>,
    ) -> Single<Attachment> {
        Single::from_request(self.client.media().update(id, description, focus))
    }
}
