use bytes::Bytes;

use crate::entity::Attachment;
use crate::mapper::map_entity;
use crate::{Form, MastodonRequest, Method, Parameters, Part};

method_group! {
    /// Media attachments.
    Media
}

/// A file to upload with [`Media::upload`].
#[derive(Debug, Clone)]
pub struct MediaUpload {
    filename: String,
    data: Bytes,
    content_type: Option<String>,
    description: Option<String>,
    focus: Option<(f64, f64)>,
}

impl MediaUpload {
    /// Upload `data` as `filename`; the content type is guessed from the extension.
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
            content_type: None,
            description: None,
            focus: None,
        }
    }

    /// Override the guessed content type.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Alt text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Focal point, each axis in `-1.0..=1.0`.
    #[must_use]
    pub const fn focus(mut self, x: f64, y: f64) -> Self {
        self.focus = Some((x, y));
        self
    }

    fn into_form(self) -> Form {
        let file = Part::file("file", self.filename, self.data);
        let file = match self.content_type {
            Some(content_type) => file.with_content_type(content_type),
            None => file,
        };

        let form = Form::new().part(file);
        let form = match self.description {
            Some(description) => form.text("description", description),
            None => form,
        };
        match self.focus {
            Some((x, y)) => form.text("focus", format_focus(x, y)),
            None => form,
        }
    }
}

fn format_focus(x: f64, y: f64) -> String {
    format!("{x},{y}")
}

impl<C> Media<'_, C> {
    /// `POST /api/v2/media` as `multipart/form-data`.
    ///
    /// Large files are processed asynchronously: the returned attachment may
    /// have no `url` yet, poll [`attachment`](Self::attachment) until it does.
    #[must_use]
    pub fn upload(&self, upload: MediaUpload) -> MastodonRequest<C, Attachment> {
        self.client
            .prepare_multipart(self.client.v2(&["media"]), upload.into_form(), map_entity)
    }

    /// `GET media/:id`.
    #[must_use]
    pub fn attachment(&self, id: &str) -> MastodonRequest<C, Attachment> {
        self.client.prepare(
            Method::Get,
            self.client.v1(&["media", id]),
            &Parameters::new(),
            map_entity,
        )
    }

    /// `PUT media/:id`: change alt text or focal point before posting.
    #[must_use]
    pub fn update(
        &self,
        id: &str,
        description: Option<&str>,
        focus: Option<(f64, f64)>,
    ) -> MastodonRequest<C, Attachment> {
        let params = Parameters::new()
            .append_opt("description", description)
            .append_opt("focus", focus.map(|(x, y)| format_focus(x, y)));

        self.client.prepare(
            Method::Put,
            self.client.v1(&["media", id]),
            &params,
            map_entity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MastodonClient, MastodonConfig};

    fn client() -> MastodonClient<()> {
        MastodonClient::with_http(
            MastodonConfig::builder("mastodon.example")
                .build()
                .expect("config"),
            (),
        )
    }

    #[test]
    fn upload_form_parts() {
        let form = MediaUpload::new("cat.png", Bytes::from_static(b"\x89PNG"))
            .description("a cat")
            .focus(0.5, -0.25)
            .into_form();

        let names: Vec<&str> = form.parts().iter().map(Part::name).collect();
        assert_eq!(names, vec!["file", "description", "focus"]);

        let file = form.parts().first().expect("file part");
        assert_eq!(file.filename(), Some("cat.png"));
        assert_eq!(file.content_type(), Some("image/png"));
        assert_eq!(form.parts().get(2).map(|p| p.data().as_ref()), Some(b"0.5,-0.25".as_slice()));
    }

    #[test]
    fn upload_targets_v2() {
        let client = client();
        let request = client
            .media()
            .upload(MediaUpload::new("clip.mp4", vec![0_u8; 4]));

        assert_eq!(request.request().url().path(), "/api/v2/media");
        assert!(
            request
                .request()
                .header("content-type")
                .is_some_and(|ct| ct.starts_with("multipart/form-data; boundary="))
        );
    }

    #[test]
    fn update_is_put_with_form() {
        let client = client();
        let request = client.media().update("12", Some("new alt"), None);

        assert_eq!(request.request().method(), Method::Put);
        assert_eq!(
            request.request().body().map(|b| b.as_ref()),
            Some(b"description=new+alt".as_slice())
        );
    }
}
