//! HTTP response handling.
//!
//! [`Response`] provides access to status, headers, and body with JSON deserialization.
//!
//! # Example
//!
//! ```ignore
//! let status: Status = response.json()?;
//! ```

use std::collections::HashMap;

use bytes::Bytes;

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: u16,
    headers: HashMap<String, String>,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, HashMap<String, String>, B) {
        (self.status, self.headers, self.body)
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }
}

impl Response<Bytes> {
    /// Deserialize the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn json<T: serde::de::DeserializeOwned>(self) -> crate::Result<T> {
        crate::from_json(&self.body)
    }

    /// Turn a non-2xx response into [`crate::Error::Http`].
    ///
    /// # Errors
    ///
    /// Returns the HTTP error, carrying status and body, if the status is not 2xx.
    pub fn error_for_status(self) -> crate::Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(crate::Error::from_status(self.status, self.body))
        }
    }

    /// Get the response body as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid UTF-8.
    pub fn text(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_basic() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        let response = Response::new(200, headers, Bytes::from(r#"{"id":"1"}"#));

        assert_eq!(response.status(), 200);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert!(response.is_success());
        assert!(!response.is_client_error());
        assert!(!response.is_server_error());
    }

    #[test]
    fn response_status_checks() {
        let response = Response::new(422, HashMap::new(), Bytes::new());
        assert!(response.is_client_error());

        let response = Response::new(503, HashMap::new(), Bytes::new());
        assert!(response.is_server_error());
    }

    #[test]
    fn response_json() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Tag {
            name: String,
        }

        let response = Response::new(200, HashMap::new(), Bytes::from(r#"{"name":"rust"}"#));

        let tag: Tag = response.json().expect("deserialize");
        assert_eq!(
            tag,
            Tag {
                name: "rust".to_string()
            }
        );
    }

    #[test]
    fn error_for_status_passes_success() {
        let response = Response::new(204, HashMap::new(), Bytes::new());
        assert!(response.error_for_status().is_ok());
    }

    #[test]
    fn error_for_status_carries_status_and_body() {
        let body = Bytes::from(r#"{"error":"This action is not allowed"}"#);
        let response = Response::new(403, HashMap::new(), body.clone());

        let err = response.error_for_status().expect_err("403 is an error");
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.body(), Some(&body));
        assert_eq!(err.to_string(), "HTTP error 403: This action is not allowed");
    }

    #[test]
    fn response_text() {
        let response = Response::new(200, HashMap::new(), Bytes::from("{}"));
        assert_eq!(response.text().expect("text"), "{}");
    }
}
