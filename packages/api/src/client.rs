//! # HTTP client over the society backend
//!
//! [`ApiClient`] owns one `reqwest::Client` and the configured base URL. Every
//! request carries the session cookie: the browser build asks `fetch` for
//! `credentials: include`, native builds keep a cookie jar.
//!
//! Responses are read as text first so that error bodies can be mined for a
//! message and success bodies can be unwrapped from the `{success, message,
//! data}` envelope when present.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use store::upload::FormPart;
use store::ClientConfig;

use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidConfig(format!(
                "base URL must be absolute, got `{base_url}`"
            )));
        }
        Ok(Self {
            http: build_http()?,
            base_url,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        with_credentials(self.http.request(method, self.url(path)))
    }

    /// Send and return the body of a successful response.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("request failed to reach backend: {e}");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if status.is_success() {
            return Ok(body);
        }
        let err = ApiError::from_response(status.as_u16(), &body);
        if err.is_unauthorized() {
            tracing::debug!(%url, "backend answered 401");
        } else {
            tracing::warn!(%url, status = status.as_u16(), "request rejected: {err}");
        }
        Err(err)
    }

    /// Send and decode a single resource, unwrapping the envelope and an
    /// optional named wrapper (`{"data": {"notice": {...}}}`).
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        key: Option<&str>,
    ) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        decode_resource(&body, key)
    }

    /// Send and decode a bare `{data, total}` page.
    pub(crate) async fn fetch_page<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<store::Page<T>, ApiError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and ignore the body.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send(request).await.map(drop)
    }
}

/// Clients targeting the same backend are interchangeable.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .map_err(|e| ApiError::InvalidConfig(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn build_http() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| ApiError::InvalidConfig(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

/// Decode a single resource from `body`.
///
/// Accepts `{"data": T}`, `{"data": {key: T}}`, `{key: T}` and a bare `T`.
pub fn decode_resource<T: DeserializeOwned>(body: &str, key: Option<&str>) -> Result<T, ApiError> {
    let mut value: Value =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(data) = value.get_mut("data").map(Value::take) {
        value = data;
    }
    if let Some(inner) = key.and_then(|key| value.get_mut(key)).map(Value::take) {
        value = inner;
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Build a multipart body from ordered parts.
pub fn multipart_form(parts: Vec<FormPart>) -> Result<reqwest::multipart::Form, ApiError> {
    use reqwest::multipart::{Form, Part};

    parts.into_iter().try_fold(Form::new(), |form, part| match part {
        FormPart::Text { name, value } => Ok(form.text(name, value)),
        FormPart::File { name, file } => {
            let part = Part::bytes(file.bytes)
                .file_name(file.name)
                .mime_str(&file.mime)
                .map_err(|e| ApiError::Encode(e.to_string()))?;
            Ok(form.part(name, part))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Notice, User};

    #[test]
    fn test_base_url_is_normalised() {
        let client = ApiClient::new("http://localhost:3000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(client.url("/users/me"), "http://localhost:3000/api/users/me");
        assert_eq!(client.url("notices"), "http://localhost:3000/api/notices");
    }

    #[test]
    fn test_relative_base_url_is_rejected() {
        assert!(matches!(
            ApiClient::new("/api"),
            Err(ApiError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_default_config() {
        let client = ApiClient::from_config(&ClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn test_decode_enveloped_user() {
        let user: User = decode_resource(
            r#"{"success":true,"message":"ok","data":{"userId":"9","role":"admin","email":"a@b.c"}}"#,
            None,
        )
        .unwrap();
        assert_eq!(user.id, "9");
    }

    #[test]
    fn test_decode_bare_user() {
        let user: User = decode_resource(r#"{"userId":9,"role":"resident"}"#, None).unwrap();
        assert_eq!(user.id, "9");
    }

    #[test]
    fn test_decode_keyed_notice() {
        let body = r#"{"success":true,"message":"","data":{"notice":
            {"id":4,"title":"t","content":"c","category":"security"}}}"#;
        let notice: Notice = decode_resource(body, Some("notice")).unwrap();
        assert_eq!(notice.id, "4");

        let bare = r#"{"id":4,"title":"t","content":"c","category":"security"}"#;
        let notice: Notice = decode_resource(bare, Some("notice")).unwrap();
        assert_eq!(notice.title, "t");
    }

    #[test]
    fn test_decode_failure() {
        let err = decode_resource::<User>(r#"{"data":{"role":"mayor"}}"#, None).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(matches!(
            decode_resource::<User>("not json", None),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_multipart_rejects_bad_mime() {
        let parts = vec![FormPart::File {
            name: "image",
            file: store::upload::PendingFile {
                name: "x.png".to_string(),
                mime: "not a mime".to_string(),
                bytes: vec![1],
            },
        }];
        assert!(matches!(multipart_form(parts), Err(ApiError::Encode(_))));
    }
}
