//! # Client configuration: `society.toml`
//!
//! The web app embeds its `society.toml` at build time. Every section and key
//! is optional; a missing key takes its default.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000/api"
//!
//! [notifications]
//! duration_secs = 5        # 0 keeps toasts until dismissed
//!
//! [pagination]
//! default_page_size = 10   # one of 10, 20, 50, 100
//!
//! [uploads]
//! image_max_bytes = 2097152
//! pdf_max_bytes = 10485760
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Backend base URL. |
//! | [`NotificationConfig`] | How long toasts stay up. |
//! | [`PaginationConfig`] | Initial page size of every table. |
//! | [`UploadLimits`] | Attachment size caps (defined in [`crate::upload`]). |

use serde::{Deserialize, Serialize};

use crate::pagination::{Pagination, DEFAULT_PAGE_SIZE};
use crate::upload::UploadLimits;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid society.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialise config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("base URL must start with http:// or https://, got `{0}`")]
    InvalidBaseUrl(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub uploads: UploadLimits,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Seconds a toast stays visible. 0 disables auto-dismiss.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u32,
}

fn default_duration_secs() -> u32 {
    5
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

impl ClientConfig {
    pub fn filename() -> &'static str {
        "society.toml"
    }

    /// Parse and validate.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Like [`from_toml`](Self::from_toml), but a broken file yields the
    /// defaults and a warning instead of an error.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("falling back to default client config: {e}");
            Self::default()
        })
    }

    /// Builder method to override the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidBaseUrl(url.clone()))
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// A fresh cursor at the configured page size.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.pagination.default_page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url(), "http://localhost:3000/api");
        assert_eq!(config.notifications.duration_secs, 5);
        assert_eq!(config.uploads.image_max_bytes, 2 * 1024 * 1024);
        assert_eq!(config.uploads.pdf_max_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://society.example/api/"

            [pagination]
            default_page_size = 20

            [uploads]
            image_max_bytes = 1048576
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://society.example/api");
        assert_eq!(config.pagination().page_size(), 20);
        assert_eq!(config.uploads.image_max_bytes, 1024 * 1024);
        assert_eq!(config.uploads.pdf_max_bytes, 10 * 1024 * 1024);
        assert_eq!(config.notifications.duration_secs, 5);
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let err = ClientConfig::from_toml("[api]\nbase_url = \"ftp://x\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_broken_file_falls_back() {
        let config = ClientConfig::from_toml_or_default("[api\nbase_url =");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_unsupported_page_size_is_normalised() {
        let config = ClientConfig::from_toml("[pagination]\ndefault_page_size = 15").unwrap();
        assert_eq!(config.pagination().page_size(), 10);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ClientConfig::default().with_base_url("https://a.example/api");
        let parsed = ClientConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
