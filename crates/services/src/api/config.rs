use std::env;

use thiserror::Error;
use url::Url;

/// Default backend address when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

const BASE_URL_ENV: &str = "AINSTIEN_API_BASE_URL";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid base URL {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        source: url::ParseError,
    },
}

/// Connection settings for the Ainstien backend.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Build a config from an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` when the value does not parse.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = base_url.as_ref();
        let base_url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
            raw: raw.to_string(),
            source,
        })?;
        Ok(Self { base_url })
    }

    /// Read the base URL from `AINSTIEN_API_BASE_URL`, falling back to the
    /// default local backend address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` when the configured value does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(BASE_URL_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::new(raw.trim()),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/chat`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}
