#![deny(missing_docs)]

//! # Client Configuration
//!
//! Connection settings for an `AtlanClient`, built explicitly or read from
//! the environment.

use crate::error::{AtlanResult, ErrorCode};
use url::Url;

/// Environment variable holding the tenant URL.
pub const ENV_BASE_URL: &str = "ATLAN_BASE_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "ATLAN_API_KEY";
/// Environment variable overriding the search page size.
pub const ENV_PAGE_SIZE: &str = "ATLAN_PAGE_SIZE";

/// Page size used by searches unless overridden.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Settings shared by every request issued through a client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    api_key: Option<String>,
    page_size: u32,
    user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("page_size", &self.page_size)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a configuration for the tenant at `base_url`.
    ///
    /// The URL must use `http` or `https`.
    pub fn new(base_url: &str) -> AtlanResult<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(ErrorCode::InvalidBaseUrl.error(&[
                base_url.as_str(),
                "only http and https are supported",
            ]));
        }

        Ok(Self {
            base_url,
            api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: format!("atlan-rust/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Reads the configuration from `ATLAN_BASE_URL`, `ATLAN_API_KEY` and
    /// `ATLAN_PAGE_SIZE`.
    pub fn from_env() -> AtlanResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> AtlanResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                ErrorCode::MissingRequiredQueryParam.error(&["the client configuration", ENV_BASE_URL])
            })?;

        let mut config = Self::new(base_url.trim())?;

        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            config = config.with_api_key(key);
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            let size: u32 = raw.trim().parse().map_err(|_| {
                ErrorCode::InvalidConfigValue
                    .error(&[ENV_PAGE_SIZE, raw.as_str(), "a positive integer"])
            })?;
            config = config.with_page_size(size);
        }

        Ok(config)
    }

    /// Sets the API key handed to the transport.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the default search page size (at least 1).
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Overrides the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Tenant URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// API key, if configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Default page size for searches.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// User agent sent with each request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtlanError;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_new_defaults() {
        let config = ClientConfig::new("https://tenant.atlan.com").unwrap();
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
        assert!(config.api_key().is_none());
        assert!(config.user_agent().starts_with("atlan-rust/"));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ClientConfig::new("ftp://tenant.atlan.com").unwrap_err();
        assert_eq!(err.code(), Some("ATLAN-RUST-400-005"));
    }

    #[test]
    fn test_rejects_unparseable_url() {
        let err = ClientConfig::new("not a url").unwrap_err();
        assert!(matches!(err, AtlanError::Url(_)));
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "https://tenant.atlan.com/"),
            (ENV_API_KEY, "secret"),
            (ENV_PAGE_SIZE, "25"),
        ]))
        .unwrap();
        assert_eq!(config.base_url().as_str(), "https://tenant.atlan.com/");
        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.page_size(), 25);
    }

    #[test]
    fn test_from_lookup_requires_base_url() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_API_KEY, "secret")])).unwrap_err();
        assert!(matches!(err, AtlanError::InvalidRequest(_)));
        assert!(err.detail().unwrap().message.contains(ENV_BASE_URL));
    }

    #[test]
    fn test_from_lookup_rejects_bad_page_size() {
        let err = ClientConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "https://tenant.atlan.com"),
            (ENV_PAGE_SIZE, "lots"),
        ]))
        .unwrap_err();
        assert_eq!(err.code(), Some("ATLAN-RUST-400-007"));
        assert_eq!(
            err.detail().unwrap().message,
            "Value lots of ATLAN_PAGE_SIZE is not valid: expected a positive integer."
        );
    }

    #[test]
    fn test_page_size_is_clamped() {
        let config = ClientConfig::new("http://localhost:8080")
            .unwrap()
            .with_page_size(0);
        assert_eq!(config.page_size(), 1);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = ClientConfig::new("http://localhost")
            .unwrap()
            .with_api_key("very-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("very-secret"));
    }
}
