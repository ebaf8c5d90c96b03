//! Configuration for registry access.
//!
//! Preferences are owned by the hosting environment; the core receives them
//! as an explicit [`RegistryConfig`] rather than reading ambient state.

use std::time::Duration;

use crate::catalog::FilterOptions;

/// Registry host used when no URL is configured.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.defenseunicorns.com";

/// Cookie name the registry expects session tokens under.
pub const SESSION_COOKIE: &str = "uds_session";

/// Per-request timeout applied to every registry call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the registry client.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Registry URL; empty or unset falls back to [`DEFAULT_REGISTRY_URL`].
    pub registry_url: Option<String>,

    /// Opaque session cookie value, sent as `uds_session={value}` when set.
    pub session_cookie: Option<String>,

    /// Skip the `public` organization when flattening the catalog.
    pub ignore_public: bool,

    /// Skip the `airgap-store` organization when flattening the catalog.
    pub ignore_airgap_store: bool,

    /// Request timeout. Expiry cancels the in-flight request.
    pub timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryConfig {
    /// Creates a configuration with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use uds_registry::RegistryConfig;
    ///
    /// let config = RegistryConfig::new();
    /// assert_eq!(config.base_url(), "https://registry.defenseunicorns.com");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registry_url: None,
            session_cookie: None,
            ignore_public: false,
            ignore_airgap_store: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the registry URL.
    #[must_use]
    pub fn with_registry_url(mut self, url: impl Into<String>) -> Self {
        self.registry_url = Some(url.into());
        self
    }

    /// Sets the session cookie value.
    #[must_use]
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Sets whether the `public` organization is skipped.
    #[must_use]
    pub const fn with_ignore_public(mut self, ignore: bool) -> Self {
        self.ignore_public = ignore;
        self
    }

    /// Sets whether the `airgap-store` organization is skipped.
    #[must_use]
    pub const fn with_ignore_airgap_store(mut self, ignore: bool) -> Self {
        self.ignore_airgap_store = ignore;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the effective base URL.
    ///
    /// An unset or empty `registry_url` resolves to [`DEFAULT_REGISTRY_URL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use uds_registry::RegistryConfig;
    ///
    /// let config = RegistryConfig::new().with_registry_url("https://registry.internal");
    /// assert_eq!(config.base_url(), "https://registry.internal");
    ///
    /// let config = RegistryConfig::new().with_registry_url("");
    /// assert_eq!(config.base_url(), "https://registry.defenseunicorns.com");
    /// ```
    #[must_use]
    pub fn base_url(&self) -> &str {
        match self.registry_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_REGISTRY_URL,
        }
    }

    /// Returns the catalog filter options implied by this configuration.
    #[must_use]
    pub const fn filters(&self) -> FilterOptions {
        FilterOptions {
            exclude_public: self.ignore_public,
            exclude_airgap_store: self.ignore_airgap_store,
        }
    }
}
