//! Backend connection settings loaded via OrthoConfig.
//!
//! Values come from `SUPABASE_*` environment variables (or the matching CLI
//! flags and config file keys that OrthoConfig layers on top). Nothing is
//! checked at load time; [`SupabaseSettings::validate`] turns the raw values
//! into a [`BackendConfig`] once at startup.

use std::fmt;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;
use zeroize::Zeroizing;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Raw identity provider and record store settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SUPABASE")]
pub struct SupabaseSettings {
    /// Base URL of the hosted backend, e.g. `https://xyz.supabase.co`.
    pub url: Option<String>,
    /// Anonymous key used for sign-in, token checks and public inserts.
    pub anon_key: Option<String>,
    /// Service-role key used only for authorised lead updates.
    pub service_role_key: Option<String>,
    /// Upstream request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Start in degraded mode when the settings above are missing.
    #[ortho_config(default = false)]
    pub allow_missing: bool,
}

/// Reasons the settings cannot produce a usable [`BackendConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required setting {name}")]
    Missing { name: &'static str },
    #[error("SUPABASE_URL is not a valid http(s) URL: {reason}")]
    InvalidUrl { reason: String },
    #[error("SUPABASE_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
}

/// Secret API key. Debug output never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Zeroizing::new(raw.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Validated settings consumed by the outbound adapters.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL, always ending in `/` so relative joins keep the full path.
    pub base_url: Url,
    pub anon_key: ApiKey,
    pub service_role_key: ApiKey,
    pub request_timeout: Duration,
}

fn required(value: Option<&str>, name: &'static str) -> Result<String, ConfigError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .ok_or(ConfigError::Missing { name })
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|err| ConfigError::InvalidUrl {
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            reason: format!("unsupported scheme {}", url.scheme()),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

impl SupabaseSettings {
    /// Check the raw settings and build the adapter configuration.
    ///
    /// # Examples
    /// ```
    /// use leads_backend::config::SupabaseSettings;
    ///
    /// let settings = SupabaseSettings {
    ///     url: Some("https://demo.supabase.co".into()),
    ///     anon_key: Some("anon".into()),
    ///     service_role_key: Some("service".into()),
    ///     timeout_secs: None,
    ///     allow_missing: false,
    /// };
    /// let config = settings.validate().expect("valid settings");
    /// assert_eq!(config.base_url.as_str(), "https://demo.supabase.co/");
    /// ```
    pub fn validate(&self) -> Result<BackendConfig, ConfigError> {
        let url = required(self.url.as_deref(), "SUPABASE_URL")?;
        let anon_key = required(self.anon_key.as_deref(), "SUPABASE_ANON_KEY")?;
        let service_role_key =
            required(self.service_role_key.as_deref(), "SUPABASE_SERVICE_ROLE_KEY")?;
        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(BackendConfig {
            base_url: parse_base_url(&url)?,
            anon_key: ApiKey::new(anon_key),
            service_role_key: ApiKey::new(service_role_key),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
