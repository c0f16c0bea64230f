//! Reqwest adapters for the hosted identity service and record store.
//!
//! One adapter per driven port. Each adapter holds exactly one credential:
//! the user-scoped store has no key of its own beyond the anonymous API key
//! and authenticates with the caller's token; only the elevated store ever
//! sees the service-role key.

mod dto;
mod identity;
mod rest;
#[cfg(test)]
mod test_support;

use reqwest::Client;
use thiserror::Error;

use crate::config::BackendConfig;

pub use identity::SupabaseIdentityProvider;
pub use rest::{SupabaseElevatedStore, SupabasePublicLeadStore, SupabaseUserScopedStore};

/// Failures while building the adapters from configuration.
#[derive(Debug, Error)]
pub enum SupabaseSetupError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("failed to derive endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Every outbound adapter, sharing one connection pool.
pub struct SupabaseAdapters {
    pub identity: SupabaseIdentityProvider,
    pub profiles: SupabaseUserScopedStore,
    pub elevated: SupabaseElevatedStore,
    pub public: SupabasePublicLeadStore,
}

impl SupabaseAdapters {
    /// Build all adapters from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or an
    /// endpoint cannot be derived from the base URL.
    pub fn from_config(config: &BackendConfig) -> Result<Self, SupabaseSetupError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        let base = &config.base_url;
        Ok(Self {
            identity: SupabaseIdentityProvider::new(
                client.clone(),
                base,
                config.anon_key.clone(),
            )?,
            profiles: SupabaseUserScopedStore::new(client.clone(), base, config.anon_key.clone())?,
            elevated: SupabaseElevatedStore::new(
                client.clone(),
                base,
                config.service_role_key.clone(),
            )?,
            public: SupabasePublicLeadStore::new(client, base, config.anon_key.clone())?,
        })
    }
}

/// Whitespace-compacted, length-capped excerpt of an upstream body.
fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

fn status_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    }
}
