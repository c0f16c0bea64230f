//! Driving port for staff login.
//!
//! Inbound adapters exchange form credentials for a session without knowing
//! which identity service backs it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Error, LoginCredentials, SessionToken};

/// Token handed back on a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    pub token: SessionToken,
    /// When the client-side session should be considered expired.
    pub expires_at: DateTime<Utc>,
}

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials with the identity provider.
    ///
    /// # Errors
    /// Returns `unauthorized` both for rejected credentials and for an
    /// unreachable provider, so callers cannot tell the two apart.
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedSession, Error>;
}
