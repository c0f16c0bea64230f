//! Driven port for the external identity service.
//!
//! The identity provider is the only authority on session validity. The core
//! asks it on every request and keeps nothing between calls.

use async_trait::async_trait;

use crate::domain::{LoginCredentials, Principal, SessionToken};

use super::define_port_error;

define_port_error! {
    /// Failures talking to the identity provider.
    ///
    /// A token or credential pair that the provider simply rejects is not an
    /// error; adapters report it as `Ok(None)`.
    pub enum IdentityProviderError {
        /// The provider could not be reached or the request timed out.
        Transport { message: String } => "identity provider unreachable: {message}",
        /// The provider answered with an unexpected status.
        Status { status: u16, message: String } => "identity provider returned {status}: {message}",
        /// The provider's response body could not be decoded.
        Decode { message: String } => "identity provider response invalid: {message}",
    }
}

/// Session verification and credential exchange.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the principal behind `token`, or `None` when the provider does
    /// not recognise it (expired, revoked, forged).
    async fn resolve_principal(
        &self,
        token: &SessionToken,
    ) -> Result<Option<Principal>, IdentityProviderError>;

    /// Exchange an email/password pair for a bearer token, or `None` when the
    /// provider rejects the credentials.
    async fn sign_in(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<SessionToken>, IdentityProviderError>;
}
