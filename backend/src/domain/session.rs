//! Credential exchange for admin logins.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{IdentityProvider, IssuedSession, LoginService};
use crate::domain::{Error, LoginCredentials};

/// Lifetime of an issued session, shared with the session cookie.
pub const SESSION_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

const INVALID_LOGIN: &str = "invalid login";

/// Login service implementing [`LoginService`] against an identity provider.
#[derive(Clone)]
pub struct SessionIssuer<I> {
    identity: Arc<I>,
    clock: Arc<dyn Clock>,
}

impl<I> SessionIssuer<I> {
    /// Create an issuer over `identity`.
    ///
    /// `clock` dates the expiry of each issued session.
    pub fn new(identity: Arc<I>, clock: Arc<dyn Clock>) -> Self {
        Self { identity, clock }
    }
}

#[async_trait]
impl<I> LoginService for SessionIssuer<I>
where
    I: IdentityProvider,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedSession, Error> {
        if credentials.is_blank() {
            info!("login rejected: blank credentials");
            return Err(Error::unauthorized(INVALID_LOGIN));
        }

        match self.identity.sign_in(credentials).await {
            Ok(Some(token)) => {
                let ttl = chrono::Duration::from_std(SESSION_TTL)
                    .unwrap_or_else(|_| chrono::Duration::days(7));
                info!("admin session issued");
                Ok(IssuedSession {
                    token,
                    expires_at: self.clock.utc() + ttl,
                })
            }
            Ok(None) => {
                info!("login rejected by identity provider");
                Err(Error::unauthorized(INVALID_LOGIN))
            }
            Err(err) => {
                // Provider outages look like bad credentials to the caller.
                warn!(error = %err, "login failed: identity provider error");
                Err(Error::unauthorized(INVALID_LOGIN))
            }
        }
    }
}
