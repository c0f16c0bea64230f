//! Authorization pipeline shared by every admin mutation.
//!
//! Three sequential gates, stopping at the first failure:
//!
//! 1. Session: the bearer token must resolve to a principal at the identity
//!    provider.
//! 2. Privilege: the principal's profile must carry `is_admin = true`, read
//!    through [`UserScopedStore`] under the caller's own token so row-level
//!    policy applies exactly as it would for that user.
//! 3. Mutation: one atomic update through [`ElevatedStore`].
//!
//! The elevated credential is only reachable in step 3; the privilege lookup
//! has no code path that could run with elevated rights.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info, warn};

use crate::domain::ports::{
    ElevatedStore, IdentityProvider, LeadAdminCommand, LeadMutation, LeadMutationRequest,
    UserScopedStore,
};
use crate::domain::{ContactStatus, Error, Principal, SessionToken};

/// Admin mutation service implementing [`LeadAdminCommand`].
#[derive(Clone)]
pub struct AuthorizationPipeline<I, U, E> {
    identity: Arc<I>,
    profiles: Arc<U>,
    leads: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<I, U, E> AuthorizationPipeline<I, U, E> {
    /// Create a pipeline over the three capabilities.
    ///
    /// `clock` stamps `contacted_at` when a lead is marked contacted.
    pub fn new(identity: Arc<I>, profiles: Arc<U>, leads: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            identity,
            profiles,
            leads,
            clock,
        }
    }
}

impl<I, U, E> AuthorizationPipeline<I, U, E>
where
    I: IdentityProvider,
    U: UserScopedStore,
    E: ElevatedStore,
{
    async fn authenticate<'t>(
        &self,
        token: Option<&'t SessionToken>,
    ) -> Result<(&'t SessionToken, Principal), Error> {
        let Some(token) = token else {
            info!("admin mutation rejected: no session");
            return Err(Error::unauthorized("login required"));
        };

        match self.identity.resolve_principal(token).await {
            Ok(Some(principal)) => Ok((token, principal)),
            Ok(None) => {
                info!("admin mutation rejected: session not recognised");
                Err(Error::unauthorized("login required"))
            }
            Err(err) => {
                warn!(error = %err, "admin mutation rejected: session could not be verified");
                Err(Error::unauthorized("login required"))
            }
        }
    }

    async fn ensure_admin(&self, token: &SessionToken, principal: &Principal) -> Result<(), Error> {
        match self.profiles.admin_flag(token, &principal.id).await {
            Ok(Some(true)) => Ok(()),
            Ok(_) => {
                info!(principal = %principal.id, "admin mutation rejected: not an admin");
                Err(Error::forbidden("admin role required"))
            }
            Err(err) => {
                warn!(
                    principal = %principal.id,
                    error = %err,
                    "admin mutation rejected: privilege lookup failed"
                );
                Err(Error::forbidden("admin role required"))
            }
        }
    }

    async fn mutate(&self, request: &LeadMutationRequest) -> Result<(), Error> {
        let (operation, result) = match &request.mutation {
            LeadMutation::SetContacted(contacted) => {
                let status = ContactStatus::from_flag(*contacted, self.clock.utc());
                let result = self
                    .leads
                    .update_contact_status(&request.lead_id, status)
                    .await;
                ("leads.update_contacted", result)
            }
            LeadMutation::SetNotes(notes) => {
                let result = self.leads.update_notes(&request.lead_id, notes).await;
                ("leads.update_notes", result)
            }
        };

        result.map_err(|err| {
            error!(operation, lead_id = %request.lead_id, error = %err, "lead update failed");
            Error::storage("failed to update lead")
        })
    }
}

#[async_trait]
impl<I, U, E> LeadAdminCommand for AuthorizationPipeline<I, U, E>
where
    I: IdentityProvider,
    U: UserScopedStore,
    E: ElevatedStore,
{
    async fn apply(
        &self,
        token: Option<SessionToken>,
        request: LeadMutationRequest,
    ) -> Result<(), Error> {
        let (token, principal) = self.authenticate(token.as_ref()).await?;
        self.ensure_admin(token, &principal).await?;
        self.mutate(&request).await?;
        info!(principal = %principal.id, lead_id = %request.lead_id, "lead updated");
        Ok(())
    }
}

#[cfg(test)]
#[path = "admin_tests.rs"]
mod tests;
