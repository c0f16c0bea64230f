//! Stand-in for every driving port when backend configuration is missing.
//!
//! Wired only when the operator explicitly allows the server to start
//! without identity and record store settings.

use async_trait::async_trait;
use tracing::error;

use super::{
    IntakeOutcome, IssuedSession, LeadAdminCommand, LeadIntake, LeadMutationRequest,
    LeadSubmission, LoginService,
};
use crate::domain::{Error, LoginCredentials, SessionToken};

const MISSING_CONFIG: &str = "server is missing required backend configuration";

/// Answers every use-case with [`crate::domain::ErrorCode::Misconfigured`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MisconfiguredBackend;

impl MisconfiguredBackend {
    fn fail(operation: &'static str) -> Error {
        error!(operation, "request rejected: backend configuration missing");
        Error::misconfigured(MISSING_CONFIG)
    }
}

#[async_trait]
impl LeadIntake for MisconfiguredBackend {
    async fn submit(&self, _submission: LeadSubmission) -> Result<IntakeOutcome, Error> {
        Err(Self::fail("lead.submit"))
    }
}

#[async_trait]
impl LeadAdminCommand for MisconfiguredBackend {
    async fn apply(
        &self,
        _token: Option<SessionToken>,
        _request: LeadMutationRequest,
    ) -> Result<(), Error> {
        Err(Self::fail("lead.admin"))
    }
}

#[async_trait]
impl LoginService for MisconfiguredBackend {
    async fn login(&self, _credentials: &LoginCredentials) -> Result<IssuedSession, Error> {
        Err(Self::fail("session.login"))
    }
}
