//! Driving port for admin mutations on leads.
//!
//! Every call runs the full session and privilege gate; there is no way to
//! reach the elevated store through this port without passing it.

use async_trait::async_trait;

use crate::domain::{Error, LeadId, LeadNotes, SessionToken};

/// Change requested by an admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadMutation {
    /// Set the contacted flag; the timestamp follows from it.
    SetContacted(bool),
    /// Replace the notes.
    SetNotes(LeadNotes),
}

/// Mutation targeted at one lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadMutationRequest {
    pub lead_id: LeadId,
    pub mutation: LeadMutation,
}

/// Domain use-case port for authorised lead updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadAdminCommand: Send + Sync {
    /// Authorise the session and apply `request`.
    ///
    /// # Errors
    /// - `unauthorized` when `token` is absent or resolves to no principal.
    /// - `forbidden` when the principal is not an admin.
    /// - `storage_error` when the update fails.
    async fn apply(
        &self,
        token: Option<SessionToken>,
        request: LeadMutationRequest,
    ) -> Result<(), Error>;
}
