//! Driven ports for the lead record store, one per security context.
//!
//! The store enforces row-level access policy per caller identity. Each
//! capability below is a separate trait backed by a separate adapter
//! instance holding a different credential:
//!
//! - [`UserScopedStore`] runs under the caller's own session token and is
//!   the only way to read a principal's admin flag.
//! - [`ElevatedStore`] bypasses row-level policy and may only be reached
//!   after authorization has completed. It has no read methods.
//! - [`PublicLeadStore`] holds the anonymous credential and can only insert.

use async_trait::async_trait;

use crate::domain::{ContactStatus, LeadId, LeadNotes, NewLead, PrincipalId, SessionToken};

use super::define_port_error;

define_port_error! {
    /// Failures raised by record store adapters.
    pub enum RecordStoreError {
        /// The store could not be reached or the request timed out.
        Connection { message: String } => "record store connection failed: {message}",
        /// The store rejected the statement (constraint, policy, malformed filter).
        Query { message: String } => "record store query failed: {message}",
        /// The store answered with a body that could not be decoded.
        Decode { message: String } => "record store response invalid: {message}",
    }
}

/// Record store access under the caller's own session credential.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserScopedStore: Send + Sync {
    /// Read the `is_admin` flag of `principal`'s profile row as visible to
    /// the holder of `token`.
    ///
    /// Returns `None` when no profile row is visible and `Some(false)` when
    /// the row exists without the flag set.
    async fn admin_flag(
        &self,
        token: &SessionToken,
        principal: &PrincipalId,
    ) -> Result<Option<bool>, RecordStoreError>;
}

/// Privileged single-row lead updates that bypass row-level policy.
///
/// Each method is exactly one atomic update statement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ElevatedStore: Send + Sync {
    /// Write `contacted` and `contacted_at` together.
    async fn update_contact_status(
        &self,
        lead_id: &LeadId,
        status: ContactStatus,
    ) -> Result<(), RecordStoreError>;

    /// Replace the notes column.
    async fn update_notes(&self, lead_id: &LeadId, notes: &LeadNotes)
    -> Result<(), RecordStoreError>;
}

/// Anonymous insert-only access used by the public intake form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PublicLeadStore: Send + Sync {
    /// Insert one lead; the store assigns its identifier.
    async fn insert_lead(&self, lead: &NewLead) -> Result<(), RecordStoreError>;
}
