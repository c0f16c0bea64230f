//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`LeadIntake`, `LeadAdminCommand`, `LoginService`) are
//! called by inbound adapters. Driven ports (`IdentityProvider` and the
//! record store capabilities) are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod identity_provider;
mod lead_admin_command;
mod lead_intake;
mod login_service;
mod misconfigured;
mod record_store;

#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{IdentityProvider, IdentityProviderError};
#[cfg(test)]
pub use lead_admin_command::MockLeadAdminCommand;
pub use lead_admin_command::{LeadAdminCommand, LeadMutation, LeadMutationRequest};
#[cfg(test)]
pub use lead_intake::MockLeadIntake;
pub use lead_intake::{IntakeOutcome, LeadIntake, LeadSubmission};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{IssuedSession, LoginService};
pub use misconfigured::MisconfiguredBackend;
#[cfg(test)]
pub use record_store::{MockElevatedStore, MockPublicLeadStore, MockUserScopedStore};
pub use record_store::{ElevatedStore, PublicLeadStore, RecordStoreError, UserScopedStore};
