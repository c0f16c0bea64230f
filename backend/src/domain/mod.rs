//! Domain primitives, services and ports.
//!
//! Purpose: keep every business rule of lead intake and lead administration
//! free of HTTP and storage concerns. Inbound adapters call the driving ports
//! in [`ports`]; outbound adapters implement the driven ones.
//!
//! Public surface:
//! - `Error`: API error payload with stable codes.
//! - `SpamGate`: public intake behind the decoy field.
//! - `AuthorizationPipeline`: session, privilege and mutation gates for admins.
//! - `SessionIssuer`: credential exchange producing a session token.

pub mod admin;
pub mod auth;
pub mod error;
pub mod intake;
pub mod lead;
pub mod ports;
pub mod session;
pub mod trace_id;

pub use self::admin::AuthorizationPipeline;
pub use self::auth::{LoginCredentials, Principal, PrincipalId, SessionToken};
pub use self::error::{Error, ErrorCode};
pub use self::intake::{SpamGate, client_ip};
pub use self::lead::{
    ContactDetails, ContactStatus, LANDING_SOURCE, LeadId, LeadNotes, LeadValidationError,
    NOTES_MAX_CHARS, NewLead,
};
pub use self::session::{SESSION_TTL, SessionIssuer};
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use leads_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::forbidden("nope"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
