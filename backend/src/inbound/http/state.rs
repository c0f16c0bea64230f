//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LeadAdminCommand, LeadIntake, LoginService, MisconfiguredBackend};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub intake: Arc<dyn LeadIntake>,
    pub admin: Arc<dyn LeadAdminCommand>,
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    /// Bundle the three driving ports.
    pub fn new(
        intake: Arc<dyn LeadIntake>,
        admin: Arc<dyn LeadAdminCommand>,
        login: Arc<dyn LoginService>,
    ) -> Self {
        Self {
            intake,
            admin,
            login,
        }
    }

    /// State whose every use-case answers `misconfigured`.
    ///
    /// # Examples
    /// ```
    /// use leads_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::misconfigured();
    /// # let _ = state;
    /// ```
    pub fn misconfigured() -> Self {
        let backend = Arc::new(MisconfiguredBackend);
        Self {
            intake: backend.clone(),
            admin: backend.clone(),
            login: backend,
        }
    }
}
