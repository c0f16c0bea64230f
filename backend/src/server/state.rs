//! Construction of the HTTP state from backend settings.

use std::sync::Arc;

use mockable::DefaultClock;
use thiserror::Error;
use tracing::{error, warn};

use leads_backend::config::{ConfigError, SupabaseSettings};
use leads_backend::domain::{AuthorizationPipeline, SessionIssuer, SpamGate};
use leads_backend::inbound::http::state::HttpState;
use leads_backend::outbound::supabase::{SupabaseAdapters, SupabaseSetupError};

/// Reasons the HTTP state cannot be assembled.
#[derive(Debug, Error)]
pub enum StateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Setup(#[from] SupabaseSetupError),
}

/// Wire the use-cases over the outbound adapters.
///
/// Missing or invalid settings abort startup unless `allow_missing` is set,
/// in which case every use-case answers `misconfigured`.
pub fn build_http_state(settings: &SupabaseSettings) -> Result<HttpState, StateError> {
    let config = match settings.validate() {
        Ok(config) => config,
        Err(err) if settings.allow_missing => {
            warn!(error = %err, "backend settings incomplete; serving in degraded mode");
            return Ok(HttpState::misconfigured());
        }
        Err(err) => {
            error!(error = %err, "backend settings invalid");
            return Err(err.into());
        }
    };

    let SupabaseAdapters {
        identity,
        profiles,
        elevated,
        public,
    } = SupabaseAdapters::from_config(&config)?;
    let identity = Arc::new(identity);
    let clock = Arc::new(DefaultClock);

    Ok(HttpState::new(
        Arc::new(SpamGate::new(Arc::new(public))),
        Arc::new(AuthorizationPipeline::new(
            identity.clone(),
            Arc::new(profiles),
            Arc::new(elevated),
            clock.clone(),
        )),
        Arc::new(SessionIssuer::new(identity, clock)),
    ))
}
