//! Backend entry-point: loads settings, wires adapters and serves the form API.

mod server;

use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use leads_backend::config::SupabaseSettings;
use leads_backend::inbound::http::session_config::fingerprint::key_fingerprint;
use leads_backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use server::{ServerConfig, bind_addr_from_env, build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = SupabaseSettings::load().map_err(std::io::Error::other)?;
    let http_state = build_http_state(&settings).map_err(std::io::Error::other)?;

    let env = DefaultEnv::new();
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    info!(
        fingerprint = %key_fingerprint(&session.key),
        "session key loaded"
    );
    let bind_addr = bind_addr_from_env(&env).map_err(std::io::Error::other)?;

    let config = ServerConfig::new(session.key, session.cookie_secure, bind_addr);
    info!(%bind_addr, "starting server");
    create_server(http_state, config)?.await
}
