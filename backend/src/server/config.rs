//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::cookie::Key;
use mockable::Env;
use thiserror::Error;

const BIND_ADDR_ENV: &str = "BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Raised when `BIND_ADDR` does not parse as a socket address.
#[derive(Debug, Error)]
#[error("invalid {BIND_ADDR_ENV}='{value}': {source}")]
pub struct BindAddrError {
    value: String,
    #[source]
    source: std::net::AddrParseError,
}

/// Read the listen address from `BIND_ADDR`, defaulting to `0.0.0.0:8080`.
pub fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, BindAddrError> {
    let value = env
        .string(BIND_ADDR_ENV)
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
    value
        .parse()
        .map_err(|source| BindAddrError { value, source })
}

/// Settings needed to build and bind the HTTP server.
#[derive(Clone)]
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration from the session key, cookie flag
    /// and listen address.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            bind_addr,
        }
    }
}
