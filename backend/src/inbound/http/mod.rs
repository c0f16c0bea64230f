//! HTTP inbound adapter exposing the form endpoints.

pub mod admin_leads;
pub mod auth;
pub mod error;
pub mod leads;
pub mod redirect;
pub mod routes;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
