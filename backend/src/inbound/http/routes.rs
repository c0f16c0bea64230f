//! Route table for the `/api` scope.

use actix_web::{Scope, web};

use super::admin_leads::{set_contacted, set_notes};
use super::auth::{login, logout, logout_get};
use super::error::form_error_handler;
use super::leads::submit_lead;

/// Mount point of every handler.
pub const API_PREFIX: &str = "/api";

/// All form endpoints under [`API_PREFIX`], with form errors rendered in
/// the JSON error schema.
///
/// The caller supplies `web::Data<HttpState>` and the session middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use leads_backend::inbound::http::routes::api_scope;
///
/// let app = App::new().service(api_scope());
/// # let _ = app;
/// ```
pub fn api_scope() -> Scope {
    web::scope(API_PREFIX)
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .service(submit_lead)
        .service(set_contacted)
        .service(set_notes)
        .service(login)
        .service(logout)
        .service(logout_get)
}
