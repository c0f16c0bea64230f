//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every form endpoint, the error schema wrappers from
//! [`crate::inbound::http::schemas`] and the session cookie security scheme.
//! Swagger UI serves it in debug builds; `openapi-dump` prints it.

use crate::inbound::http::admin_leads::{ContactedForm, NotesForm};
use crate::inbound::http::auth::LoginForm;
use crate::inbound::http::leads::LeadForm;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::session::SESSION_COOKIE_NAME;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                SESSION_COOKIE_NAME,
                "Encrypted session cookie issued by POST /api/login.",
            ))),
        );
    }
}

/// OpenAPI document for the form API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Leads backend API",
        description = "Public contact-form intake and session-authenticated lead administration."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::leads::submit_lead,
        crate::inbound::http::admin_leads::set_contacted,
        crate::inbound::http::admin_leads::set_notes,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::logout_get,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        LeadForm,
        ContactedForm,
        NotesForm,
        LoginForm
    )),
    tags(
        (name = "leads", description = "Public lead intake"),
        (name = "admin", description = "Admin-only lead updates"),
        (name = "auth", description = "Admin session management")
    )
)]
pub struct ApiDoc;
