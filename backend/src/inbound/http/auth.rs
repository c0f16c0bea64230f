//! Admin login and logout handlers.
//!
//! ```text
//! POST /api/login   email=admin%40example.com&password=...
//! POST /api/logout
//! GET  /api/logout
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::LoginCredentials;
use crate::inbound::http::ApiResult;
use crate::inbound::http::redirect::see_other;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Admin dashboard reached after a successful login.
pub const ADMIN_HOME: &str = "/admin";
/// Login page reached after logging out.
pub const LOGIN_PAGE: &str = "/admin/login";

/// Login form body for `POST /api/login`.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<LoginForm> for LoginCredentials {
    fn from(value: LoginForm) -> Self {
        Self::new(
            value.email.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
        )
    }
}

/// Exchange credentials for a session cookie.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in; redirect to the admin dashboard", headers(("Set-Cookie" = String, description = "Session cookie"), ("Location" = String))),
        (status = 400, description = "Body is not a login form", body = ErrorSchema),
        (status = 401, description = "Invalid or blank credentials", body = ErrorSchema),
        (status = 500, description = "Server is missing backend configuration", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::from(form.into_inner());
    let issued = state.login.login(&credentials).await?;
    session.persist_token(&issued.token)?;
    info!(expires_at = %issued.expires_at, "admin logged in");
    Ok(see_other(ADMIN_HOME))
}

fn end_session(session: &SessionContext) -> HttpResponse {
    session.clear();
    see_other(LOGIN_PAGE)
}

/// Forget the session and return to the login page.
#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 303, description = "Session cleared; redirect to the login page", headers(("Location" = String)))
    ),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    end_session(&session)
}

/// Link-friendly variant of [`logout`].
#[utoipa::path(
    get,
    path = "/api/logout",
    responses(
        (status = 303, description = "Session cleared; redirect to the login page", headers(("Location" = String)))
    ),
    tags = ["auth"],
    operation_id = "logoutViaLink",
    security([])
)]
#[get("/logout")]
pub async fn logout_get(session: SessionContext) -> HttpResponse {
    end_session(&session)
}
