//! Admin lead mutation handlers.
//!
//! ```text
//! POST /api/leads/contacted  id=<uuid>&next=true&redirectTo=/admin
//! POST /api/leads/notes      id=<uuid>&notes=called+back&redirectTo=/admin
//! ```
//!
//! Both endpoints check for a session cookie first, then the form shape, and
//! only then hand over to the authorization pipeline.

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::ports::{LeadMutation, LeadMutationRequest};
use crate::domain::{Error, LeadId, LeadNotes};
use crate::inbound::http::ApiResult;
use crate::inbound::http::redirect::{safe_redirect_target, see_other};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Form body for `POST /api/leads/contacted`.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactedForm {
    pub id: Option<String>,
    /// `"true"` or `"false"`.
    pub next: Option<String>,
    pub redirect_to: Option<String>,
}

/// Form body for `POST /api/leads/notes`.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotesForm {
    pub id: Option<String>,
    /// Trimmed and capped at 2000 characters before storage.
    pub notes: Option<String>,
    pub redirect_to: Option<String>,
}

fn parse_lead_id(raw: Option<&str>) -> Result<LeadId, Error> {
    LeadId::new(raw.unwrap_or_default()).map_err(|_| {
        Error::bad_request("lead id is required")
            .with_details(json!({ "field": "id", "code": "missing_field" }))
    })
}

fn parse_flag(raw: Option<&str>) -> Result<bool, Error> {
    match raw {
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        _ => Err(Error::bad_request("next must be \"true\" or \"false\"")
            .with_details(json!({ "field": "next", "code": "invalid_flag" }))),
    }
}

/// Mark a lead as contacted or not contacted.
#[utoipa::path(
    post,
    path = "/api/leads/contacted",
    request_body(content = ContactedForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Lead updated; redirect to redirectTo", headers(("Location" = String))),
        (status = 400, description = "Missing id or malformed flag", body = ErrorSchema),
        (status = 401, description = "No valid session", body = ErrorSchema),
        (status = 403, description = "Not an admin", body = ErrorSchema),
        (status = 500, description = "Update failed", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "setLeadContacted"
)]
#[post("/leads/contacted")]
pub async fn set_contacted(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<ContactedForm>,
) -> ApiResult<HttpResponse> {
    let token = session.require_token()?;
    let form = form.into_inner();
    let lead_id = parse_lead_id(form.id.as_deref())?;
    let next = parse_flag(form.next.as_deref())?;

    state
        .admin
        .apply(
            Some(token),
            LeadMutationRequest {
                lead_id,
                mutation: LeadMutation::SetContacted(next),
            },
        )
        .await?;
    Ok(see_other(safe_redirect_target(form.redirect_to.as_deref())))
}

/// Replace a lead's notes.
#[utoipa::path(
    post,
    path = "/api/leads/notes",
    request_body(content = NotesForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Notes saved; redirect to redirectTo", headers(("Location" = String))),
        (status = 400, description = "Missing id", body = ErrorSchema),
        (status = 401, description = "No valid session", body = ErrorSchema),
        (status = 403, description = "Not an admin", body = ErrorSchema),
        (status = 500, description = "Update failed", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "setLeadNotes"
)]
#[post("/leads/notes")]
pub async fn set_notes(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<NotesForm>,
) -> ApiResult<HttpResponse> {
    let token = session.require_token()?;
    let form = form.into_inner();
    let lead_id = parse_lead_id(form.id.as_deref())?;
    let notes = LeadNotes::new(form.notes.as_deref().unwrap_or_default());

    state
        .admin
        .apply(
            Some(token),
            LeadMutationRequest {
                lead_id,
                mutation: LeadMutation::SetNotes(notes),
            },
        )
        .await?;
    Ok(see_other(safe_redirect_target(form.redirect_to.as_deref())))
}
