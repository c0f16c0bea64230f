//! Public lead intake handler.
//!
//! ```text
//! POST /api/lead  company=&name=Jo&email=a%40b.com&message=hello+there%21
//! ```

use actix_web::http::header::{AsHeaderName, USER_AGENT};
use actix_web::{HttpRequest, HttpResponse, post, web};
use serde::Deserialize;

use crate::domain::ports::{IntakeOutcome, LeadSubmission};
use crate::inbound::http::ApiResult;
use crate::inbound::http::redirect::see_other;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Landing page a stored submission is redirected to.
pub const THANK_YOU_PAGE: &str = "/gracias";

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Contact form body for `POST /api/lead`.
///
/// `company` is a decoy field hidden from people; any value in it marks the
/// submission as automated.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct LeadForm {
    pub company: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

fn header_value(req: &HttpRequest, name: impl AsHeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Accept a contact form submission.
#[utoipa::path(
    post,
    path = "/api/lead",
    request_body(content = LeadForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Lead stored; redirect to the thank-you page", headers(("Location" = String))),
        (status = 204, description = "Submission discarded"),
        (status = 400, description = "Invalid form fields", body = ErrorSchema),
        (status = 500, description = "Lead could not be stored", body = ErrorSchema)
    ),
    tags = ["leads"],
    operation_id = "submitLead",
    security([])
)]
#[post("/lead")]
pub async fn submit_lead(
    state: web::Data<HttpState>,
    req: HttpRequest,
    form: web::Form<LeadForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let submission = LeadSubmission {
        company: form.company,
        name: form.name,
        email: form.email,
        message: form.message,
        forwarded_for: header_value(&req, FORWARDED_FOR),
        user_agent: header_value(&req, USER_AGENT),
    };

    match state.intake.submit(submission).await? {
        IntakeOutcome::Stored => Ok(see_other(THANK_YOU_PAGE)),
        IntakeOutcome::Discarded => Ok(HttpResponse::NoContent().finish()),
    }
}
