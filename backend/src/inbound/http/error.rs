//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::error::UrlencodedError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::debug;

pub use crate::domain::ApiResult;
use crate::domain::{Error, ErrorCode};
use crate::middleware::TRACE_ID_HEADER;

const REDACTED_MESSAGE: &str = "internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidInput | ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::StorageError | ErrorCode::Misconfigured => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_storage(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::StorageError) {
        let mut redacted = Error::storage(REDACTED_MESSAGE);
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_storage(self))
    }
}

/// Form extractor error handler producing the JSON error schema.
///
/// Install with `web::FormConfig::default().error_handler(form_error_handler)`.
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "form body rejected");
    Error::bad_request("malformed form body").into()
}
