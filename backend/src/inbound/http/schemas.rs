//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Submitted form fields failed validation.
    #[schema(rename = "invalid_input")]
    InvalidInput,
    /// Identifier or flag in the request is malformed.
    #[schema(rename = "bad_request")]
    BadRequest,
    /// No session, or the session is not recognised.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Session is valid but the principal is not an admin.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The record store rejected or failed the operation.
    #[schema(rename = "storage_error")]
    StorageError,
    /// The server is missing required backend configuration.
    #[schema(rename = "misconfigured")]
    Misconfigured,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "forbidden")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "admin role required")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details, e.g. the offending form field.
    details: Option<serde_json::Value>,
}
