//! Post/redirect/get helpers shared by the form handlers.

use actix_web::HttpResponse;
use actix_web::http::header::LOCATION;

/// Where admin mutations land when no usable `redirectTo` was supplied.
pub const DEFAULT_ADMIN_REDIRECT: &str = "/admin";

/// `303 See Other` to `location`.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

/// Redirect target restricted to same-site absolute paths.
///
/// Protocol-relative (`//host`) and backslash forms are rejected because
/// browsers resolve them to other origins.
///
/// # Examples
/// ```
/// use leads_backend::inbound::http::redirect::safe_redirect_target;
///
/// assert_eq!(safe_redirect_target(Some("/admin?page=2")), "/admin?page=2");
/// assert_eq!(safe_redirect_target(Some("https://evil.test")), "/admin");
/// assert_eq!(safe_redirect_target(None), "/admin");
/// ```
pub fn safe_redirect_target(requested: Option<&str>) -> &str {
    match requested.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => DEFAULT_ADMIN_REDIRECT,
    }
}
