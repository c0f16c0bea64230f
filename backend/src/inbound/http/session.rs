//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix cookie session so handlers only deal with an opaque
//! bearer token: store it, read it back, or forget it.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::{error, warn};

use crate::domain::{Error, SessionToken};

/// Name of the session cookie carrying the access token.
pub const SESSION_COOKIE_NAME: &str = "sb_access_token";

pub(crate) const ACCESS_TOKEN_KEY: &str = "access_token";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Replace whatever the session held with `token`.
    ///
    /// The session key is renewed so a pre-login cookie cannot be reused.
    pub fn persist_token(&self, token: &SessionToken) -> Result<(), Error> {
        self.0.renew();
        self.0.insert(ACCESS_TOKEN_KEY, token.expose()).map_err(|err| {
            error!(error = %err, "failed to persist session");
            Error::storage("failed to persist session")
        })
    }

    /// Token stored in the session, if any.
    ///
    /// A cookie that cannot be decoded is treated as no session.
    pub fn access_token(&self) -> Option<SessionToken> {
        match self.0.get::<String>(ACCESS_TOKEN_KEY) {
            Ok(raw) => raw.and_then(SessionToken::new),
            Err(err) => {
                warn!(error = %err, "unreadable session cookie ignored");
                None
            }
        }
    }

    /// Require a token or return `401 Unauthorized`.
    pub fn require_token(&self) -> Result<SessionToken, Error> {
        self.access_token()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop the session and expire its cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .route(
                "/set",
                web::get().to(|session: SessionContext| async move {
                    let token = SessionToken::new("jwt-abc").expect("fixture token");
                    session.persist_token(&token)?;
                    Ok::<_, Error>(HttpResponse::Ok())
                }),
            )
            .route(
                "/get",
                web::get().to(|session: SessionContext| async move {
                    let token = session.require_token()?;
                    Ok::<_, Error>(HttpResponse::Ok().body(token.expose().to_owned()))
                }),
            )
            .route(
                "/clear",
                web::get().to(|session: SessionContext| async move {
                    session.clear();
                    HttpResponse::Ok()
                }),
            )
    }

    #[actix_web::test]
    async fn round_trips_access_token() {
        let app = test::init_service(session_test_app()).await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = set_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
            .expect("session cookie set");
        assert!(
            !cookie.value().contains("jwt-abc"),
            "token must not be readable from the cookie"
        );

        let get_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/get").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        let body = test::read_body(get_res).await;
        assert_eq!(body, "jwt-abc");
    }

    #[actix_web::test]
    async fn missing_token_is_unauthorised() {
        let app = test::init_service(session_test_app()).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/get").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn clearing_expires_the_cookie() {
        let app = test::init_service(session_test_app()).await;
        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        let cookie = set_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
            .expect("session cookie set")
            .into_owned();

        let clear_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/clear").cookie(cookie).to_request(),
        )
        .await;
        let removal = clear_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
            .expect("removal cookie");
        assert_eq!(removal.value(), "");
    }

    #[actix_web::test]
    async fn forged_cookie_is_ignored() {
        let app = test::init_service(session_test_app()).await;
        let forged = actix_web::cookie::Cookie::new(SESSION_COOKIE_NAME, "not-encrypted");

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/get").cookie(forged).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
