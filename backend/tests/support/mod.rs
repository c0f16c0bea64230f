//! Shared harness for the HTTP integration suites.
//!
//! The driven ports are replaced by in-memory doubles that record every
//! call, while the real use-cases, routes and cookie session layer run
//! unchanged.

pub mod doubles;

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::LOCATION;
use chrono::{DateTime, Local, TimeZone, Utc};
use leads_backend::domain::{AuthorizationPipeline, SessionIssuer, SpamGate};
use leads_backend::inbound::http::session::SESSION_COOKIE_NAME;
use leads_backend::inbound::http::state::HttpState;
use mockable::Clock;

use doubles::{FakeIdentityProvider, FakeProfileStore, RecordingLeadStore};

/// Instant reported by [`FixedClock`].
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Clock frozen at [`fixture_timestamp`].
#[derive(Debug, Clone, Copy)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        fixture_timestamp().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        fixture_timestamp()
    }
}

/// The doubles behind one application instance.
#[derive(Clone, Default)]
pub struct World {
    pub identity: Arc<FakeIdentityProvider>,
    pub profiles: Arc<FakeProfileStore>,
    pub leads: Arc<RecordingLeadStore>,
}

impl World {
    /// Real use-cases wired over this world's doubles.
    pub fn http_state(&self) -> HttpState {
        let clock = Arc::new(FixedClock);
        HttpState::new(
            Arc::new(SpamGate::new(self.leads.clone())),
            Arc::new(AuthorizationPipeline::new(
                self.identity.clone(),
                self.profiles.clone(),
                self.leads.clone(),
                clock.clone(),
            )),
            Arc::new(SessionIssuer::new(self.identity.clone(), clock)),
        )
    }
}

/// Build and initialise the full `/api` application for `state`.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .wrap(
                    leads_backend::inbound::http::session_config::session_middleware(
                        actix_web::cookie::Key::generate(),
                        false,
                    ),
                )
                .wrap(leads_backend::Trace)
                .service(leads_backend::inbound::http::routes::api_scope()),
        )
        .await
    };
}

/// Session cookie set by `response`, if any.
pub fn session_cookie(response: &ServiceResponse) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
}

/// `Location` header of a redirect.
pub fn location(response: &ServiceResponse) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// Log in through `/api/login` and return the issued session cookie.
macro_rules! sign_in {
    ($app:expr, $email:expr, $password:expr) => {{
        let request = actix_web::test::TestRequest::post()
            .uri("/api/login")
            .set_form([("email", $email), ("password", $password)])
            .to_request();
        let response = actix_web::test::call_service($app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::SEE_OTHER);
        $crate::support::session_cookie(&response).expect("session cookie")
    }};
}
