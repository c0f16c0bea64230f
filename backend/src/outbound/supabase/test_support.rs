//! In-process upstream stand-in for adapter tests.
//!
//! Binds an actix-web server on an ephemeral loopback port that answers every
//! request with one canned response and records what it received.

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use url::Url;

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub(super) struct RecordedRequest {
    pub(super) method: String,
    pub(super) path_and_query: String,
    pub(super) headers: Vec<(String, String)>,
    pub(super) body: String,
}

impl RecordedRequest {
    pub(super) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub(super) fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

struct StubState {
    status: StatusCode,
    body: &'static str,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn answer(req: HttpRequest, body: web::Bytes, state: web::Data<StubState>) -> HttpResponse {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_default();
    let headers = req
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                value.to_str().unwrap_or_default().to_owned(),
            )
        })
        .collect();
    state
        .recorded
        .lock()
        .expect("stub mutex")
        .push(RecordedRequest {
            method: req.method().as_str().to_owned(),
            path_and_query,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        });

    HttpResponse::build(state.status)
        .content_type("application/json")
        .body(state.body)
}

/// Running stub upstream. Stops when dropped.
pub(super) struct StubUpstream {
    base_url: Url,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: ServerHandle,
}

impl StubUpstream {
    /// Start a stub answering `status` with `body` for every request.
    ///
    /// Must be called from within an actix system (`#[actix_web::test]`).
    pub(super) fn start(status: u16, body: &'static str) -> Self {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(StubState {
            status: StatusCode::from_u16(status).expect("valid status"),
            body,
            recorded: Arc::clone(&recorded),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .default_service(web::to(answer))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind stub upstream");
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: Url::parse(&format!("http://{addr}/")).expect("stub url"),
            recorded,
            handle,
        }
    }

    pub(super) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Requests received so far, oldest first.
    pub(super) fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().expect("stub mutex").clone()
    }

    /// The single request received, failing the test otherwise.
    pub(super) fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one upstream request");
        requests.into_iter().next().expect("one request")
    }
}

impl Drop for StubUpstream {
    fn drop(&mut self) {
        drop(self.handle.stop(false));
    }
}

/// Base URL of a loopback port with nothing listening.
pub(super) fn unreachable_base_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    Url::parse(&format!("http://{addr}/")).expect("probe url")
}
