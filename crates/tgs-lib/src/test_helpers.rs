//! Test-only helpers shared by the workspace crates.
//!
//! Enable the `test-utils` feature to use these from another crate's tests.
//! [`StubServer`] is a small axum app on a loopback port that answers each
//! request with the next scripted response, so client code can be exercised
//! without reaching the real API.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Directory holding the JSON fixtures captured from the TGS API.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load and parse a fixture file by name, e.g. `"countries.json"`.
pub fn fixture_json(name: &str) -> Value {
    let path = fixtures_dir().join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("fixture {} should exist: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture should be valid JSON")
}

/// Base URL of a loopback port with nothing listening on it.
pub fn unused_local_endpoint() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    drop(listener);
    format!("http://{}", addr)
}

/// One scripted HTTP response.
#[derive(Debug, Clone)]
pub struct StubResponse {
    status: u16,
    body: String,
}

impl StubResponse {
    /// `200 OK` with a JSON content type.
    pub fn json(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl IntoResponse for StubResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

#[derive(Clone)]
struct StubState {
    responses: Arc<Mutex<VecDeque<StubResponse>>>,
    request_lines: Arc<Mutex<Vec<String>>>,
}

/// Loopback HTTP server answering requests from a fixed script, in order.
///
/// Requests beyond the script get `503 Service Unavailable`. The server
/// shuts down when the `StubServer` is dropped.
pub struct StubServer {
    addr: SocketAddr,
    base_url: String,
    state: StubState,
    // Dropping the sender resolves the graceful-shutdown future.
    _shutdown: oneshot::Sender<()>,
}

impl StubServer {
    /// Start serving `responses` on an ephemeral port.
    ///
    /// The server runs on its own thread and runtime, so this can be called
    /// from plain `#[test]` functions and from `#[tokio::test]` alike.
    pub fn start(responses: Vec<StubResponse>) -> Self {
        let state = StubState {
            responses: Arc::new(Mutex::new(responses.into())),
            request_lines: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .fallback(scripted_response)
            .with_state(state.clone());

        let (addr_tx, addr_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub server runtime");
            runtime.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind stub server");
                let addr = listener.local_addr().expect("stub server address");
                let _ = addr_tx.send(addr);
                let _ = axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = shutdown_rx.await;
                    })
                    .await;
            });
        });

        let addr = addr_rx.recv().expect("stub server should report its address");
        Self {
            addr,
            base_url: format!("http://{}", addr),
            state,
            _shutdown: shutdown_tx,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request lines (`GET /path HTTP/1.1`) received so far.
    pub fn request_lines(&self) -> Vec<String> {
        self.state
            .request_lines
            .lock()
            .expect("request log lock")
            .clone()
    }
}

async fn scripted_response(State(state): State<StubState>, request: Request) -> Response {
    let line = format!(
        "{} {} {:?}",
        request.method(),
        request.uri(),
        request.version()
    );
    state
        .request_lines
        .lock()
        .expect("request log lock")
        .push(line);

    let next = state
        .responses
        .lock()
        .expect("response script lock")
        .pop_front();
    match next {
        Some(response) => response.into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "no scripted response left").into_response(),
    }
}
