//! Shared fixtures: a mock backend and a configured app.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use axum_test::TestServer;
use serde_json::{Value, json};

use omnipanel::AppState;
use omnipanel::config::{
    AppConfig, BackendConfig, CatalogConfig, CredentialsConfig, PlaygroundConfig, ServerConfig,
};
use omnipanel::playground::PlaygroundMode;
use omnipanel::server;

/// A request the mock backend received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub api_key: Option<String>,
    pub body: Value,
}

/// In-process stand-in for the chat/generation backend.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    pub requests: Arc<Mutex<Vec<Recorded>>>,
    pub signup_fails: Arc<AtomicBool>,
}

impl MockBackend {
    pub fn recorded(&self, path: &str) -> Vec<Recorded> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    pub fn fail_signups(&self, fail: bool) {
        self.signup_fails.store(fail, Ordering::SeqCst);
    }

    fn record(&self, path: &str, headers: &HeaderMap, body: &Value) {
        let api_key = headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().unwrap().push(Recorded {
            path: path.to_string(),
            api_key,
            body: body.clone(),
        });
    }

    /// Serve on an ephemeral port and return the base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/api/chat", post(mock_chat))
            .route("/api/generate/{kind}", post(mock_generate))
            .route("/api/auth/signup", post(mock_signup))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }
}

async fn mock_chat(
    State(mock): State<MockBackend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    mock.record("/api/chat", &headers, &body);

    let last = body["messages"]
        .as_array()
        .and_then(|m| m.last())
        .and_then(|m| m["content"].as_str())
        .unwrap_or_default()
        .to_string();

    if last.contains("explode") {
        return (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "detail": "upstream exploded" })),
        )
            .into_response();
    }
    if last.contains("silent") {
        return Json(json!({})).into_response();
    }
    Json(json!({ "final": format!("Consensus: {last}") })).into_response()
}

async fn mock_generate(
    State(mock): State<MockBackend>,
    Path(kind): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    mock.record(&format!("/api/generate/{kind}"), &headers, &body);

    match body["prompt"].as_str().unwrap_or_default() {
        "bad" => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "prompt rejected" })),
        )
            .into_response(),
        "garbage" => (StatusCode::OK, "<html>oops</html>").into_response(),
        prompt => Json(json!({
            "url": format!("https://cdn.example/{kind}/{}.bin", prompt.replace(' ', "-"))
        }))
        .into_response(),
    }
}

async fn mock_signup(
    State(mock): State<MockBackend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    mock.record("/api/auth/signup", &headers, &body);

    if mock.signup_fails.load(Ordering::SeqCst) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "detail": "rate limited" })),
        )
            .into_response();
    }
    Json(json!({ "api_key": "sk-issued" })).into_response()
}

pub fn test_config(backend_url: &str, mode: PlaygroundMode) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".into(),
        },
        backend: BackendConfig {
            base_url: Some(backend_url.to_string()),
        },
        playground: PlaygroundConfig {
            mode,
            simulated_delay_ms: 10,
            session_timeout_secs: 60,
        },
        credentials: CredentialsConfig::default(),
        catalog: CatalogConfig::default(),
    }
}

/// Build the app around `config`, returning the test server and its state.
pub async fn app(config: AppConfig) -> (TestServer, AppState) {
    let state = server::build_state(Arc::new(config)).await.unwrap();
    let server = TestServer::new(server::router(state.clone())).unwrap();
    (server, state)
}

/// Cookie header binding requests to the `client` session.
pub fn session(client: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("cookie"),
        HeaderValue::from_str(&format!("{}={client}", server::SESSION_COOKIE)).unwrap(),
    )
}
