use axum::{
    Json, Router,
    extract::{Form, Path, State},
    http::{HeaderName, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::AppState;
use crate::backend::BackendClient;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
use crate::playground::{
    ChatResponder, GenerationKind, NetworkResponder, PlaygroundMode, PlaygroundService,
    SendOutcome, SimulatedResponder,
};
use crate::ui;

/// Cookie identifying a visitor's playground session.
pub const SESSION_COOKIE: &str = "omni_session";

/// Client-side event the page turns into `window.alert`.
pub const ALERT_EVENT: &str = "omni:alert";

const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

/// Build the shared state from configuration.
pub async fn build_state(config: Arc<AppConfig>) -> anyhow::Result<AppState> {
    let catalog = Arc::new(Catalog::load(config.catalog.path.as_deref()).await?);
    info!(
        name: "catalog.loaded",
        models = catalog.models.len(),
        tiers = catalog.tiers.len(),
        "Catalog loaded"
    );

    let base_url = config.backend_base_url();
    let backend = BackendClient::new(&base_url)?;

    let mode = config.playground.mode;
    let responder: Arc<dyn ChatResponder> = match mode {
        PlaygroundMode::Networked => Arc::new(NetworkResponder::new(backend.clone())),
        PlaygroundMode::Simulated => Arc::new(SimulatedResponder::new(Duration::from_millis(
            config.playground.simulated_delay_ms,
        ))),
    };

    let credentials: Arc<dyn CredentialStore> = match &config.credentials.path {
        Some(path) => Arc::new(FileCredentialStore::new(path)),
        None => Arc::new(MemoryCredentialStore::new()),
    };

    info!(
        name: "playground.config.loaded",
        backend = %base_url,
        mode = ?mode,
        persistent_keys = config.credentials.path.is_some(),
        "Playground configured"
    );

    Ok(AppState {
        playground: PlaygroundService::new(catalog, responder, backend, credentials),
        mode,
        config,
    })
}

/// Build the router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // HTML page
        .route("/", get(index_handler))
        // HTMX fragments
        .route("/playground/chat", post(chat_handler))
        .route("/playground/models/{id}/toggle", post(toggle_model_handler))
        .route("/playground/key", post(set_key_handler))
        .route("/playground/key/save", post(save_key_handler))
        .route("/playground/signup", post(signup_handler))
        .route("/playground/generate/{kind}", post(generate_handler))
        // JSON
        .route("/api/catalog", get(catalog_handler))
        .route("/healthz", get(|| async { "ok" }))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = build_state(Arc::clone(&config)).await?;

    let timeout = Duration::from_secs(config.playground.session_timeout_secs);
    let _sweeper = state.playground.spawn_session_sweeper(timeout);

    let app = router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        name: "server.started",
        address = %address,
        "Server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
    }
    info!(name: "server.stopping", "Shutting down");
}

// ─────────────────────────────────────────────────────────────────────────────
// Session binding
// ─────────────────────────────────────────────────────────────────────────────

/// The visitor's session id, issuing a cookie when there is none yet.
fn client_session(jar: CookieJar) -> (CookieJar, String) {
    if let Some(id) = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|id| !id.is_empty())
    {
        return (jar, id);
    }

    let id = Uuid::new_v4().to_string();
    let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), id)
}

/// `HX-Trigger` value that raises a blocking alert in the page.
fn alert_trigger(message: &str) -> String {
    serde_json::json!({ ALERT_EVENT: { "message": message } }).to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

async fn index_handler(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, client) = client_session(jar);
    let snapshot = state.playground.snapshot(&client).await;
    let html = ui::render_page(state.playground.catalog(), snapshot, state.mode);
    (jar, Html(html)).into_response()
}

#[derive(Debug, Deserialize)]
struct ChatForm {
    #[serde(default)]
    message: String,
}

async fn chat_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ChatForm>,
) -> Response {
    let (jar, client) = client_session(jar);

    match state.playground.send(&client, &form.message).await {
        // Nothing to swap.
        SendOutcome::Ignored => (jar, StatusCode::NO_CONTENT).into_response(),
        SendOutcome::Busy | SendOutcome::Completed(_) | SendOutcome::Cancelled => {
            let snapshot = state.playground.snapshot(&client).await;
            (jar, Html(ui::render_chat_panel(&snapshot))).into_response()
        }
    }
}

async fn toggle_model_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(model_id): Path<String>,
) -> Response {
    let (jar, client) = client_session(jar);

    match state.playground.toggle_model(&client, &model_id).await {
        Ok(_) => {
            let snapshot = state.playground.snapshot(&client).await;
            let html = ui::render_model_picker(
                &state.playground.catalog().models,
                snapshot.selection.ids(),
            );
            (jar, Html(html)).into_response()
        }
        Err(e) => (jar, (StatusCode::NOT_FOUND, e.to_string())).into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct KeyForm {
    #[serde(default)]
    api_key: String,
}

async fn set_key_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<KeyForm>,
) -> Response {
    let (jar, client) = client_session(jar);
    state.playground.set_api_key(&client, &form.api_key).await;
    (jar, Html(ui::render_key_panel(&form.api_key))).into_response()
}

async fn save_key_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<KeyForm>,
) -> Response {
    let (jar, client) = client_session(jar);
    let html = Html(ui::render_key_panel(&form.api_key));

    match state.playground.save_api_key(&client, &form.api_key).await {
        Ok(()) => (jar, html).into_response(),
        Err(e) => {
            warn!(name: "credentials.save.failed", error = %e, "Failed to save API key");
            (jar, [(HX_TRIGGER, alert_trigger(&e.to_string()))], html).into_response()
        }
    }
}

async fn signup_handler(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, client) = client_session(jar);

    match state.playground.signup(&client).await {
        Ok(key) => (jar, Html(ui::render_key_panel(&key))).into_response(),
        Err(e) => {
            let current = state.playground.snapshot(&client).await.api_key;
            (
                jar,
                [(HX_TRIGGER, alert_trigger(&e.to_string()))],
                Html(ui::render_key_panel(&current)),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateForm {
    #[serde(default)]
    prompt: String,
}

async fn generate_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(kind): Path<String>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let Some(kind) = GenerationKind::from_segment(&kind) else {
        return (StatusCode::NOT_FOUND, format!("unknown generator: {kind}")).into_response();
    };
    let (jar, client) = client_session(jar);

    // Superseded or blank requests render whatever result is current.
    let result = match state.playground.generate(&client, kind, &form.prompt).await {
        Some(result) => Some(result),
        None => state.playground.snapshot(&client).await.result(kind).cloned(),
    };
    (jar, Html(ui::render_generator(kind, result, &form.prompt))).into_response()
}

async fn catalog_handler(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.playground.catalog().clone())
}
