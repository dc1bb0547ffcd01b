// Web server — Axum-based form frontend and JSON API.
//
// GET / renders the input form, POST / runs one lookup and renders the
// result in place. POST /api/topics does the same over JSON. Pages are
// rendered server-side; the only script disables the submit button while
// the lookup is in flight.

use std::sync::Arc;

use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::resolver::traits::CompletionClient;

pub mod handlers;
pub mod pages;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Arc<dyn CompletionClient>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    config: Config,
    client: Arc<dyn CompletionClient>,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState {
        config: Arc::new(config),
        client,
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Topicmine listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::form::show_form).post(handlers::form::submit_form),
        )
        .route("/api/topics", post(handlers::topics::find_topics))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, kind: &str, message: &str) -> Response {
    (
        status,
        axum::Json(serde_json::json!({ "error": message, "kind": kind })),
    )
        .into_response()
}
