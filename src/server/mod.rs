// src/server/mod.rs

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug_span, info, warn};

use crate::callbacks::{CallbackRegistry, Dependency, DispatchError, Patch};
use crate::config::APP_TITLE;
use crate::finals::Dataset;
use crate::ui::{build_layout, render::UPDATE_PATH, render_page, EventKind, Node};

/// Everything a request needs. Built once, never mutated.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub layout: Arc<Node>,
    pub page: Arc<String>,
    pub callbacks: Arc<CallbackRegistry>,
}

impl AppState {
    /// Build the layout and page for `dataset` and wire the dashboard callbacks.
    pub fn new(dataset: Dataset) -> Self {
        let layout = build_layout(&dataset);
        let page = render_page(&layout, APP_TITLE);
        info!(bytes = page.len(), "rendered dashboard");
        Self {
            dataset: Arc::new(dataset),
            layout: Arc::new(layout),
            page: Arc::new(page),
            callbacks: Arc::new(CallbackRegistry::dashboard()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub id: String,
    #[serde(default)]
    pub event: EventKind,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}

pub fn create_app(state: AppState, debug: bool) -> Router {
    let app = Router::new()
        .route("/", get(index))
        .route("/_dash-layout", get(layout))
        .route("/_dash-dependencies", get(dependencies))
        .route(UPDATE_PATH, post(update_component))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state);

    if debug {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

/// Bind `addr` and serve until ctrl-c.
pub async fn run(addr: SocketAddr, state: AppState, debug: bool) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Dash is running on http://{}/", addr);

    axum::serve(listener, create_app(state, debug))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving dashboard")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.as_str().to_owned())
}

async fn layout(State(state): State<AppState>) -> Json<Node> {
    Json(state.layout.as_ref().clone())
}

async fn dependencies(State(state): State<AppState>) -> Json<Vec<Dependency>> {
    Json(state.callbacks.dependencies())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME")
    }))
}

async fn update_component(
    State(state): State<AppState>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<Patch>, (StatusCode, Json<ErrorResponse>)> {
    let span = debug_span!("event", id = %req.id, event = %req.event);
    span.in_scope(|| {
        state
            .callbacks
            .dispatch(&state.dataset, &req.id, req.event, &req.value)
            .map(Json)
            .map_err(|e| {
                warn!(error = %e, value = %req.value, "update rejected");
                let status = match e {
                    DispatchError::UnknownTrigger { .. } => StatusCode::NOT_FOUND,
                    DispatchError::Lookup(_) => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (
                    status,
                    Json(ErrorResponse {
                        error: "Callback failed".to_string(),
                        details: Some(e.to_string()),
                    }),
                )
            })
    })
}
