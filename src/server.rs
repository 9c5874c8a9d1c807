//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::{self, CreateSessionRequest, EditorEvent, MosaicRequest, SessionResponse};
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::{AppConfig, MosaicData, PaletteColor};
use crate::services::{InMemorySessionStore, MosaicPipeline};
use mosaic_core::GridSpec;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pipeline: Arc<MosaicPipeline>,
    pub sessions: Arc<InMemorySessionStore>,
}

/// Create application state from an asset loader.
///
/// Fails when the configured palette is empty or has an invalid color.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    create_app_state_from_config(AppConfig::load_from_assets(&asset_loader))
}

/// Create application state from an already loaded config.
///
/// Fails fast on an invalid palette, tile size or session TTL.
pub fn create_app_state_from_config(config: AppConfig) -> anyhow::Result<AppState> {
    let palette = config
        .build_palette()
        .map_err(|e| anyhow::anyhow!("Invalid palette: {e}"))?;
    GridSpec::new(1, 1, config.tile_size).map_err(|e| anyhow::anyhow!("Invalid tile_size: {e}"))?;
    let session_ttl = config
        .session_ttl()
        .map_err(|e| anyhow::anyhow!("Invalid session_ttl_secs: {e}"))?;
    let pipeline = Arc::new(MosaicPipeline::new(palette, config.tile_size));

    Ok(AppState {
        config: Arc::new(config),
        pipeline,
        sessions: Arc::new(InMemorySessionStore::with_idle_ttl(session_ttl)),
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/palette", get(handle_palette))
        .route("/api/mosaic", post(handle_mosaic))
        .route("/api/sessions", post(handle_create_session))
        .route(
            "/api/sessions/:id",
            get(handle_get_session).delete(handle_delete_session),
        )
        .route("/api/sessions/:id/events", post(handle_session_event))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_palette(State(state): State<AppState>) -> Json<Vec<PaletteColor>> {
    api::handle_palette(State(state.pipeline)).await
}

async fn handle_mosaic(
    State(state): State<AppState>,
    request: Json<MosaicRequest>,
) -> Result<Json<MosaicData>, ApiError> {
    api::handle_mosaic(State(state.pipeline), request).await
}

async fn handle_create_session(
    State(state): State<AppState>,
    request: Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    api::handle_create_session(
        State(state.pipeline),
        State(state.config),
        State(state.sessions),
        request,
    )
    .await
}

async fn handle_get_session(
    State(state): State<AppState>,
    id: Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    api::handle_get_session(State(state.sessions), id).await
}

async fn handle_session_event(
    State(state): State<AppState>,
    id: Path<String>,
    event: Json<EditorEvent>,
) -> Result<Json<SessionResponse>, ApiError> {
    api::handle_session_event(State(state.pipeline), State(state.sessions), id, event).await
}

async fn handle_delete_session(
    State(state): State<AppState>,
    id: Path<String>,
) -> Result<StatusCode, ApiError> {
    api::handle_delete_session(State(state.sessions), id).await
}
