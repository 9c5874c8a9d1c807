use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use mosaic_core::{EditorSession, EditorState, MosaicResult, Point, Rgb};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::mosaic::{run_pipeline, MosaicRequest};
use crate::error::ApiError;
use crate::models::{AppConfig, MosaicData, Session, SessionId};
use crate::services::{MosaicPipeline, SessionHandle, SessionStore};

/// Request body for starting an editor session
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CreateSessionRequest {
    /// Resume editing a previously returned mosaic
    Resume { mosaic: MosaicData },
    /// Generate a new mosaic from an image
    Generate(MosaicRequest),
}

/// Which pointer button started a gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PointerButton {
    /// Paints with the brush color
    #[default]
    Primary,
    /// Pans the view
    Secondary,
    /// Pans the view
    Middle,
}

/// One editor input event, in screen coordinates
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditorEvent {
    /// Start a paint stroke (primary button) or a pan
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: PointerButton,
        /// Brush color as `#RRGGBB`; must be a palette color. Required for painting.
        #[serde(default)]
        color: Option<String>,
    },
    /// Extend the current stroke or pan
    PointerMove { x: f64, y: f64 },
    /// Finish the current stroke or pan
    PointerUp,
    /// Zoom by `factor` around the pointer
    Wheel { x: f64, y: f64, factor: f64 },
    Undo,
    Redo,
}

/// Current pan and zoom
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewData {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

/// Editor session status
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    /// `idle`, `painting` or `panning`
    pub state: String,
    pub can_undo: bool,
    pub can_redo: bool,
    pub view: ViewData,
    /// RFC 3339 creation time
    pub created_at: String,
    /// Whether the event changed the boards or the view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed: Option<bool>,
    /// Snapshot of the boards; present when they changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mosaic: Option<MosaicData>,
}

impl SessionResponse {
    fn build(
        id: &SessionId,
        session: &Session,
        changed: Option<bool>,
        snapshot: Option<MosaicResult>,
    ) -> Result<Self, ApiError> {
        let editor = &session.editor;
        let view = editor.view();
        let mosaic = snapshot
            .map(|result| MosaicPipeline::to_wire(&result))
            .transpose()
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        Ok(Self {
            session_id: id.to_string(),
            state: editor.state().as_str().to_string(),
            can_undo: editor.can_undo(),
            can_redo: editor.can_redo(),
            view: ViewData {
                pan_x: view.pan_x,
                pan_y: view.pan_y,
                zoom: view.zoom,
            },
            created_at: session.created_at.to_rfc3339(),
            changed,
            mosaic,
        })
    }
}

/// What an event did
#[derive(Debug, Default, PartialEq, Eq)]
struct EventOutcome {
    changed: bool,
    boards_changed: bool,
}

fn outcome(changed: bool, boards_changed: bool) -> EventOutcome {
    EventOutcome {
        changed,
        boards_changed,
    }
}

/// Parse a brush color and require it to be a palette color
fn brush_color(pipeline: &MosaicPipeline, color: Option<&str>) -> Result<Rgb, ApiError> {
    let value = color.ok_or_else(|| ApiError::BadRequest("pointerDown needs a color to paint".into()))?;
    let rgb = value
        .parse::<Rgb>()
        .map_err(|e| ApiError::BadRequest(format!("invalid color '{value}': {e}")))?;
    if pipeline.palette().position_of(rgb).is_none() {
        return Err(ApiError::BadRequest(format!(
            "color {} is not in the palette",
            rgb.to_hex()
        )));
    }
    Ok(rgb)
}

/// Apply one event to the editor
///
/// Pointer events that miss every board are accepted and change nothing.
fn apply_event(
    editor: &mut EditorSession,
    pipeline: &MosaicPipeline,
    event: EditorEvent,
) -> Result<EventOutcome, ApiError> {
    let result = match event {
        EditorEvent::PointerDown {
            x,
            y,
            button: PointerButton::Primary,
            color,
        } => {
            let color = brush_color(pipeline, color.as_deref())?;
            outcome(editor.begin_paint(Point::new(x, y), color), false)
        }
        EditorEvent::PointerDown { x, y, .. } => outcome(editor.begin_pan(Point::new(x, y)), false),
        EditorEvent::PointerMove { x, y } => {
            let point = Point::new(x, y);
            let changed = match editor.state() {
                EditorState::Painting => editor.continue_paint(point),
                EditorState::Panning => editor.continue_pan(point),
                EditorState::Idle => false,
            };
            outcome(changed, false)
        }
        EditorEvent::PointerUp => match editor.state() {
            EditorState::Painting => {
                let committed = editor.end_paint() > 0;
                outcome(committed, committed)
            }
            EditorState::Panning => outcome(editor.end_pan(), false),
            EditorState::Idle => EventOutcome::default(),
        },
        EditorEvent::Wheel { x, y, factor } => outcome(editor.zoom_at(Point::new(x, y), factor), false),
        EditorEvent::Undo => {
            let done = editor.undo();
            outcome(done, done)
        }
        EditorEvent::Redo => {
            let done = editor.redo();
            outcome(done, done)
        }
    };
    Ok(result)
}

async fn lookup<S: SessionStore>(store: &S, id: &str) -> Result<(SessionId, SessionHandle), ApiError> {
    let id = SessionId::new(id);
    let handle = store
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::SessionNotFound)?;
    Ok((id, handle))
}

/// Start an editor session
///
/// Either generates a mosaic from an image (same body as `/api/mosaic`) or
/// resumes a mosaic previously returned by the service.
#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Session started", body = SessionResponse),
        (status = 400, description = "Invalid board count, image dimensions or mosaic"),
        (status = 422, description = "Image could not be decoded; state is \"failed\""),
    ),
    tag = "Sessions"
)]
pub async fn handle_create_session<S: SessionStore>(
    State(pipeline): State<Arc<MosaicPipeline>>,
    State(config): State<Arc<AppConfig>>,
    State(store): State<Arc<S>>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let mosaic = match request {
        CreateSessionRequest::Generate(request) => run_pipeline(&pipeline, request).await?,
        CreateSessionRequest::Resume { mosaic } => {
            pipeline.clone().resume_in_background(mosaic).await?
        }
    };

    let editor = EditorSession::with_options(
        mosaic,
        pipeline.shared_palette(),
        config.editor.options(),
    );
    let id = store.insert(Session::new(editor)).await?;
    tracing::info!(session_id = %id, "Editor session started");

    let (id, handle) = lookup(store.as_ref(), id.as_str()).await?;
    let session = handle.lock().await;
    let snapshot = session.editor.snapshot();
    let response = SessionResponse::build(&id, &session, None, Some(snapshot))?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get the current state and boards of a session
#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = 200, description = "Session snapshot", body = SessionResponse),
        (status = 404, description = "Unknown session"),
    ),
    tag = "Sessions"
)]
pub async fn handle_get_session<S: SessionStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let (id, handle) = lookup(store.as_ref(), &id).await?;
    let session = handle.lock().await;
    let snapshot = session.editor.snapshot();
    Ok(Json(SessionResponse::build(&id, &session, None, Some(snapshot))?))
}

/// Send one editor event
///
/// Events on a session are applied one at a time. The mosaic snapshot is
/// included when the event committed a stroke or ran undo/redo.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/events",
    params(("id" = String, Path, description = "Session id")),
    request_body = EditorEvent,
    responses(
        (status = 200, description = "Event applied", body = SessionResponse),
        (status = 400, description = "Missing or non-palette brush color"),
        (status = 404, description = "Unknown session"),
    ),
    tag = "Sessions"
)]
pub async fn handle_session_event<S: SessionStore>(
    State(pipeline): State<Arc<MosaicPipeline>>,
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    Json(event): Json<EditorEvent>,
) -> Result<Json<SessionResponse>, ApiError> {
    let (id, handle) = lookup(store.as_ref(), &id).await?;
    let mut session = handle.lock().await;
    session.touch();

    let result = apply_event(&mut session.editor, &pipeline, event)?;
    tracing::debug!(
        session_id = %id,
        state = session.editor.state().as_str(),
        changed = result.changed,
        "Editor event applied"
    );

    let snapshot = result.boards_changed.then(|| session.editor.snapshot());
    Ok(Json(SessionResponse::build(
        &id,
        &session,
        Some(result.changed),
        snapshot,
    )?))
}

/// End a session and discard its history
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = 204, description = "Session ended"),
        (status = 404, description = "Unknown session"),
    ),
    tag = "Sessions"
)]
pub async fn handle_delete_session<S: SessionStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = SessionId::new(id);
    if !store.remove(&id).await? {
        return Err(ApiError::SessionNotFound);
    }
    tracing::info!(session_id = %id, "Editor session ended");
    Ok(StatusCode::NO_CONTENT)
}
