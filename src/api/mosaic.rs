use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::MosaicData;
use crate::services::MosaicPipeline;

/// Board layout: a preset like `"2x2"` or a board count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum BoardCount {
    Count(u32),
    Named(String),
}

impl fmt::Display for BoardCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardCount::Count(n) => write!(f, "{n}"),
            BoardCount::Named(s) => write!(f, "{s}"),
        }
    }
}

/// Request body for mosaic generation
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MosaicRequest {
    /// PNG as a `data:image/png;base64,...` URI or bare base64, sized to
    /// exactly `cols*tile_size x rows*tile_size`
    pub image_data: String,
    /// `1x1`, `2x2`, `3x2`, `3x3`, `4x2`, or a board count
    pub boards: BoardCount,
}

/// Run the pipeline for a request and return the raw result
pub(crate) async fn run_pipeline(
    pipeline: &Arc<MosaicPipeline>,
    request: MosaicRequest,
) -> Result<mosaic_core::MosaicResult, ApiError> {
    let boards = request.boards.to_string();
    tracing::info!(boards = %boards, bytes = request.image_data.len(), "Mosaic requested");

    pipeline
        .clone()
        .generate_in_background(request.image_data, boards)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Mosaic generation failed");
            ApiError::from(e)
        })
}

/// Generate a mosaic
///
/// Quantizes the image to the palette and cuts it into boards. Nothing is
/// stored; use `/api/sessions` to edit the result.
#[utoipa::path(
    post,
    path = "/api/mosaic",
    request_body = MosaicRequest,
    responses(
        (status = 200, description = "Mosaic generated", body = MosaicData),
        (status = 400, description = "Invalid board count or image dimensions"),
        (status = 422, description = "Image could not be decoded; state is \"failed\""),
    ),
    tag = "Mosaic"
)]
pub async fn handle_mosaic(
    State(pipeline): State<Arc<MosaicPipeline>>,
    Json(request): Json<MosaicRequest>,
) -> Result<Json<MosaicData>, ApiError> {
    let result = run_pipeline(&pipeline, request).await?;
    let data = MosaicPipeline::to_wire(&result).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(data))
}
