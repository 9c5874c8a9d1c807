use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::models::PaletteColor;
use crate::services::MosaicPipeline;

/// List the brick palette
///
/// Colors are returned in palette order, which is also the tie-break order
/// used when matching pixels.
#[utoipa::path(
    get,
    path = "/api/palette",
    responses(
        (status = 200, description = "Ordered palette", body = [PaletteColor]),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(State(pipeline): State<Arc<MosaicPipeline>>) -> Json<Vec<PaletteColor>> {
    Json(pipeline.palette().iter().map(PaletteColor::from).collect())
}
