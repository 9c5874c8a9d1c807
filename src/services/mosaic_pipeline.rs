use std::sync::Arc;

use mosaic_core::{MosaicBuilder, MosaicError, MosaicResult, Palette};

use crate::error::CodecError;
use crate::models::{MosaicData, WireError};
use crate::rendering::{decode_image_data, decode_png, encode_png, to_data_uri};

/// Error from the mosaic pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Image error: {0}")]
    Image(#[from] CodecError),

    #[error("{0}")]
    Invalid(#[from] MosaicError),

    #[error("Invalid mosaic: {0}")]
    Wire(#[from] WireError),

    #[error("Worker failed: {0}")]
    Worker(String),
}

/// Decode → quantize → partition, and the reverse trip to wire form
pub struct MosaicPipeline {
    builder: MosaicBuilder,
    palette: Arc<Palette>,
}

impl MosaicPipeline {
    pub fn new(palette: Palette, tile_size: u32) -> Self {
        Self {
            palette: Arc::new(palette.clone()),
            builder: MosaicBuilder::new(palette).tile_size(tile_size),
        }
    }

    pub fn palette(&self) -> &Palette {
        self.builder.palette()
    }

    /// The palette as a shared handle for editor sessions
    pub fn shared_palette(&self) -> Arc<Palette> {
        self.palette.clone()
    }

    pub fn tile_size(&self) -> u32 {
        self.builder.configured_tile_size()
    }

    /// Build a mosaic from PNG bytes
    ///
    /// The board count is validated before the image is decoded.
    pub fn generate(&self, png_bytes: &[u8], boards: &str) -> Result<MosaicResult, PipelineError> {
        let grid = self.builder.grid(boards)?;
        let raster = decode_png(png_bytes)?;

        tracing::debug!(
            width = raster.width(),
            height = raster.height(),
            cols = grid.cols,
            rows = grid.rows,
            tile_size = grid.tile_size,
            "Quantizing raster"
        );

        let result = self.builder.build(&raster, &grid)?;

        tracing::info!(
            boards = result.boards().len(),
            colors = result.color_usage().len(),
            total_tiles = result.total_cells(),
            "Mosaic generated"
        );
        Ok(result)
    }

    /// Build a mosaic from a data URI or base64 string
    pub fn generate_from_image_data(
        &self,
        image_data: &str,
        boards: &str,
    ) -> Result<MosaicResult, PipelineError> {
        let png_bytes = decode_image_data(image_data)?;
        self.generate(&png_bytes, boards)
    }

    /// Run [`generate_from_image_data`](Self::generate_from_image_data) on a
    /// blocking worker thread.
    ///
    /// Quantization is CPU-bound and must not stall the async runtime.
    pub async fn generate_in_background(
        self: Arc<Self>,
        image_data: String,
        boards: String,
    ) -> Result<MosaicResult, PipelineError> {
        tokio::task::spawn_blocking(move || self.generate_from_image_data(&image_data, &boards))
            .await
            .map_err(|e| PipelineError::Worker(format!("Mosaic task failed: {e}")))?
    }

    /// Rebuild a result from a mosaic previously returned by the service
    ///
    /// The boards must use this pipeline's tile size.
    pub fn resume(&self, mosaic: &MosaicData) -> Result<MosaicResult, PipelineError> {
        let boards = mosaic.board_set()?;
        let found = boards.grid().tile_size;
        if found != self.tile_size() {
            return Err(WireError::TileSizeMismatch {
                expected: self.tile_size(),
                found,
            }
            .into());
        }

        tracing::info!(boards = boards.len(), "Resuming mosaic");
        Ok(MosaicResult::from_boards(boards, self.palette()))
    }

    /// Run [`resume`](Self::resume) on a blocking worker thread.
    pub async fn resume_in_background(
        self: Arc<Self>,
        mosaic: MosaicData,
    ) -> Result<MosaicResult, PipelineError> {
        tokio::task::spawn_blocking(move || self.resume(&mosaic))
            .await
            .map_err(|e| PipelineError::Worker(format!("Resume task failed: {e}")))?
    }

    /// Wire form of a result with the quantized raster as a PNG data URI
    pub fn to_wire(result: &MosaicResult) -> Result<MosaicData, CodecError> {
        let png_bytes = encode_png(result.quantized())?;
        Ok(MosaicData::from_result(result, to_data_uri(&png_bytes)))
    }
}
