//! MosaicBuilder: the pipeline entry point.
//!
//! [`MosaicBuilder`] holds the process-wide palette and tile size and runs
//! quantization followed by partitioning.

use crate::output::MosaicResult;
use crate::palette::Palette;
use crate::partition::{partition, GridSpec, DEFAULT_TILE_SIZE};
use crate::quantize::{quantize, SourceRaster};

use super::MosaicError;

/// Builds [`MosaicResult`]s from preprocessed rasters.
///
/// The builder is reusable; [`build()`](Self::build) takes `&self`.
///
/// # Example
///
/// ```
/// use mosaic_core::{MosaicBuilder, Palette, Rgb, SourceRaster};
///
/// let palette = Palette::from_hex(&[("K", "#000000"), ("W", "#FFFFFF")]).unwrap();
/// let builder = MosaicBuilder::new(palette).tile_size(2);
///
/// let grid = builder.grid("1x1").unwrap();
/// let raster = SourceRaster::filled(2, 2, Rgb::new(10, 10, 10)).unwrap();
/// let mosaic = builder.build(&raster, &grid).unwrap();
///
/// assert_eq!(mosaic.total_cells(), 4);
/// assert_eq!(mosaic.boards().get("A1").unwrap().get(0, 0), Some(Rgb::BLACK));
/// ```
#[derive(Debug, Clone)]
pub struct MosaicBuilder {
    palette: Palette,
    tile_size: u32,
}

impl MosaicBuilder {
    /// Create a builder with the default tile size of 32.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }

    /// Set the board edge length in cells.
    #[inline]
    pub fn tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn configured_tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Resolve a board-count value (`"2x2"`, `"6"`, ...) with this builder's
    /// tile size.
    pub fn grid(&self, board_count: &str) -> Result<GridSpec, MosaicError> {
        Ok(GridSpec::from_board_count(board_count, self.tile_size)?)
    }

    /// Quantize `raster` and cut it into boards.
    ///
    /// # Errors
    ///
    /// [`MosaicError::Raster`] if the raster isn't tile-aligned or isn't
    /// exactly the grid's size. Nothing is computed in that case.
    pub fn build(&self, raster: &SourceRaster, grid: &GridSpec) -> Result<MosaicResult, MosaicError> {
        grid.check_raster(raster.width(), raster.height())?;

        let (quantized, usage) = quantize(raster, &self.palette);
        let boards = partition(&quantized, grid);

        Ok(MosaicResult::new(quantized, usage, boards))
    }
}
