//! Error type for raster validation

use std::fmt;

/// Error type for malformed rasters handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Width or height is zero
    ZeroDimension,
    /// Pixel buffer length doesn't match the declared dimensions
    DimensionMismatch {
        /// Number of pixels supplied
        len: usize,
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
    },
    /// Width or height isn't a whole number of tiles
    NotTileAligned {
        width: u32,
        height: u32,
        tile_size: u32,
    },
    /// Raster is not exactly the size of the board grid
    GridMismatch {
        width: u32,
        height: u32,
        grid_width: u32,
        grid_height: u32,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::ZeroDimension => write!(f, "raster dimensions cannot be zero"),
            RasterError::DimensionMismatch { len, width, height } => write!(
                f,
                "pixel buffer length {} does not match dimensions {}x{}",
                len, width, height
            ),
            RasterError::NotTileAligned {
                width,
                height,
                tile_size,
            } => write!(
                f,
                "raster {}x{} is not a multiple of tile size {}",
                width, height, tile_size
            ),
            RasterError::GridMismatch {
                width,
                height,
                grid_width,
                grid_height,
            } => write!(
                f,
                "raster {}x{} does not match the board grid {}x{}",
                width, height, grid_width, grid_height
            ),
        }
    }
}

impl std::error::Error for RasterError {}
