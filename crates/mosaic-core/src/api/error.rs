//! Unified error type for the mosaic-core public API.

use std::fmt;

use crate::palette::PaletteError;
use crate::partition::GridError;
use crate::quantize::RasterError;

/// Wraps every error the crate produces for convenient `?` propagation.
///
/// All variants are input-contract violations: nothing is partially
/// computed when one is returned.
///
/// # Example
///
/// ```
/// use mosaic_core::{MosaicError, Palette};
///
/// fn load() -> Result<Palette, MosaicError> {
///     let palette = Palette::from_hex(&[("Black", "#000000")])?;
///     Ok(palette)
/// }
/// # load().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MosaicError {
    /// Palette validation error (empty or unparseable entry)
    Palette(PaletteError),
    /// Raster doesn't fit the grid contract
    Raster(RasterError),
    /// Board count or board set is invalid
    Grid(GridError),
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MosaicError::Palette(err) => write!(f, "palette error: {}", err),
            MosaicError::Raster(err) => write!(f, "raster error: {}", err),
            MosaicError::Grid(err) => write!(f, "grid error: {}", err),
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MosaicError::Palette(err) => Some(err),
            MosaicError::Raster(err) => Some(err),
            MosaicError::Grid(err) => Some(err),
        }
    }
}

impl From<PaletteError> for MosaicError {
    fn from(err: PaletteError) -> Self {
        MosaicError::Palette(err)
    }
}

impl From<RasterError> for MosaicError {
    fn from(err: RasterError) -> Self {
        MosaicError::Raster(err)
    }
}

impl From<GridError> for MosaicError {
    fn from(err: GridError) -> Self {
        MosaicError::Grid(err)
    }
}
