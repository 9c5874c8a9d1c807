//! Raster types and palette quantization
//!
//! [`quantize()`] maps every pixel of a [`SourceRaster`] to its nearest
//! palette entry and tallies how often each entry is used.

mod error;
mod quantizer;
mod raster;
mod usage;

pub use error::RasterError;
pub use quantizer::quantize;
pub use raster::{QuantizedRaster, SourceRaster};
pub use usage::{ColorCount, ColorUsage};
