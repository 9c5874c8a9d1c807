//! Output types for the mosaic pipeline.
//!
//! [`MosaicResult`] bundles the quantized raster, per-color usage and the
//! board set. It is produced by [`MosaicBuilder::build`](crate::MosaicBuilder::build)
//! and re-derived from edited boards by
//! [`MosaicResult::from_boards`].

mod mosaic_result;

pub use mosaic_result::MosaicResult;
