#![allow(clippy::excessive_precision, clippy::module_inception)]

//! mosaic-core: turn a raster into buildable brick-mosaic boards
//!
//! The crate maps every pixel of a preprocessed raster to the nearest color
//! of a fixed, named palette, cuts the result into square boards, and edits
//! those boards with batched undo/redo.
//!
//! # Quick Start
//!
//! [`MosaicBuilder`] is the primary entry point:
//!
//! ```
//! use mosaic_core::{MosaicBuilder, Palette, Rgb, SourceRaster};
//!
//! let palette = Palette::from_hex(&[("Black", "#000000"), ("White", "#FFFFFF")]).unwrap();
//! let builder = MosaicBuilder::new(palette).tile_size(2);
//!
//! let grid = builder.grid("2x2").unwrap();
//! let raster = SourceRaster::filled(4, 4, Rgb::new(240, 240, 240)).unwrap();
//! let mosaic = builder.build(&raster, &grid).unwrap();
//!
//! let ids: Vec<&str> = mosaic.boards().iter().map(|b| b.id()).collect();
//! assert_eq!(ids, ["A1", "B1", "A2", "B2"]);
//! assert_eq!(mosaic.color_usage().count_of(Rgb::WHITE), 16);
//! ```
//!
//! # Color Matching
//!
//! Matching happens in CIE L*a*b* (D65 reference white):
//!
//! ```text
//! Rgb (8-bit sRGB)
//!     |  gamma decode via build-time LUT
//!     v
//! LinearRgb
//!     |  D65 matrix, scaled to 0..100
//!     v
//! Xyz
//!     |  normalize by white, cube-root transfer
//!     v
//! Lab  --->  Euclidean distance to each palette entry
//! ```
//!
//! The scan is linear and keeps the first minimum, so palette order breaks
//! ties. Each entry's [`Lab`] is computed once when the [`Palette`] is built.
//!
//! # Boards
//!
//! A [`GridSpec`] is `cols × rows` boards of `tile_size × tile_size` cells.
//! Boards are labelled by column letter then 1-based row (`A1`, `B1`, ...,
//! `AA1` after `Z1`). Cells the raster doesn't cover are [`FILL_COLOR`].
//!
//! # Editing
//!
//! [`EditorSession`] owns the boards after the pipeline has run. Pointer
//! events in screen coordinates go through a [`ViewTransform`] and a
//! [`BoardLayout`] hit-test; each paint gesture becomes one undoable
//! [`EditBatch`].

pub mod api;
pub mod color;
pub mod editor;
pub mod output;
pub mod palette;
pub mod partition;
pub mod quantize;

#[cfg(test)]
mod domain_tests;

pub use api::{MosaicBuilder, MosaicError};
pub use color::{Lab, LinearRgb, Rgb, Xyz};
pub use editor::{
    BoardLayout, CellRef, EditBatch, EditorOptions, EditorSession, EditorState, PixelChange,
    Point, UndoHistory, ViewTransform, ZoomLimits,
};
pub use output::MosaicResult;
pub use palette::{NamedColor, Palette, PaletteError, ParseColorError};
pub use partition::{
    assemble, board_label, partition, Board, BoardSet, GridError, GridSpec, Position,
    DEFAULT_TILE_SIZE, FILL_COLOR, GRID_PRESETS, MAX_TILE_SIZE,
};
pub use quantize::{quantize, ColorCount, ColorUsage, QuantizedRaster, RasterError, SourceRaster};
