//! Interactive tile editing.
//!
//! - [`ViewTransform`] / [`BoardLayout`]: pan/zoom view and board hit-testing
//! - [`UndoHistory`]: batched undo/redo of cell edits
//! - [`EditorSession`]: the `Idle`/`Painting`/`Panning` state machine that
//!   owns a mosaic's live boards

mod engine;
mod history;
mod transform;

pub use engine::{EditorOptions, EditorSession, EditorState};
pub use history::{EditBatch, PixelChange, UndoHistory};
pub use transform::{BoardLayout, CellRef, Point, ViewTransform, ZoomLimits};
