//! Board grid layout and partitioning of quantized rasters into boards

mod board;
mod error;
mod grid;
mod partitioner;

pub use board::{board_label, column_letters, Board, BoardSet, Position};
pub use error::GridError;
pub use grid::{GridSpec, DEFAULT_TILE_SIZE, GRID_PRESETS, MAX_TILE_SIZE};
pub use partitioner::{assemble, partition, FILL_COLOR};
