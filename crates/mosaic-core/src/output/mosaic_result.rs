//! MosaicResult: the pipeline's product and the editor's snapshot type.

use std::collections::HashMap;

use crate::color::Rgb;
use crate::palette::{NamedColor, Palette};
use crate::partition::{assemble, BoardSet, GridSpec};
use crate::quantize::{ColorUsage, QuantizedRaster};

/// Quantized raster, color usage and boards of one mosaic.
///
/// `total_cells()` always equals the number of cells in the grid. The sum of
/// color usage equals the quantized raster's pixel count.
#[derive(Debug, Clone, PartialEq)]
pub struct MosaicResult {
    quantized: QuantizedRaster,
    usage: ColorUsage,
    boards: BoardSet,
    total_cells: u64,
}

impl MosaicResult {
    pub(crate) fn new(quantized: QuantizedRaster, usage: ColorUsage, boards: BoardSet) -> Self {
        let total_cells = boards.grid().total_cells();
        Self {
            quantized,
            usage,
            boards,
            total_cells,
        }
    }

    /// Rebuild a result from (possibly edited) boards.
    ///
    /// The raster is reassembled at full grid extent and usage is recounted
    /// in row-major first-seen order. Colors found in `palette` keep their
    /// entry name (the first entry with that value); any other color, such
    /// as fill, is named by its hex string.
    pub fn from_boards(boards: BoardSet, palette: &Palette) -> Self {
        let quantized = assemble(&boards);
        let usage = recount(&quantized, palette);
        Self::new(quantized, usage, boards)
    }

    #[inline]
    pub fn quantized(&self) -> &QuantizedRaster {
        &self.quantized
    }

    #[inline]
    pub fn color_usage(&self) -> &ColorUsage {
        &self.usage
    }

    #[inline]
    pub fn boards(&self) -> &BoardSet {
        &self.boards
    }

    #[inline]
    pub fn grid(&self) -> GridSpec {
        self.boards.grid()
    }

    #[inline]
    pub fn total_cells(&self) -> u64 {
        self.total_cells
    }

    /// Give up the result, keeping only the boards.
    pub fn into_boards(self) -> BoardSet {
        self.boards
    }
}

fn recount(raster: &QuantizedRaster, palette: &Palette) -> ColorUsage {
    let mut names: HashMap<Rgb, NamedColor> = HashMap::new();
    let mut usage = ColorUsage::new();
    for &px in raster.pixels() {
        let color = names.entry(px).or_insert_with(|| match palette.position_of(px) {
            Some(idx) => palette.get(idx).clone(),
            None => NamedColor::new(px.to_hex(), px),
        });
        usage.record(color);
    }
    usage
}
