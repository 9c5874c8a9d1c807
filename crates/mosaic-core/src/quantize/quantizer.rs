//! Nearest-palette quantization of a whole raster.

use std::collections::HashMap;

use super::raster::{QuantizedRaster, SourceRaster};
use super::usage::ColorUsage;
use crate::color::Rgb;
use crate::palette::Palette;

/// Map every pixel to its nearest palette color.
///
/// Pixels are visited in row-major order, which fixes the first-seen order
/// of the returned [`ColorUsage`]. Each distinct source color is matched
/// once; the result is identical to matching every pixel independently.
///
/// # Example
///
/// ```
/// use mosaic_core::{quantize, Palette, Rgb, SourceRaster};
///
/// let palette = Palette::from_hex(&[("K", "#000000"), ("W", "#FFFFFF")]).unwrap();
/// let raster = SourceRaster::filled(2, 2, Rgb::new(10, 10, 10)).unwrap();
///
/// let (quantized, usage) = quantize(&raster, &palette);
/// assert!(quantized.pixels().iter().all(|&p| p == Rgb::BLACK));
/// assert_eq!(usage.total(), 4);
/// ```
pub fn quantize(raster: &SourceRaster, palette: &Palette) -> (QuantizedRaster, ColorUsage) {
    let mut nearest: HashMap<Rgb, usize> = HashMap::new();
    let mut usage = ColorUsage::new();
    let mut pixels = Vec::with_capacity(raster.pixels().len());

    for &px in raster.pixels() {
        let idx = *nearest
            .entry(px)
            .or_insert_with(|| palette.nearest_index(px));
        let matched = palette.get(idx);
        pixels.push(matched.rgb);
        usage.record(matched);
    }

    let quantized = QuantizedRaster::from_parts(raster.width(), raster.height(), pixels);
    (quantized, usage)
}
