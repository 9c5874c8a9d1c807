//! Row-major RGB rasters before and after quantization.

use super::error::RasterError;
use crate::color::Rgb;

fn validate(width: u32, height: u32, len: usize) -> Result<(), RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::ZeroDimension);
    }
    if len != width as usize * height as usize {
        return Err(RasterError::DimensionMismatch { len, width, height });
    }
    Ok(())
}

/// A preprocessed input image, already sized for the board grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRaster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl SourceRaster {
    /// Wrap a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// [`RasterError::ZeroDimension`] or [`RasterError::DimensionMismatch`].
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, RasterError> {
        validate(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from packed `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, RasterError> {
        if bytes.len() % 3 != 0 {
            return Err(RasterError::DimensionMismatch {
                len: bytes.len() / 3,
                width,
                height,
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Fill a raster with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, RasterError> {
        Self::new(width, height, vec![color; width as usize * height as usize])
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }
}

/// A raster whose every pixel holds a palette color value.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedRaster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl QuantizedRaster {
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "quantized pixel count must match {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Packed `[R, G, B, ...]` bytes, length `width * height * 3`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            rgb.extend_from_slice(&px.to_bytes());
        }
        rgb
    }
}
