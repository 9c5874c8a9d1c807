//! Linear RGB color type
//!
//! Linear RGB is proportional to physical light intensity and is the input
//! space for the XYZ matrix.

use super::lut::srgb8_to_linear;
use super::srgb::Rgb;

/// A color in linear RGB space, channels in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for LinearRgb {
    /// Inverse-gamma linearization of an 8-bit sRGB color.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb8_to_linear(rgb.r),
            g: srgb8_to_linear(rgb.g),
            b: srgb8_to_linear(rgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        assert_eq!(LinearRgb::from(Rgb::BLACK), LinearRgb::new(0.0, 0.0, 0.0));
        let white = LinearRgb::from(Rgb::WHITE);
        assert!((white.r - 1.0).abs() < 1e-12);
        assert!((white.g - 1.0).abs() < 1e-12);
        assert!((white.b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mid_grey_is_darker_in_linear() {
        // sRGB 128 is roughly 21.6% linear light
        let grey = LinearRgb::from(Rgb::new(128, 128, 128));
        assert!((grey.r - 0.2158605).abs() < 1e-6);
    }
}
