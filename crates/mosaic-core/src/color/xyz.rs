//! CIE 1931 XYZ color space (D65 illuminant, Y scaled to 0..100)

use super::linear_rgb::LinearRgb;
use super::srgb::Rgb;

/// A color in CIE XYZ space under D65, with `y` in 0.0..=100.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// D65 reference white (2° observer).
    pub const D65_WHITE: Xyz = Xyz {
        x: 95.047,
        y: 100.0,
        z: 108.883,
    };

    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<LinearRgb> for Xyz {
    /// Linear sRGB primaries to XYZ with the standard D65 matrix.
    fn from(rgb: LinearRgb) -> Self {
        let r = rgb.r * 100.0;
        let g = rgb.g * 100.0;
        let b = rgb.b * 100.0;
        Self {
            x: r * 0.4124 + g * 0.3576 + b * 0.1805,
            y: r * 0.2126 + g * 0.7152 + b * 0.0722,
            z: r * 0.0193 + g * 0.1192 + b * 0.9505,
        }
    }
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        Xyz::from(LinearRgb::from(rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_close_to_reference_white() {
        let white = Xyz::from(Rgb::WHITE);
        assert!((white.x - Xyz::D65_WHITE.x).abs() < 0.01);
        assert!((white.y - Xyz::D65_WHITE.y).abs() < 0.01);
        assert!((white.z - Xyz::D65_WHITE.z).abs() < 0.02);
    }

    #[test]
    fn test_black_is_origin() {
        assert_eq!(Xyz::from(Rgb::BLACK), Xyz::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_luminance_of_primaries() {
        // Y of each primary is its luminance coefficient
        assert!((Xyz::from(Rgb::new(255, 0, 0)).y - 21.26).abs() < 1e-9);
        assert!((Xyz::from(Rgb::new(0, 255, 0)).y - 71.52).abs() < 1e-9);
        assert!((Xyz::from(Rgb::new(0, 0, 255)).y - 7.22).abs() < 1e-9);
    }
}
