//! CIE L*a*b* color space
//!
//! Palette matching measures plain Euclidean distance between two `Lab`
//! values. This is the CIE76 color difference, not CIEDE2000; switching
//! metrics would change which palette entry many pixels map to.

use super::srgb::Rgb;
use super::xyz::Xyz;

/// Threshold between the cube-root and linear segments of the Lab transfer.
const EPSILON: f64 = 0.008856;
/// Slope of the linear segment.
const KAPPA_SLOPE: f64 = 7.787;
const LINEAR_OFFSET: f64 = 16.0 / 116.0;

/// A color in CIE L*a*b* space (D65 white).
///
/// - `l`: lightness, 0.0 (black) to 100.0 (white)
/// - `a`: green (negative) to red (positive)
/// - `b`: blue (negative) to yellow (positive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance. Preserves ordering of [`Lab::distance`]
    /// and skips the square root.
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// Euclidean distance (CIE76 ΔE).
    ///
    /// ```
    /// use mosaic_core::Lab;
    ///
    /// let a = Lab::new(50.0, 0.0, 0.0);
    /// let b = Lab::new(53.0, 4.0, 0.0);
    /// assert!((a.distance(b) - 5.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn distance(self, other: Lab) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

#[inline]
fn transfer(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + LINEAR_OFFSET
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = transfer(xyz.x / Xyz::D65_WHITE.x);
        let fy = transfer(xyz.y / Xyz::D65_WHITE.y);
        let fz = transfer(xyz.z / Xyz::D65_WHITE.z);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        Lab::from(Xyz::from(rgb))
    }
}
