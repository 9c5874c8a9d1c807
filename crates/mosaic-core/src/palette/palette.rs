//! Palette of named reference colors with perceptual nearest-color lookup.

use std::fmt;

use super::error::PaletteError;
use crate::color::{Lab, Rgb};

/// A palette entry: a display name and its sRGB value.
///
/// Names and values are not required to be unique within a palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedColor {
    pub name: String,
    pub rgb: Rgb,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            name: name.into(),
            rgb,
        }
    }

    /// Uppercase `#RRGGBB` form of the color.
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rgb)
    }
}

/// An ordered, non-empty set of [`NamedColor`]s.
///
/// Order is significant: when two entries are equally close to a sample,
/// the one that appears first wins. The L*a*b* value of every entry is
/// computed once at construction.
///
/// # Example
///
/// ```
/// use mosaic_core::{Palette, Rgb};
///
/// let palette = Palette::from_hex(&[("Black", "#000000"), ("White", "#FFFFFF")]).unwrap();
/// assert_eq!(palette.nearest(Rgb::new(10, 10, 10)).name, "Black");
/// assert_eq!(palette.nearest(Rgb::new(240, 240, 240)).name, "White");
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<NamedColor>,
    labs: Vec<Lab>,
}

impl Palette {
    /// Create a palette from named colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<NamedColor>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        let labs = colors.iter().map(|c| Lab::from(c.rgb)).collect();
        Ok(Self { colors, labs })
    }

    /// Create a palette from `(name, hex)` pairs.
    pub fn from_hex(entries: &[(&str, &str)]) -> Result<Self, PaletteError> {
        let colors = entries
            .iter()
            .map(|(name, hex)| {
                hex.parse::<Rgb>()
                    .map(|rgb| NamedColor::new(*name, rgb))
                    .map_err(|source| PaletteError::ParseColor {
                        name: name.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> &NamedColor {
        &self.colors[idx]
    }

    #[inline]
    pub fn lab(&self, idx: usize) -> Lab {
        self.labs[idx]
    }

    pub fn colors(&self) -> &[NamedColor] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedColor> {
        self.colors.iter()
    }

    /// Index of the first entry whose value is exactly `rgb`.
    pub fn position_of(&self, rgb: Rgb) -> Option<usize> {
        self.colors.iter().position(|c| c.rgb == rgb)
    }

    /// Find the palette entry perceptually closest to `color`.
    ///
    /// Returns `(index, distance)` where distance is the Euclidean L*a*b*
    /// distance. The scan is linear and only replaces the current best on a
    /// strictly smaller distance, so ties go to the earliest entry.
    #[inline]
    pub fn find_nearest(&self, color: Lab) -> (usize, f64) {
        let mut best_idx = 0;
        let mut best_dist = f64::MAX;

        for (i, &candidate) in self.labs.iter().enumerate() {
            let dist = color.distance_squared(candidate);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist.sqrt())
    }

    /// Index of the entry nearest to an sRGB sample.
    #[inline]
    pub fn nearest_index(&self, rgb: Rgb) -> usize {
        self.find_nearest(Lab::from(rgb)).0
    }

    /// The entry nearest to an sRGB sample.
    pub fn nearest(&self, rgb: Rgb) -> &NamedColor {
        &self.colors[self.nearest_index(rgb)]
    }
}
