//! Per-color cell counts in first-seen order.

use std::collections::HashMap;

use crate::color::Rgb;
use crate::palette::NamedColor;

/// How many cells use one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCount {
    pub color: NamedColor,
    pub count: u64,
}

/// Color usage counts, ordered by first occurrence.
///
/// Entries are keyed by color value. Quantization always maps a value to
/// the same palette entry, so this is equivalent to keying by entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorUsage {
    entries: Vec<ColorCount>,
    index: HashMap<Rgb, usize>,
}

impl ColorUsage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more cell of `color`.
    pub fn record(&mut self, color: &NamedColor) {
        self.record_n(color, 1);
    }

    /// Count `n` more cells of `color`.
    pub fn record_n(&mut self, color: &NamedColor, n: u64) {
        match self.index.get(&color.rgb) {
            Some(&i) => self.entries[i].count += n,
            None => {
                self.index.insert(color.rgb, self.entries.len());
                self.entries.push(ColorCount {
                    color: color.clone(),
                    count: n,
                });
            }
        }
    }

    /// Count for a color value, 0 if never seen.
    pub fn count_of(&self, rgb: Rgb) -> u64 {
        self.index
            .get(&rgb)
            .map(|&i| self.entries[i].count)
            .unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorCount> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ColorCount] {
        &self.entries
    }
}
