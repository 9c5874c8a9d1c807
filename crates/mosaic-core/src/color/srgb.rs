//! 8-bit sRGB color type
//!
//! `Rgb` is the storage type for every pixel in the pipeline: source
//! rasters, quantized rasters and board cells all hold `Rgb` values.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as an uppercase `#RRGGBB` string.
    ///
    /// # Example
    /// ```
    /// use mosaic_core::Rgb;
    /// assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#FF8000");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a hex color string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    ///
    /// ```
    /// use mosaic_core::Rgb;
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting_is_uppercase() {
        assert_eq!(Rgb::new(0xab, 0xcd, 0xef).to_hex(), "#ABCDEF");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::WHITE.to_string(), "#FFFFFF");
    }

    #[test]
    fn test_parse_long_and_short_forms() {
        assert_eq!("#102030".parse::<Rgb>().unwrap(), Rgb::new(16, 32, 48));
        assert_eq!("102030".parse::<Rgb>().unwrap(), Rgb::new(16, 32, 48));
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert_eq!("  #0a0B0c ".parse::<Rgb>().unwrap(), Rgb::new(10, 11, 12));
    }

    #[test]
    fn test_parse_invalid_length() {
        assert_eq!(
            "#12345".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        );
        assert_eq!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
    }

    #[test]
    fn test_parse_invalid_hex() {
        assert!(matches!(
            "#GG0000".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_parse_rejects_multibyte_input() {
        assert!("#ééé".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_tuple_and_bytes() {
        let c: Rgb = (1, 2, 3).into();
        assert_eq!(c.to_bytes(), [1, 2, 3]);
        assert_eq!(Rgb::from_bytes([1, 2, 3]), c);
    }
}
