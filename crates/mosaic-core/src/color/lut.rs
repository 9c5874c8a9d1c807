//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs with one entry per
//! 8-bit channel value.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Convert an 8-bit sRGB channel to linear light (0.0..=1.0).
#[inline]
pub fn srgb8_to_linear(channel: u8) -> f64 {
    SRGB8_TO_LINEAR[channel as usize]
}
