//! Color types and conversion utilities
//!
//! Every conversion used for matching goes one way, from 8-bit sRGB towards
//! CIE L*a*b*:
//!
//! ```text
//! Rgb (8-bit sRGB) -> LinearRgb -> Xyz (D65, 0..100) -> Lab
//! ```
//!
//! # Example
//!
//! ```
//! use mosaic_core::{Lab, Rgb};
//!
//! let grey = Rgb::new(119, 119, 119);
//! let lab = Lab::from(grey);
//! assert!((lab.l - 50.0).abs() < 0.5);
//! ```

mod lab;
mod linear_rgb;
mod lut;
mod srgb;
mod xyz;

pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use srgb::Rgb;
pub use xyz::Xyz;
