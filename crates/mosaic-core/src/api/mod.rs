//! Public API for the mosaic-core crate.
//!
//! This module provides the high-level API: [`MosaicBuilder`] and the
//! [`MosaicError`] unified error type.

mod builder;
mod error;

pub use builder::MosaicBuilder;
pub use error::MosaicError;
