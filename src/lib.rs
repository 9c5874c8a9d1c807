//! Brickboard - photo to brick mosaic
//!
//! HTTP service and CLI around `mosaic-core`: PNG decoding, the mosaic
//! pipeline, and editor sessions with undo/redo.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
