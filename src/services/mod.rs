pub mod mosaic_pipeline;
pub mod session_store;

pub use mosaic_pipeline::{MosaicPipeline, PipelineError};
pub use session_store::{InMemorySessionStore, SessionHandle, SessionStore};
