pub mod config;
pub mod mosaic;
pub mod session;

pub use config::{AppConfig, EditorConfig, PaletteEntry};
pub use mosaic::{BoardData, BoardPosition, ColorUsageData, MosaicData, PaletteColor, WireError};
pub use session::{Session, SessionId};
