use crate::assets::AssetLoader;
use mosaic_core::{
    BoardLayout, EditorOptions, NamedColor, Palette, PaletteError, Rgb, ZoomLimits,
    DEFAULT_TILE_SIZE,
};
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Brick colors, in tie-break order
    #[serde(default)]
    pub palette: Vec<PaletteEntry>,

    /// Cells per board edge
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// Board count used by the render command when none is given
    #[serde(default = "default_boards")]
    pub default_boards: String,

    /// Editor canvas settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Seconds a session may sit idle before it is dropped; 0 keeps
    /// sessions until deleted
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

fn default_boards() -> String {
    "2x2".to_string()
}

fn default_session_ttl_secs() -> u64 {
    3600
}

/// One named palette color
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteEntry {
    pub name: String,
    /// `#RRGGBB` or `#RGB`
    pub hex: String,
}

/// Canvas geometry and zoom bounds for editor sessions
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EditorConfig {
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,
    #[serde(default = "default_board_gap")]
    pub board_gap: f64,
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
}

fn default_cell_size() -> f64 {
    16.0
}

fn default_board_gap() -> f64 {
    8.0
}

fn default_min_zoom() -> f64 {
    0.25
}

fn default_max_zoom() -> f64 {
    8.0
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            board_gap: default_board_gap(),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
        }
    }
}

impl EditorConfig {
    pub fn options(&self) -> EditorOptions {
        let (min, max) = if self.min_zoom <= self.max_zoom {
            (self.min_zoom, self.max_zoom)
        } else {
            (self.max_zoom, self.min_zoom)
        };
        EditorOptions {
            layout: BoardLayout {
                cell_size: self.cell_size,
                board_gap: self.board_gap,
            },
            zoom_limits: ZoomLimits { min, max },
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    ///
    /// An unreadable or unparseable external file falls back to the
    /// embedded config with a warning.
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        let parsed = loader
            .read_config_string()
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_yaml(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(config) => {
                tracing::info!(
                    colors = config.palette.len(),
                    tile_size = config.tile_size,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using embedded defaults");
                Self::embedded()
            }
        }
    }

    /// The configuration shipped inside the binary
    pub fn embedded() -> Self {
        AssetLoader::embedded_config_string()
            .ok()
            .and_then(|content| Self::from_yaml(&content).ok())
            .unwrap_or_default()
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Idle timeout for editor sessions, `None` when expiry is disabled
    pub fn session_ttl(&self) -> Result<Option<chrono::Duration>, chrono::OutOfRangeError> {
        if self.session_ttl_secs == 0 {
            return Ok(None);
        }
        chrono::Duration::from_std(std::time::Duration::from_secs(self.session_ttl_secs)).map(Some)
    }

    /// Build the process-wide palette
    ///
    /// Fails on an empty palette or an entry with an invalid hex color.
    pub fn build_palette(&self) -> Result<Palette, PaletteError> {
        let colors = self
            .palette
            .iter()
            .map(|entry| {
                entry
                    .hex
                    .parse::<Rgb>()
                    .map(|rgb| NamedColor::new(entry.name.clone(), rgb))
                    .map_err(|source| PaletteError::ParseColor {
                        name: entry.name.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(colors)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: Vec::new(),
            tile_size: default_tile_size(),
            default_boards: default_boards(),
            editor: EditorConfig::default(),
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}
