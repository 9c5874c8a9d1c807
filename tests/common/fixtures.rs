//! Test fixtures and constants.

use brickboard::models::{AppConfig, EditorConfig, PaletteEntry};
use brickboard::rendering::{encode_rgb_png, to_data_uri};

/// Colors of the small test palette
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const WHITE: &str = "#FFFFFF";
    /// Not in any test palette
    pub const ORANGE: &str = "#FF8800";
}

/// Two colors, 2-cell boards, 10 unit cells with 5 unit gaps
pub fn small_config() -> AppConfig {
    AppConfig {
        palette: vec![
            PaletteEntry {
                name: "Black".to_string(),
                hex: colors::BLACK.to_string(),
            },
            PaletteEntry {
                name: "White".to_string(),
                hex: colors::WHITE.to_string(),
            },
        ],
        tile_size: 2,
        default_boards: "1x1".to_string(),
        editor: EditorConfig {
            cell_size: 10.0,
            board_gap: 5.0,
            min_zoom: 0.5,
            max_zoom: 4.0,
        },
        session_ttl_secs: 3600,
    }
}

/// PNG bytes of a single-color image
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let bytes: Vec<u8> = (0..width * height).flat_map(|_| rgb).collect();
    encode_rgb_png(width, height, &bytes).expect("encode test png")
}

/// PNG data URI of a single-color image
pub fn solid_data_uri(width: u32, height: u32, rgb: [u8; 3]) -> String {
    to_data_uri(&solid_png(width, height, rgb))
}

/// PNG data URI whose left half is dark and right half is light
pub fn split_data_uri(width: u32, height: u32) -> String {
    let bytes: Vec<u8> = (0..height)
        .flat_map(|_| (0..width).map(move |x| if x < width / 2 { 20u8 } else { 240u8 }))
        .flat_map(|v| [v, v, v])
        .collect();
    to_data_uri(&encode_rgb_png(width, height, &bytes).expect("encode test png"))
}
