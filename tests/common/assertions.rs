//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;
use brickboard::rendering::{decode_image_data, decode_png, PNG_DATA_URI_PREFIX};

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error body carries the status code and a message
pub fn assert_error_body(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}",
        expected.as_u16(),
        json["status"]
    );
    assert!(json["error"].is_string(), "Expected an error message");
}

/// Assert a mosaic is internally consistent
///
/// Checks the image is a PNG data URI and the color counts add up to both
/// the image's pixel count and the total tile count.
pub fn assert_valid_mosaic(mosaic: &serde_json::Value) {
    let image = mosaic["pixelatedImageData"].as_str().expect("image data");
    assert!(image.starts_with(PNG_DATA_URI_PREFIX));
    let png = decode_image_data(image).expect("image should be base64");
    let raster = decode_png(&png).expect("image should be a PNG");

    let total: u64 = mosaic["colorMap"]
        .as_array()
        .expect("colorMap")
        .iter()
        .map(|c| c["count"].as_u64().unwrap())
        .sum();
    assert_eq!(total, raster.width() as u64 * raster.height() as u64);
    assert_eq!(total, mosaic["totalTiles"].as_u64().expect("totalTiles"));
}

/// Pixel of a board in a mosaic JSON value
pub fn pixel(mosaic: &serde_json::Value, board: usize, x: usize, y: usize) -> String {
    mosaic["boards"][board]["pixels"][y][x]
        .as_str()
        .expect("pixel")
        .to_string()
}
