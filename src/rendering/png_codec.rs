//! PNG and data-URI conversion for rasters.
//!
//! Decoded images are normalized to 8-bit RGB. Transparent pixels are
//! composited over white.

use base64::Engine;
use mosaic_core::{QuantizedRaster, Rgb, SourceRaster};
use std::io::Cursor;

use crate::error::CodecError;

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Decode PNG bytes into a source raster.
pub fn decode_png(bytes: &[u8]) -> Result<SourceRaster, CodecError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| CodecError::PngDecode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| CodecError::PngDecode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let pixels: Vec<Rgb> = match info.color_type {
        png::ColorType::Rgb => {
            return Ok(SourceRaster::from_rgb_bytes(info.width, info.height, data)?)
        }
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|p| {
                Rgb::new(
                    over_white(p[0], p[3]),
                    over_white(p[1], p[3]),
                    over_white(p[2], p[3]),
                )
            })
            .collect(),
        png::ColorType::Grayscale => data.iter().map(|&v| Rgb::new(v, v, v)).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|p| {
                let v = over_white(p[0], p[1]);
                Rgb::new(v, v, v)
            })
            .collect(),
        png::ColorType::Indexed => {
            return Err(CodecError::PngDecode(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    Ok(SourceRaster::new(info.width, info.height, pixels)?)
}

#[inline]
fn over_white(channel: u8, alpha: u8) -> u8 {
    let c = channel as u32;
    let a = alpha as u32;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

/// Encode a quantized raster as an 8-bit RGB PNG.
pub fn encode_png(raster: &QuantizedRaster) -> Result<Vec<u8>, CodecError> {
    encode_rgb_png(raster.width(), raster.height(), &raster.to_rgb_bytes())
}

/// Encode packed RGB bytes as an 8-bit RGB PNG.
pub fn encode_rgb_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// `data:image/png;base64,...` for PNG bytes.
pub fn to_data_uri(png_bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(png_bytes);
    format!("{PNG_DATA_URI_PREFIX}{encoded}")
}

/// Bytes of a base64 data URI, or of bare base64.
pub fn decode_image_data(value: &str) -> Result<Vec<u8>, CodecError> {
    let value = value.trim();
    let payload = match value.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(',')
            .map(|(_, data)| data)
            .ok_or(CodecError::EmptyImageData)?,
        None => value,
    };
    if payload.is_empty() {
        return Err(CodecError::EmptyImageData);
    }
    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> (u32, u32, Vec<u8>) {
        let mut bytes = Vec::new();
        for i in 0..4u8 {
            let v = if i % 2 == 0 { 0 } else { 255 };
            bytes.extend_from_slice(&[v, v / 2, 10 * i]);
        }
        (2, 2, bytes)
    }

    #[test]
    fn test_png_round_trip() {
        let (w, h, bytes) = checker();
        let png_bytes = encode_rgb_png(w, h, &bytes).unwrap();
        assert_eq!(&png_bytes[0..8], b"\x89PNG\r\n\x1a\n");

        let raster = decode_png(&png_bytes).unwrap();
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.get(1, 0), Some(Rgb::new(255, 127, 10)));
    }

    #[test]
    fn test_rgba_composited_over_white() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = png::Encoder::new(&mut buf, 2, 1);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_image_data(&[0, 0, 0, 0, 0, 0, 0, 255])
                .unwrap();
        }
        let raster = decode_png(&buf.into_inner()).unwrap();
        assert_eq!(raster.get(0, 0), Some(Rgb::WHITE));
        assert_eq!(raster.get(1, 0), Some(Rgb::BLACK));
    }

    #[test]
    fn test_grayscale_expands_to_rgb() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = png::Encoder::new(&mut buf, 1, 1);
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[77]).unwrap();
        }
        let raster = decode_png(&buf.into_inner()).unwrap();
        assert_eq!(raster.get(0, 0), Some(Rgb::new(77, 77, 77)));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        assert!(matches!(
            decode_png(b"not a png"),
            Err(CodecError::PngDecode(_))
        ));
    }

    #[test]
    fn test_data_uri_round_trip() {
        let (w, h, bytes) = checker();
        let png_bytes = encode_rgb_png(w, h, &bytes).unwrap();
        let uri = to_data_uri(&png_bytes);
        assert!(uri.starts_with(PNG_DATA_URI_PREFIX));
        assert_eq!(decode_image_data(&uri).unwrap(), png_bytes);

        let bare = &uri[PNG_DATA_URI_PREFIX.len()..];
        assert_eq!(decode_image_data(bare).unwrap(), png_bytes);
    }

    #[test]
    fn test_decode_image_data_errors() {
        assert!(matches!(
            decode_image_data("  "),
            Err(CodecError::EmptyImageData)
        ));
        assert!(matches!(
            decode_image_data("data:image/png;base64,"),
            Err(CodecError::EmptyImageData)
        ));
        assert!(matches!(
            decode_image_data("!!!"),
            Err(CodecError::Base64(_))
        ));
    }
}
