pub mod png_codec;

pub use png_codec::{
    decode_image_data, decode_png, encode_png, encode_rgb_png, to_data_uri, PNG_DATA_URI_PREFIX,
};
