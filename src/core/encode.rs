/// Canvas encoding — PNG bytes and base64 data URIs.
///
/// `EncodedImage` is the only artifact that crosses component boundaries:
/// an immutable `data:image/png;base64,…` string behind an `Arc`, so cache
/// hits hand back the same allocation instead of copying kilobytes of
/// base64.

use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("PNG encoding error: {0}")]
    Png(#[from] image::ImageError),
}

/// An encoded, embeddable image payload. Cheap to clone; byte equality via
/// `PartialEq`, allocation identity via [`EncodedImage::ptr_eq`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage(Arc<str>);

impl EncodedImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when both values share the same allocation — the strongest form
    /// of the cache-hit guarantee.
    pub fn ptr_eq(&self, other: &EncodedImage) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EncodedImage {
    fn from(s: String) -> EncodedImage {
        EncodedImage(s.into())
    }
}

impl Serialize for EncodedImage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EncodedImage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<EncodedImage, D::Error> {
        Ok(EncodedImage(String::deserialize(deserializer)?.into()))
    }
}

/// Encode a canvas as PNG bytes.
pub fn to_png_bytes(canvas: &crate::core::canvas::Canvas) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new(&mut bytes);
    encoder.write_image(
        canvas.pixels(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Encode a canvas as a self-contained `data:image/png;base64,…` URI.
pub fn to_data_uri(canvas: &crate::core::canvas::Canvas) -> Result<EncodedImage, EncodeError> {
    let png = to_png_bytes(canvas)?;
    let mut uri = String::from("data:image/png;base64,");
    STANDARD.encode_string(&png, &mut uri);
    Ok(EncodedImage(uri.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::canvas::{Canvas, Color};

    #[test]
    fn data_uri_has_png_prefix() {
        let c = Canvas::new(4, 4);
        let img = to_data_uri(&c).unwrap();
        assert!(img.as_str().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn png_round_trips_dimensions_and_pixels() {
        let mut c = Canvas::new(8, 6);
        c.fill_rect(0.0, 0.0, 8.0, 6.0, Color::rgb(10, 20, 30));
        c.fill_rect(2.0, 2.0, 1.0, 1.0, Color::rgb(200, 100, 50));

        let bytes = to_png_bytes(&c).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 6);
        assert_eq!(decoded.get_pixel(2, 2).0, [200, 100, 50, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn data_uri_payload_decodes_back_to_png() {
        let mut c = Canvas::new(3, 3);
        c.fill_rect(0.0, 0.0, 3.0, 3.0, Color::rgb(1, 2, 3));
        let img = to_data_uri(&c).unwrap();

        let payload = img.as_str().strip_prefix("data:image/png;base64,").unwrap();
        let bytes = STANDARD.decode(payload).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 3);
    }

    #[test]
    fn clone_shares_the_allocation() {
        let c = Canvas::new(2, 2);
        let img = to_data_uri(&c).unwrap();
        let copy = img.clone();
        assert!(img.ptr_eq(&copy));
        assert_eq!(img, copy);
    }

    #[test]
    fn serde_as_plain_string() {
        let img = EncodedImage::from("data:image/png;base64,AAAA".to_string());
        let json = serde_json::to_string(&img).unwrap();
        assert_eq!(json, "\"data:image/png;base64,AAAA\"");
        let back: EncodedImage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, img);
    }
}
