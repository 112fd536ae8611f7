use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageDecodeError {
    #[error("Image data is empty")]
    Empty,
    #[error("Unsupported or corrupt image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Expected {expected} bytes of RGB data, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("Failed to compress image data: {0}")]
    Compression(#[from] std::io::Error),
}

/// A raster image ready to be embedded as a PDF image XObject.
///
/// Pixels are stored as 8-bit RGB, already Flate-compressed.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    compressed: Vec<u8>,
}

impl ImageData {
    /// Decodes PNG, JPEG or GIF bytes. Transparent pixels are composited onto white.
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageDecodeError> {
        if bytes.is_empty() {
            return Err(ImageDecodeError::Empty);
        }
        let decoded = image::load_from_memory(bytes)?;
        let (width, height) = (decoded.width(), decoded.height());
        if !decoded.color().has_alpha() {
            return Self::from_rgb(width, height, decoded.to_rgb8().as_raw());
        }
        let rgb: Vec<u8> = decoded
            .to_rgba8()
            .pixels()
            .flat_map(|px| {
                let [r, g, b, a] = px.0;
                [r, g, b].map(|c| over_white(c, a))
            })
            .collect();
        Self::from_rgb(width, height, &rgb)
    }

    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Self, ImageDecodeError> {
        let expected = width as usize * height as usize * 3;
        if expected == 0 {
            return Err(ImageDecodeError::Empty);
        }
        if rgb.len() != expected {
            return Err(ImageDecodeError::SizeMismatch {
                expected,
                actual: rgb.len(),
            });
        }
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(rgb)?;
        Ok(Self {
            width,
            height,
            compressed: encoder.finish()?,
        })
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub(crate) fn compressed(&self) -> &[u8] {
        &self.compressed
    }
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let alpha = alpha as u32;
    ((channel as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::{Cursor, Read};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 30, 30]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png() {
        let data = ImageData::decode(&png_bytes(4, 2)).unwrap();
        assert_eq!((data.width, data.height), (4, 2));
        assert_eq!(data.aspect_ratio(), 2.0);
        assert!(!data.compressed().is_empty());
    }

    #[test]
    fn transparency_is_composited_onto_white() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([200, 0, 0, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();

        let data = ImageData::decode(&out.into_inner()).unwrap();
        let mut rgb = Vec::new();
        ZlibDecoder::new(data.compressed()).read_to_end(&mut rgb).unwrap();
        assert_eq!(rgb, vec![255, 255, 255, 200, 0, 0]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(ImageData::decode(&[]), Err(ImageDecodeError::Empty)));
        assert!(matches!(
            ImageData::decode(b"definitely not an image"),
            Err(ImageDecodeError::Decode(_))
        ));
    }

    #[test]
    fn raw_rgb_length_is_checked() {
        assert!(ImageData::from_rgb(2, 2, &[0; 12]).is_ok());
        assert!(matches!(
            ImageData::from_rgb(2, 2, &[0; 11]),
            Err(ImageDecodeError::SizeMismatch { expected: 12, actual: 11 })
        ));
    }
}
