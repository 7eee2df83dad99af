use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, PixelWithColorType};

use crate::error::IconError;

/// Encode an 8-bit RGB or RGBA buffer as PNG bytes.
pub fn encode_png<P>(image: &ImageBuffer<P, Vec<u8>>) -> Result<Vec<u8>, IconError>
where
    P: PixelWithColorType<Subpixel = u8>,
{
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| IconError::Encoding {
            size: image.width(),
            reason: format!("failed to encode PNG: {}", e),
        })?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn rgba_round_trips_through_png() {
        let original = RgbaImage::from_pixel(5, 5, Rgba([9, 8, 7, 6]));
        let bytes = encode_png(&original).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert!(decoded.color().has_alpha());
        assert_eq!(decoded.to_rgba8(), original);
    }

    #[test]
    fn rgb_has_no_alpha() {
        let original = RgbImage::from_pixel(3, 3, Rgb([1, 2, 3]));
        let bytes = encode_png(&original).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert!(!decoded.color().has_alpha());
        assert_eq!(decoded.to_rgb8(), original);
    }
}
