use image::{DynamicImage, RgbImage, RgbaImage};

use crate::color::Color;
use crate::error::IconError;
use crate::resize::resize;

/// Edge length of the apple-touch-icon.
pub const APPLE_TOUCH_SIZE: u32 = 180;

/// Composite `source` over a solid `background`, dropping the alpha channel.
///
/// Transparent pixels become exactly `background`. Opaque pixels keep
/// their color. Everything in between is blended per channel.
pub fn flatten(source: &RgbaImage, background: Color) -> RgbImage {
    let bg = background.to_rgb().0;
    RgbImage::from_fn(source.width(), source.height(), |x, y| {
        let [r, g, b, a] = source.get_pixel(x, y).0;
        image::Rgb([
            blend(r, bg[0], a),
            blend(g, bg[1], a),
            blend(b, bg[2], a),
        ])
    })
}

fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    let value = (u32::from(fg) * a + u32::from(bg) * (255 - a) + 127) / 255;
    value as u8
}

/// Resize to 180x180 and flatten onto `background`.
pub fn apple_touch_icon(source: &DynamicImage, background: Color) -> Result<RgbImage, IconError> {
    let resized = resize(source, APPLE_TOUCH_SIZE)?;
    Ok(flatten(&resized, background))
}
