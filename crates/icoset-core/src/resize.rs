use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::error::IconError;
use crate::sizes::validate_size;

/// Resample `source` to a `size` x `size` RGBA image with Lanczos3.
///
/// Non-square sources are stretched on each axis independently; nothing is
/// cropped.
pub fn resize(source: &DynamicImage, size: u32) -> Result<RgbaImage, IconError> {
    validate_size(size)?;

    debug!(
        from_width = source.width(),
        from_height = source.height(),
        size,
        "resizing"
    );

    let resized = source.resize_exact(size, size, FilterType::Lanczos3);
    Ok(resized.to_rgba8())
}
