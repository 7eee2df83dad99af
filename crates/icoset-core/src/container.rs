//! ICO container packing and unpacking.
//!
//! Layout written by [`pack_ico`]:
//! - 6 byte header: reserved (0), type (1 = icon), image count
//! - 16 byte directory entry per image: width, height, palette, reserved,
//!   planes, bits per pixel, data size, data offset
//! - image data, in directory order

use std::io::Cursor;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{DynamicImage, RgbaImage};
use tracing::{debug, info};

use crate::error::IconError;
use crate::resize::resize;
use crate::sizes::{MAX_ICO_DIMENSION, SizeSet};

/// Pack square RGBA variants into a single ICO file, in the given order.
///
/// Every variant must be square, at most 256 pixels wide, and have a width
/// no other variant shares. Nothing is returned on failure.
pub fn pack_ico(variants: &[RgbaImage]) -> Result<Vec<u8>, IconError> {
    let mut seen: Vec<u32> = Vec::with_capacity(variants.len());
    for variant in variants {
        let size = variant.width();
        if seen.contains(&size) {
            return Err(IconError::DuplicateSize { size });
        }
        seen.push(size);
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for variant in variants {
        let (width, height) = variant.dimensions();
        if width != height {
            return Err(IconError::Encoding {
                size: width,
                reason: format!("variant is {}x{}, ICO entries must be square", width, height),
            });
        }
        if width == 0 || width > MAX_ICO_DIMENSION {
            return Err(IconError::Encoding {
                size: width,
                reason: format!("ICO entries must be 1 to {} pixels wide", MAX_ICO_DIMENSION),
            });
        }

        let icon_image = IconImage::from_rgba_data(width, height, variant.as_raw().clone());
        let entry = IconDirEntry::encode(&icon_image).map_err(|e| IconError::Encoding {
            size: width,
            reason: e.to_string(),
        })?;
        debug!(size = width, bytes = entry.data().len(), "packed ico entry");
        icon_dir.add_entry(entry);
    }

    let mut bytes = Vec::new();
    icon_dir.write(&mut bytes).map_err(|e| IconError::Encoding {
        size: seen.first().copied().unwrap_or(0),
        reason: format!("failed to write ICO container: {}", e),
    })?;

    info!(entries = variants.len(), bytes = bytes.len(), "packed ico");
    Ok(bytes)
}

/// Resize `source` to every size in `sizes` and pack the results.
pub fn ico_from_source(source: &DynamicImage, sizes: &SizeSet) -> Result<Vec<u8>, IconError> {
    let variants = sizes
        .iter()
        .map(|size| resize(source, size))
        .collect::<Result<Vec<_>, _>>()?;
    pack_ico(&variants)
}

/// Decode every image in an ICO container, in directory order.
pub fn unpack_ico(bytes: &[u8]) -> Result<Vec<RgbaImage>, IconError> {
    let icon_dir = IconDir::read(Cursor::new(bytes)).map_err(|e| IconError::Decode {
        reason: format!("not a valid ICO container: {}", e),
    })?;

    icon_dir
        .entries()
        .iter()
        .map(|entry| {
            let image = entry.decode().map_err(|e| IconError::Decode {
                reason: format!("failed to decode {}x{} entry: {}", entry.width(), entry.height(), e),
            })?;
            RgbaImage::from_raw(image.width(), image.height(), image.rgba_data().to_vec()).ok_or_else(
                || IconError::Decode {
                    reason: format!("{}x{} entry has truncated pixel data", image.width(), image.height()),
                },
            )
        })
        .collect()
}

/// Declared (width, height) of every directory entry, without decoding pixels.
pub fn ico_entry_sizes(bytes: &[u8]) -> Result<Vec<(u32, u32)>, IconError> {
    let icon_dir = IconDir::read(Cursor::new(bytes)).map_err(|e| IconError::Decode {
        reason: format!("not a valid ICO container: {}", e),
    })?;
    Ok(icon_dir
        .entries()
        .iter()
        .map(|entry| (entry.width(), entry.height()))
        .collect())
}
