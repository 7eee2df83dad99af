//! Target pixel sizes.

use crate::error::IconError;

/// Largest edge accepted by [`crate::resize`].
pub const MAX_DIMENSION: u32 = 4096;

/// Largest edge an ICO directory entry can describe.
pub const MAX_ICO_DIMENSION: u32 = 256;

/// Sizes embedded by a plain ICO conversion when none are selected.
pub const DEFAULT_ICO_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256];

/// Sizes embedded in `favicon.ico`.
pub const FAVICON_ICO_SIZES: &[u32] = &[16, 32, 48];

/// Check that `size` is a usable square edge length.
pub fn validate_size(size: u32) -> Result<(), IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize {
            size,
            reason: "size must be positive".to_string(),
        });
    }
    if size > MAX_DIMENSION {
        return Err(IconError::InvalidSize {
            size,
            reason: format!("size exceeds the maximum of {}", MAX_DIMENSION),
        });
    }
    Ok(())
}

/// An ordered set of distinct square sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSet {
    sizes: Vec<u32>,
}

impl SizeSet {
    /// Build a set, keeping the given order.
    ///
    /// Fails when `sizes` is empty, and on the first zero, oversized or
    /// repeated entry.
    pub fn new(sizes: &[u32]) -> Result<Self, IconError> {
        if sizes.is_empty() {
            return Err(IconError::InvalidSize {
                size: 0,
                reason: "at least one size is required".to_string(),
            });
        }
        let mut out: Vec<u32> = Vec::with_capacity(sizes.len());
        for &size in sizes {
            validate_size(size)?;
            if out.contains(&size) {
                return Err(IconError::DuplicateSize { size });
            }
            out.push(size);
        }
        Ok(SizeSet { sizes: out })
    }

    pub fn default_ico() -> Self {
        SizeSet {
            sizes: DEFAULT_ICO_SIZES.to_vec(),
        }
    }

    pub fn favicon_ico() -> Self {
        SizeSet {
            sizes: FAVICON_ICO_SIZES.to_vec(),
        }
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.sizes
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.sizes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
