// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Aspect-ratio-preserving dimension normalization for the generation API

use super::ImageError;

/// Smallest side length the generation API accepts
pub const MIN_DIMENSION: u32 = 320;

/// Largest side length the generation API accepts
pub const MAX_DIMENSION: u32 = 1536;

/// A (width, height) pair in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when both sides already satisfy the API bounds
    pub fn in_bounds(&self) -> bool {
        (MIN_DIMENSION..=MAX_DIMENSION).contains(&self.width)
            && (MIN_DIMENSION..=MAX_DIMENSION).contains(&self.height)
    }
}

/// Compute the resize target for an image, preserving aspect ratio.
///
/// Returns `Ok(None)` when the image already fits the API bounds and must be
/// passed through untouched. Zero dimensions are rejected.
///
/// The proportional scaling can still leave one side out of bounds for
/// extreme aspect ratios; the final clamp forces both sides into range at
/// the cost of the ratio.
pub fn normalize_dimensions(width: u32, height: u32) -> Result<Option<Dimensions>, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidDimensions(width, height));
    }

    if Dimensions::new(width, height).in_bounds() {
        return Ok(None);
    }

    let aspect_ratio = width as f64 / height as f64;

    let (mut new_width, mut new_height) = if width > MAX_DIMENSION || height > MAX_DIMENSION {
        if width > height {
            (MAX_DIMENSION, (MAX_DIMENSION as f64 / aspect_ratio) as u32)
        } else {
            ((MAX_DIMENSION as f64 * aspect_ratio) as u32, MAX_DIMENSION)
        }
    } else if width < MIN_DIMENSION && height < MIN_DIMENSION {
        if width < height {
            (MIN_DIMENSION, (MIN_DIMENSION as f64 / aspect_ratio) as u32)
        } else {
            ((MIN_DIMENSION as f64 * aspect_ratio) as u32, MIN_DIMENSION)
        }
    } else if width > MAX_DIMENSION {
        // Already covered by the first branch; kept so each bound has its own arm.
        (MAX_DIMENSION, (MAX_DIMENSION as f64 / aspect_ratio) as u32)
    } else if width < MIN_DIMENSION {
        (MIN_DIMENSION, (MIN_DIMENSION as f64 / aspect_ratio) as u32)
    } else if height > MAX_DIMENSION {
        ((MAX_DIMENSION as f64 * aspect_ratio) as u32, MAX_DIMENSION)
    } else {
        ((MIN_DIMENSION as f64 * aspect_ratio) as u32, MIN_DIMENSION)
    };

    new_width = new_width.clamp(MIN_DIMENSION, MAX_DIMENSION);
    new_height = new_height.clamp(MIN_DIMENSION, MAX_DIMENSION);

    Ok(Some(Dimensions::new(new_width, new_height)))
}
