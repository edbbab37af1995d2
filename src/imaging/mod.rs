// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image pipeline: dimension normalization, resampling and re-encoding

pub mod asset;
pub mod dimensions;
pub mod transform;

pub use asset::ImageAsset;
pub use dimensions::{normalize_dimensions, Dimensions, MAX_DIMENSION, MIN_DIMENSION};
pub use transform::{
    decode_image, encode_image, output_format, resample, resize_if_needed, MAX_IMAGE_SIZE,
};

use thiserror::Error;

/// Custom error types for image processing
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Invalid image dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),

    #[error("Image data is too large: {0} bytes (max: {1} bytes)")]
    TooLarge(usize, usize),

    #[error("Image data is empty")]
    EmptyData,

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("Failed to encode image: {0}")]
    EncodeFailed(String),
}
