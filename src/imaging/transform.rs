// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Decode, resample and re-encode uploaded images

use std::io::Cursor;

use image::{imageops, load_from_memory, DynamicImage, ImageFormat, RgbImage};
use tracing::debug;

use super::asset::ImageAsset;
use super::dimensions::{normalize_dimensions, Dimensions};
use super::ImageError;

/// Maximum accepted image payload (10MB)
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Decode raw image bytes into pixels
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    if bytes.len() > MAX_IMAGE_SIZE {
        return Err(ImageError::TooLarge(bytes.len(), MAX_IMAGE_SIZE));
    }

    if bytes.is_empty() {
        return Err(ImageError::EmptyData);
    }

    load_from_memory(bytes).map_err(|e| ImageError::DecodeFailed(e.to_string()))
}

/// Resample an image to the target dimensions with bilinear filtering.
///
/// The source is rasterized to RGB first, so any alpha channel is dropped.
pub fn resample(image: &DynamicImage, target: Dimensions) -> RgbImage {
    let rgb = image.to_rgb8();
    imageops::resize(&rgb, target.width, target.height, imageops::FilterType::Triangle)
}

/// Pick the output container format from a declared content type.
///
/// Unknown and absent content types fall back to PNG.
pub fn output_format(content_type: Option<&str>) -> ImageFormat {
    match content_type {
        Some(ct) if ct.contains("jpeg") || ct.contains("jpg") => ImageFormat::Jpeg,
        Some(ct) if ct.contains("png") => ImageFormat::Png,
        Some(ct) if ct.contains("gif") => ImageFormat::Gif,
        Some(ct) if ct.contains("bmp") => ImageFormat::Bmp,
        _ => ImageFormat::Png,
    }
}

/// Encode a pixel buffer into the given container format
pub fn encode_image(pixels: &RgbImage, format: ImageFormat) -> Result<Vec<u8>, ImageError> {
    let mut out = Cursor::new(Vec::new());
    pixels
        .write_to(&mut out, format)
        .map_err(|e| ImageError::EncodeFailed(e.to_string()))?;
    Ok(out.into_inner())
}

/// Bring an asset into the API dimension bounds if required.
///
/// Assets already inside the bounds are returned untouched, bytes and all.
/// Resized assets are re-encoded into the container declared by their
/// content type; an absent content type becomes "image/png".
pub fn resize_if_needed(asset: ImageAsset) -> Result<ImageAsset, ImageError> {
    let decoded = decode_image(&asset.bytes)?;
    let (width, height) = (decoded.width(), decoded.height());

    let target = match normalize_dimensions(width, height)? {
        Some(target) => target,
        None => {
            debug!(
                "image {}x{} already within bounds, passing through",
                width, height
            );
            return Ok(asset);
        }
    };

    debug!(
        "resizing image {}x{} -> {}x{}",
        width, height, target.width, target.height
    );

    let format = output_format(asset.content_type.as_deref());
    let resized = resample(&decoded, target);
    let bytes = encode_image(&resized, format)?;

    let content_type = asset
        .content_type
        .unwrap_or_else(|| "image/png".to_string());

    Ok(ImageAsset {
        bytes,
        content_type: Some(content_type),
        file_name: asset.file_name,
    })
}
