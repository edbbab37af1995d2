// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt composition and relay orchestration for Ghibli-style generation

use thiserror::Error;
use tracing::{debug, info};

use crate::config::RelayConfig;
use crate::imaging::{self, ImageAsset, ImageError};
use crate::stability::{GenerationError, StabilityClient, TextToImageRequest};

/// Upstream engine used for every generation
pub const ENGINE_ID: &str = "stable-diffusion-v1-6";

/// Suffix appended to every user prompt
pub const STYLE_SUFFIX: &str = " in the beautiful, detailed anime style of Studio Ghibli";

/// Style preset for image-to-image generations
const IMAGE_STYLE_PRESET: &str = "anime";

/// Errors from relay operations
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Relays generation requests to the upstream API with a fixed Ghibli style.
///
/// Stateless between calls; every request is a single pass-through with no
/// retry or caching.
pub struct GhibliRelay {
    client: StabilityClient,
}

impl GhibliRelay {
    /// Build a relay from startup configuration
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let client = StabilityClient::new(&config.api_base, &config.api_key)?;
        Ok(Self { client })
    }

    /// Stylize an uploaded image guided by a text prompt.
    ///
    /// The image is resized into the upstream dimension bounds first when
    /// needed; in-bounds uploads are forwarded byte-for-byte.
    pub async fn generate_from_image(
        &self,
        image: ImageAsset,
        prompt: &str,
    ) -> Result<Vec<u8>, RelayError> {
        let image = imaging::resize_if_needed(image)?;
        let prompt = compose_prompt(prompt);

        debug!(
            "relaying image-to-image: {} bytes, prompt_len={}",
            image.len(),
            prompt.len()
        );

        let bytes = self
            .client
            .image_to_image(ENGINE_ID, &image, &prompt, IMAGE_STYLE_PRESET)
            .await?;

        info!("image-to-image generation complete: {} bytes", bytes.len());
        Ok(bytes)
    }

    /// Generate an image from a text prompt and style name
    pub async fn generate_from_text(
        &self,
        prompt: &str,
        style: &str,
    ) -> Result<Vec<u8>, RelayError> {
        let prompt = compose_prompt(prompt);
        let preset = resolve_style_preset(style);
        let request = TextToImageRequest::new(&prompt, &preset);

        debug!(
            "relaying text-to-image: prompt_len={}, style_preset={}",
            prompt.len(),
            preset
        );

        let bytes = self.client.text_to_image(ENGINE_ID, &request).await?;

        info!("text-to-image generation complete: {} bytes", bytes.len());
        Ok(bytes)
    }
}

/// Append the fixed style suffix to a user prompt
pub fn compose_prompt(prompt: &str) -> String {
    format!("{}{}", prompt, STYLE_SUFFIX)
}

/// Map a user-facing style name to an upstream style preset.
///
/// "anime" passes through; anything else swaps underscores for hyphens
/// (e.g. "digital_art" -> "digital-art").
pub fn resolve_style_preset(style: &str) -> String {
    if style == "anime" {
        style.to_string()
    } else {
        style.replace('_', "-")
    }
}
