// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP client for the Stability generation REST endpoints

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::imaging::ImageAsset;

use super::types::TextToImageRequest;

/// Upstream failures surfaced by the client
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation API returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("generation API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the Stability generation endpoints.
///
/// Successful responses carry raw PNG bytes (the requests ask for
/// `Accept: image/png`); error bodies are captured, truncated and returned
/// in [`GenerationError::Upstream`].
pub struct StabilityClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl StabilityClient {
    /// Create a new client with the house 120s request timeout
    pub fn new(api_base: &str, api_key: &str) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        let api_base = api_base.trim_end_matches('/').to_string();
        info!("Stability client configured: base={}", api_base);

        Ok(Self {
            client,
            api_base,
            api_key: api_key.to_string(),
        })
    }

    /// Get the configured API base URL
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Generate an image from a text prompt
    pub async fn text_to_image(
        &self,
        engine_id: &str,
        request: &TextToImageRequest,
    ) -> Result<Vec<u8>, GenerationError> {
        let url = format!(
            "{}/v1/generation/{}/text-to-image",
            self.api_base, engine_id
        );
        debug!("text-to-image POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Accept", "image/png")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Upstream {
                status,
                message: truncate(&body, 512),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Generate an image guided by an uploaded init image
    pub async fn image_to_image(
        &self,
        engine_id: &str,
        init_image: &ImageAsset,
        prompt: &str,
        style_preset: &str,
    ) -> Result<Vec<u8>, GenerationError> {
        let url = format!(
            "{}/v1/generation/{}/image-to-image",
            self.api_base, engine_id
        );
        debug!("image-to-image POST {}", url);

        let mut part = Part::bytes(init_image.bytes.clone());
        if let Some(ref file_name) = init_image.file_name {
            part = part.file_name(file_name.clone());
        }
        if let Some(ref content_type) = init_image.content_type {
            part = part.mime_str(content_type)?;
        }

        let form = Form::new()
            .part("init_image", part)
            .text("text_prompts[0][text]", prompt.to_string())
            .text("style_preset", style_preset.to_string());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Accept", "image/png")
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Upstream {
                status,
                message: truncate(&body, 512),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Cap upstream error bodies so they stay loggable
fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }
    let mut cut = limit;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &text[..cut])
}
