// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multipart form binding for the image stylization endpoint

use axum_extra::extract::Multipart;

use crate::api::errors::ApiError;
use crate::imaging::ImageAsset;

/// Parsed form fields for POST /api/v1/generate
#[derive(Debug)]
pub struct GenerateImageForm {
    pub image: ImageAsset,
    pub prompt: String,
}

impl GenerateImageForm {
    /// Read the `image` and `prompt` parts from a multipart request.
    ///
    /// Unknown parts are ignored; both named parts are required.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut image: Option<ImageAsset> = None;
        let mut prompt: Option<String> = None;

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            ApiError::InvalidRequest(format!("malformed multipart body: {}", e))
        })? {
            let name = field.name().map(|n| n.to_string());
            match name.as_deref() {
                Some("image") => {
                    let content_type = field.content_type().map(|ct| ct.to_string());
                    let file_name = field.file_name().map(|f| f.to_string());
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| {
                            ApiError::InvalidRequest(format!("failed to read image part: {}", e))
                        })?
                        .to_vec();
                    image = Some(ImageAsset::new(bytes, content_type, file_name));
                }
                Some("prompt") => {
                    let text = field.text().await.map_err(|e| {
                        ApiError::InvalidRequest(format!("failed to read prompt part: {}", e))
                    })?;
                    prompt = Some(text);
                }
                _ => {}
            }
        }

        let image = image.ok_or_else(|| ApiError::ValidationError {
            field: "image".to_string(),
            message: "image part is required".to_string(),
        })?;
        let prompt = prompt.ok_or_else(|| ApiError::ValidationError {
            field: "prompt".to_string(),
            message: "prompt part is required".to_string(),
        })?;

        let form = Self { image, prompt };
        form.validate()?;
        Ok(form)
    }

    /// Validate the parsed form
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.prompt.trim().is_empty() {
            return Err(ApiError::ValidationError {
                field: "prompt".to_string(),
                message: "prompt must not be empty".to_string(),
            });
        }
        if self.image.is_empty() {
            return Err(ApiError::ValidationError {
                field: "image".to_string(),
                message: "image must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
