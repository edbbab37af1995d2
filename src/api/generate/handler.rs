// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image stylization endpoint handler

use axum::extract::State;
use axum_extra::extract::Multipart;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::request::GenerateImageForm;
use crate::api::errors::ApiErrorResponse;
use crate::api::http_server::AppState;
use crate::api::response::PngImage;

/// POST /api/v1/generate - Stylize an uploaded image
///
/// Pipeline:
/// 1. Bind and validate the multipart form
/// 2. Resize the image into the upstream dimension bounds if needed
/// 3. Relay to the upstream image-to-image endpoint
/// 4. Return the generated PNG bytes
pub async fn generate_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<PngImage, ApiErrorResponse> {
    let request_id = Uuid::new_v4().to_string();

    let form = GenerateImageForm::from_multipart(multipart)
        .await
        .map_err(|e| {
            warn!("[{}] generate request rejected: {}", request_id, e);
            ApiErrorResponse::new(e, request_id.clone())
        })?;

    debug!(
        "[{}] generate: image={} bytes, prompt_len={}",
        request_id,
        form.image.len(),
        form.prompt.len()
    );

    let bytes = state
        .relay
        .generate_from_image(form.image, &form.prompt)
        .await
        .map_err(|e| {
            warn!("[{}] generation failed: {}", request_id, e);
            ApiErrorResponse::new(e.into(), request_id.clone())
        })?;

    info!("[{}] generate complete: {} bytes", request_id, bytes.len());
    Ok(PngImage(bytes))
}
