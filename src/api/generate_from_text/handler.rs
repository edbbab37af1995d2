// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text generation endpoint handler

use axum::extract::State;
use axum::Json;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::request::TextGenerationRequest;
use crate::api::errors::{ApiError, ApiErrorResponse};
use crate::api::http_server::AppState;
use crate::api::response::PngImage;

/// POST /api/v1/generate-from-text - Generate an image from a prompt
///
/// Pipeline:
/// 1. Validate request
/// 2. Relay to the upstream text-to-image endpoint
/// 3. Return the generated PNG bytes
pub async fn generate_from_text_handler(
    State(state): State<AppState>,
    Json(request): Json<TextGenerationRequest>,
) -> Result<PngImage, ApiErrorResponse> {
    let request_id = Uuid::new_v4().to_string();

    debug!(
        "[{}] generate-from-text: prompt_len={}, style={}",
        request_id,
        request.prompt.len(),
        request.style
    );

    if let Err(e) = request.validate() {
        warn!("[{}] generate-from-text rejected: {}", request_id, e);
        return Err(ApiErrorResponse::new(
            ApiError::InvalidRequest(e),
            request_id,
        ));
    }

    let bytes = state
        .relay
        .generate_from_text(&request.prompt, &request.style)
        .await
        .map_err(|e| {
            warn!("[{}] generation failed: {}", request_id, e);
            ApiErrorResponse::new(e.into(), request_id.clone())
        })?;

    info!(
        "[{}] generate-from-text complete: {} bytes",
        request_id,
        bytes.len()
    );
    Ok(PngImage(bytes))
}
