// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Request types for the text generation endpoint

use serde::{Deserialize, Serialize};

/// Request for text generation via POST /api/v1/generate-from-text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextGenerationRequest {
    /// Text prompt describing the desired image
    pub prompt: String,

    /// Style name; "anime" or an underscore-separated preset like "digital_art"
    pub style: String,
}

impl TextGenerationRequest {
    /// Validate the request fields
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt must not be empty".to_string());
        }
        if self.style.trim().is_empty() {
            return Err("style must not be empty".to_string());
        }
        Ok(())
    }
}
