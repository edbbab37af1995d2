// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Wire types for the Stability generation API

use serde::{Deserialize, Serialize};

/// Guidance scale applied to every generation
pub const CFG_SCALE: f64 = 7.0;

/// Output height in pixels for text-to-image generations
pub const OUTPUT_HEIGHT: u32 = 512;

/// Output width in pixels for text-to-image generations
pub const OUTPUT_WIDTH: u32 = 768;

/// Images produced per request
pub const SAMPLES: u32 = 1;

/// Diffusion steps per generation
pub const STEPS: u32 = 30;

/// One prompt entry in a generation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextPrompt {
    pub text: String,
}

/// JSON body for the text-to-image endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextToImageRequest {
    pub text_prompts: Vec<TextPrompt>,
    pub cfg_scale: f64,
    pub height: u32,
    pub width: u32,
    pub samples: u32,
    pub steps: u32,
    pub style_preset: String,
}

impl TextToImageRequest {
    /// Build the fixed-parameter request used by the relay
    pub fn new(prompt: &str, style_preset: &str) -> Self {
        Self {
            text_prompts: vec![TextPrompt {
                text: prompt.to_string(),
            }],
            cfg_scale: CFG_SCALE,
            height: OUTPUT_HEIGHT,
            width: OUTPUT_WIDTH,
            samples: SAMPLES,
            steps: STEPS,
            style_preset: style_preset.to_string(),
        }
    }
}
