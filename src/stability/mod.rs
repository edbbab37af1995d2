// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Stability generation API integration

pub mod client;
pub mod types;

pub use client::{GenerationError, StabilityClient};
pub use types::{TextPrompt, TextToImageRequest};
