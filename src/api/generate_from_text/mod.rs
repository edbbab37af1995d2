// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text generation API endpoint module
//!
//! Provides POST /api/v1/generate-from-text for prompt-only generation.

pub mod handler;
pub mod request;

pub use handler::generate_from_text_handler;
pub use request::TextGenerationRequest;
