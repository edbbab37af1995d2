// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image stylization API endpoint module
//!
//! Provides POST /api/v1/generate for image-guided Ghibli-style generation.

pub mod handler;
pub mod request;

pub use handler::generate_handler;
pub use request::GenerateImageForm;
