// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod generate;
pub mod generate_from_text;
pub mod http_server;
pub mod response;

pub use errors::{ApiError, ApiErrorResponse, ErrorResponse};
pub use generate::{generate_handler, GenerateImageForm};
pub use generate_from_text::{generate_from_text_handler, TextGenerationRequest};
pub use http_server::{build_router, start_server, AppState};
pub use response::{HealthResponse, PngImage};
