// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::collections::HashMap;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::imaging::ImageError;
use crate::relay::RelayError;
use crate::stability::GenerationError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    pub request_id: Option<String>,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    InvalidRequest(String),
    ValidationError { field: String, message: String },
    InvalidImage(String),
    UnreadableImage(String),
    GenerationFailed { status: Option<u16>, message: String },
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self, request_id: Option<String>) -> ErrorResponse {
        let (error_type, message, details) = match self {
            ApiError::InvalidRequest(msg) => ("invalid_request", msg.clone(), None),
            ApiError::ValidationError { field, message } => {
                let mut details = HashMap::new();
                details.insert(
                    "field".to_string(),
                    serde_json::Value::String(field.clone()),
                );
                ("validation_error", message.clone(), Some(details))
            }
            ApiError::InvalidImage(msg) => ("invalid_image", msg.clone(), None),
            ApiError::UnreadableImage(msg) => ("unreadable_image", msg.clone(), None),
            ApiError::GenerationFailed { status, message } => {
                let details = status.map(|code| {
                    let mut details = HashMap::new();
                    details.insert(
                        "upstream_status".to_string(),
                        serde_json::Value::Number(code.into()),
                    );
                    details
                });
                ("generation_failed", message.clone(), details)
            }
            ApiError::InternalError(msg) => ("internal_error", msg.clone(), None),
        };

        ErrorResponse {
            error_type: error_type.to_string(),
            message,
            request_id,
            details,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_)
            | ApiError::ValidationError { .. }
            | ApiError::InvalidImage(_)
            | ApiError::UnreadableImage(_) => 400,
            ApiError::GenerationFailed { .. } => 502,
            ApiError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::ValidationError { field, message } => {
                write!(f, "Validation error for {}: {}", field, message)
            }
            ApiError::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            ApiError::UnreadableImage(msg) => write!(f, "Unreadable image: {}", msg),
            ApiError::GenerationFailed { status, message } => match status {
                Some(code) => write!(f, "Generation failed ({}): {}", code, message),
                None => write!(f, "Generation failed: {}", message),
            },
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Image(image_err) => match image_err {
                ImageError::InvalidDimensions(..) | ImageError::TooLarge(..) => {
                    ApiError::InvalidImage(image_err.to_string())
                }
                ImageError::EmptyData | ImageError::DecodeFailed(_) => {
                    ApiError::UnreadableImage(image_err.to_string())
                }
                ImageError::EncodeFailed(_) => ApiError::InternalError(image_err.to_string()),
            },
            RelayError::Generation(GenerationError::Upstream { status, message }) => {
                ApiError::GenerationFailed {
                    status: Some(status),
                    message,
                }
            }
            RelayError::Generation(err @ GenerationError::Transport(_)) => {
                ApiError::GenerationFailed {
                    status: None,
                    message: err.to_string(),
                }
            }
        }
    }
}

// Error response wrapper
pub struct ApiErrorResponse {
    error: ApiError,
    request_id: Option<String>,
}

impl ApiErrorResponse {
    pub fn new(error: ApiError, request_id: String) -> Self {
        Self {
            error,
            request_id: Some(request_id),
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        Self {
            error,
            request_id: None,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let error_response = self.error.to_response(self.request_id);

        (status, Json(error_response)).into_response()
    }
}
