// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Request DTO deserialization and validation tests

use ghibli_relay::api::{GenerateImageForm, TextGenerationRequest};
use ghibli_relay::imaging::ImageAsset;

#[test]
fn test_text_request_deserialization() {
    let body = r#"{"prompt": "a cat by a window", "style": "anime"}"#;
    let request: TextGenerationRequest = serde_json::from_str(body).unwrap();

    assert_eq!(request.prompt, "a cat by a window");
    assert_eq!(request.style, "anime");
}

#[test]
fn test_text_request_missing_field_is_rejected() {
    let body = r#"{"prompt": "a cat"}"#;
    let result: Result<TextGenerationRequest, _> = serde_json::from_str(body);
    assert!(result.is_err());
}

#[test]
fn test_text_request_validation() {
    let request = TextGenerationRequest {
        prompt: "a cat".to_string(),
        style: "anime".to_string(),
    };
    assert!(request.validate().is_ok());
}

#[test]
fn test_text_request_rejects_blank_prompt() {
    let request = TextGenerationRequest {
        prompt: "   ".to_string(),
        style: "anime".to_string(),
    };
    let err = request.validate().unwrap_err();
    assert!(err.contains("prompt"));
}

#[test]
fn test_text_request_rejects_blank_style() {
    let request = TextGenerationRequest {
        prompt: "a cat".to_string(),
        style: "".to_string(),
    };
    let err = request.validate().unwrap_err();
    assert!(err.contains("style"));
}

#[test]
fn test_image_form_validation() {
    let form = GenerateImageForm {
        image: ImageAsset {
            bytes: vec![1, 2, 3],
            content_type: Some("image/png".to_string()),
            file_name: None,
        },
        prompt: "a cat".to_string(),
    };
    assert!(form.validate().is_ok());
}

#[test]
fn test_image_form_rejects_blank_prompt() {
    let form = GenerateImageForm {
        image: ImageAsset {
            bytes: vec![1, 2, 3],
            content_type: None,
            file_name: None,
        },
        prompt: "  ".to_string(),
    };
    assert!(form.validate().is_err());
}

#[test]
fn test_image_form_rejects_empty_image() {
    let form = GenerateImageForm {
        image: ImageAsset {
            bytes: Vec::new(),
            content_type: None,
            file_name: None,
        },
        prompt: "a cat".to_string(),
    };
    assert!(form.validate().is_err());
}
