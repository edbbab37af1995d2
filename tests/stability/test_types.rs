// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Wire format tests for the generation request payload

use ghibli_relay::stability::{TextPrompt, TextToImageRequest};
use serde_json::json;

#[test]
fn test_request_uses_fixed_generation_parameters() {
    let request = TextToImageRequest::new("a quiet village", "anime");

    assert_eq!(request.text_prompts.len(), 1);
    assert_eq!(request.text_prompts[0].text, "a quiet village");
    assert_eq!(request.cfg_scale, 7.0);
    assert_eq!(request.height, 512);
    assert_eq!(request.width, 768);
    assert_eq!(request.samples, 1);
    assert_eq!(request.steps, 30);
    assert_eq!(request.style_preset, "anime");
}

#[test]
fn test_request_serializes_to_v1_shape() {
    let request = TextToImageRequest::new("a cat", "anime");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["text_prompts"][0]["text"], "a cat");
    assert_eq!(value["cfg_scale"], 7.0);
    assert_eq!(value["height"], 512);
    assert_eq!(value["width"], 768);
    assert_eq!(value["samples"], 1);
    assert_eq!(value["steps"], 30);
    assert_eq!(value["style_preset"], "anime");
}

#[test]
fn test_text_prompt_serialization() {
    let prompt = TextPrompt {
        text: "hello".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&prompt).unwrap(),
        json!({"text": "hello"})
    );
}

#[test]
fn test_request_roundtrip() {
    let request = TextToImageRequest::new("a forest spirit", "digital-art");
    let encoded = serde_json::to_string(&request).unwrap();
    let decoded: TextToImageRequest = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded.text_prompts[0].text, "a forest spirit");
    assert_eq!(decoded.style_preset, "digital-art");
}
