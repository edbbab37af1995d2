// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt composition and style preset handling

use ghibli_relay::relay::{compose_prompt, resolve_style_preset, ENGINE_ID, STYLE_SUFFIX};

#[test]
fn test_suffix_is_appended_verbatim() {
    assert_eq!(
        compose_prompt("a cat"),
        "a cat in the beautiful, detailed anime style of Studio Ghibli"
    );
}

#[test]
fn test_empty_prompt_still_gets_suffix() {
    assert_eq!(compose_prompt(""), STYLE_SUFFIX);
}

#[test]
fn test_suffix_value() {
    assert_eq!(
        STYLE_SUFFIX,
        " in the beautiful, detailed anime style of Studio Ghibli"
    );
}

#[test]
fn test_suffix_applied_on_top_of_long_prompts() {
    let prompt = "a sprawling castle in the sky above rolling green hills";
    let composed = compose_prompt(prompt);
    assert!(composed.starts_with(prompt));
    assert!(composed.ends_with("Studio Ghibli"));
}

#[test]
fn test_style_preset_underscores_become_hyphens() {
    assert_eq!(resolve_style_preset("digital_art"), "digital-art");
    assert_eq!(resolve_style_preset("pixel_art"), "pixel-art");
    assert_eq!(resolve_style_preset("low_poly"), "low-poly");
}

#[test]
fn test_style_preset_passthrough() {
    assert_eq!(resolve_style_preset("anime"), "anime");
    assert_eq!(resolve_style_preset("digital-art"), "digital-art");
    assert_eq!(resolve_style_preset("cinematic"), "cinematic");
}

#[test]
fn test_engine_id() {
    assert_eq!(ENGINE_ID, "stable-diffusion-v1-6");
}
