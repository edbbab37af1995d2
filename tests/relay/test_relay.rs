// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Relay pipeline error propagation without a live upstream

use ghibli_relay::config::RelayConfig;
use ghibli_relay::imaging::ImageAsset;
use ghibli_relay::relay::{GhibliRelay, RelayError};
use image::{ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;

/// Points at a loopback port nothing listens on, so every upstream call
/// fails fast with a connect error instead of hanging.
fn unreachable_config() -> RelayConfig {
    RelayConfig {
        api_key: "test-key".to_string(),
        api_base: "http://127.0.0.1:59999".to_string(),
        port: 0,
    }
}

fn png_of_size(width: u32, height: u32) -> Vec<u8> {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_pixel(width, height, Rgb([90, 140, 190]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

#[tokio::test]
async fn test_text_generation_surfaces_upstream_failure() {
    let relay = GhibliRelay::new(&unreachable_config()).unwrap();

    let result = relay.generate_from_text("a cat", "anime").await;
    assert!(matches!(result, Err(RelayError::Generation(_))));
}

#[tokio::test]
async fn test_image_generation_rejects_garbage_before_upstream() {
    let relay = GhibliRelay::new(&unreachable_config()).unwrap();
    let asset = ImageAsset {
        bytes: vec![1, 2, 3, 4],
        content_type: Some("image/png".to_string()),
        file_name: None,
    };

    // Decoding fails locally, so the unreachable upstream is never contacted
    let result = relay.generate_from_image(asset, "a cat").await;
    assert!(matches!(result, Err(RelayError::Image(_))));
}

#[tokio::test]
async fn test_image_generation_surfaces_upstream_failure() {
    let relay = GhibliRelay::new(&unreachable_config()).unwrap();
    let asset = ImageAsset {
        bytes: png_of_size(100, 100),
        content_type: Some("image/png".to_string()),
        file_name: Some("cat.png".to_string()),
    };

    let result = relay.generate_from_image(asset, "a cat").await;
    assert!(matches!(result, Err(RelayError::Generation(_))));
}
