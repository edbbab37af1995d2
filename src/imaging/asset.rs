// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! In-memory image asset passed between pipeline stages

/// Encoded image bytes plus the metadata needed to re-encode and upload them
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    /// Encoded image payload (PNG, JPEG, GIF or BMP container)
    pub bytes: Vec<u8>,
    /// Declared content type, e.g. "image/png"
    pub content_type: Option<String>,
    /// Original upload filename, if any
    pub file_name: Option<String>,
}

impl ImageAsset {
    pub fn new(bytes: Vec<u8>, content_type: Option<String>, file_name: Option<String>) -> Self {
        Self {
            bytes,
            content_type,
            file_name,
        }
    }

    /// Size of the encoded payload in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
