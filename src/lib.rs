// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod imaging;
pub mod relay;
pub mod stability;
pub mod version;

// Re-export main types
pub use api::{build_router, start_server, AppState};
pub use config::{ConfigError, RelayConfig};
pub use imaging::{ImageAsset, ImageError};
pub use relay::{GhibliRelay, RelayError};
pub use stability::{GenerationError, StabilityClient};
