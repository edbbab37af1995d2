// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Environment-backed startup configuration

use std::env;

use thiserror::Error;
use url::Url;

/// Default upstream API base URL
pub const DEFAULT_API_BASE: &str = "https://api.stability.ai";

/// Default HTTP listen port
pub const DEFAULT_API_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("STABILITY_API_KEY is not set or empty")]
    MissingApiKey,

    #[error("invalid STABILITY_API_BASE '{0}': {1}")]
    InvalidApiBase(String, String),

    #[error("invalid API_PORT '{0}'")]
    InvalidPort(String),
}

/// Configuration read once at startup; read-only afterwards
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Bearer credential for the upstream generation API
    pub api_key: String,
    /// Upstream API base URL, without a trailing slash
    pub api_base: String,
    /// Port the HTTP server binds on
    pub port: u16,
}

impl RelayConfig {
    /// Load configuration from environment variables.
    ///
    /// A missing or blank `STABILITY_API_KEY` is a fatal error; the relay
    /// must not serve without a credential.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("STABILITY_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let api_base =
            env::var("STABILITY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Url::parse(&api_base)
            .map_err(|e| ConfigError::InvalidApiBase(api_base.clone(), e.to_string()))?;

        let port = match env::var("API_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_API_PORT,
        };

        Ok(Self {
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            port,
        })
    }
}
