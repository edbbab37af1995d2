// Version information for the Ghibli art relay

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-ghibli-relay-2026-08-22";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Major version number
pub const VERSION_MAJOR: u32 = 0;

/// Minor version number
pub const VERSION_MINOR: u32 = 1;

/// Patch version number
pub const VERSION_PATCH: u32 = 0;

/// Build date
pub const BUILD_DATE: &str = "2026-08-22";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "image-to-image",
    "text-to-image",
    "ghibli-style-prompts",
    "dimension-normalization",
    "cors",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Ghibli Relay {} ({})", VERSION_NUMBER, BUILD_DATE)
}
