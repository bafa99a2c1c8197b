//! Mosaic layout configuration.
//!
//! TOML-based configuration for the tiling engine. Every field has a
//! default so a partial (or missing) file works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mosaic_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("gap = {}", config.layout.gap);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LayoutConfig, MosaicConfig};
pub use toml_loader::{from_toml_str, load_default, load_from_path};

use mosaic_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<MosaicConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MosaicConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
