//! Run configuration.
//!
//! An optional `config.toml` in the source directory overrides the stock
//! defaults. The file is sparse — specify only the values to change:
//!
//! ```toml
//! web_root = "/photos"
//!
//! [thumbnail]
//! width = 640
//! ```
//!
//! Stock defaults:
//!
//! ```toml
//! web_root = "/images"    # Prefix for paths written into the collection
//!
//! [thumbnail]
//! width = 800             # Target width in pixels (never upscaled)
//! quality = 80            # WebP quality (1-100)
//!
//! [display]
//! width = 1920
//! quality = 85
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Pipeline configuration loaded from `config.toml`.
///
/// All fields have defaults; user files only override what they name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrepConfig {
    /// Prefix for the web paths written into the collection file.
    pub web_root: String,
    /// Thumbnail derivative settings (derivatives pipeline).
    pub thumbnail: DerivativeConfig,
    /// Display derivative settings (both pipelines).
    pub display: DerivativeConfig,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            web_root: "/images".to_string(),
            thumbnail: DerivativeConfig {
                width: 800,
                quality: 80,
            },
            display: DerivativeConfig {
                width: 1920,
                quality: 85,
            },
        }
    }
}

/// Width/quality pair for one derivative size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DerivativeConfig {
    /// Target width in pixels. Sources narrower than this keep their width.
    pub width: u32,
    /// WebP encoding quality (1 = worst, 100 = best).
    pub quality: u32,
}

impl PrepConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, d) in [("thumbnail", self.thumbnail), ("display", self.display)] {
            if d.width == 0 {
                return Err(ConfigError::Validation(format!(
                    "{name}.width must be non-zero"
                )));
            }
            if d.quality == 0 || d.quality > 100 {
                return Err(ConfigError::Validation(format!(
                    "{name}.quality must be 1-100"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading and merging
// =============================================================================

/// The stock defaults as a `toml::Value::Table`, the base layer user
/// overrides merge onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(PrepConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; non-table overlay values replace base values;
/// base keys absent from the overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// `Ok(None)` when the file (or the directory itself) does not exist;
/// `Err` when the file exists but does not parse.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<PrepConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PrepConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the source directory, falling back to
/// stock defaults when absent.
pub fn load_config(source: &Path) -> Result<PrepConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(source)?;
    resolve_config(base, overlay)
}

/// A fully-commented stock `config.toml`, printed by the `gen-config`
/// command.
pub fn stock_config_toml() -> &'static str {
    r##"# photo-prep configuration
# ========================
#
# Drop this file into your source photo directory. Every key is optional;
# omitted keys keep the defaults shown here. Unknown keys are an error.

# Prefix for the web paths written into the collection JSON.
# A photo "dawn.jpg" becomes "<web_root>/display/dawn.webp" (build) or
# "<web_root>/dawn.webp" (index).
web_root = "/images"

# Thumbnail derivative (build command only).
[thumbnail]
width = 800      # target width in pixels; narrower sources are not upscaled
quality = 80     # WebP quality, 1-100

# Display derivative (build command; also the single size used by index).
[display]
width = 1920
quality = 85
"##
}
