// src/config.rs

//! Configuration for pattern requests that do not spell out every detail.
//!
//! The config is a small JSON document; every field is optional and falls
//! back to its default:
//!
//! ```json
//! { "default_width": 100, "default_height": 100, "pixel_format": "Rgba8" }
//! ```
//!
//! `Config::from_env` loads the file named by `PATTERNKIT_CONFIG`, or uses
//! the defaults when the variable is unset.

use crate::error::ConfigError;
use crate::pattern::PatternDescriptor;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Environment variable holding the path of a JSON config file.
pub const CONFIG_ENV_VAR: &str = "PATTERNKIT_CONFIG";

/// Selects one of the built-in pixel formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PixelFormat {
    #[default]
    Rgba8,
    Bgra8,
    Rgba16,
    Rgb565,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 4] = [
        PixelFormat::Rgba8,
        PixelFormat::Bgra8,
        PixelFormat::Rgba16,
        PixelFormat::Rgb565,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PixelFormat::Rgba8 => "Rgba8",
            PixelFormat::Bgra8 => "Bgra8",
            PixelFormat::Rgba16 => "Rgba16",
            PixelFormat::Rgb565 => "Rgb565",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = ConfigError;

    /// Case-insensitive match on the format name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PixelFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPixelFormat(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width used when a request does not give one.
    pub default_width: u32,
    /// Height used when a request does not give one.
    pub default_height: u32,
    /// Pixel format used when a request does not give one.
    pub pixel_format: PixelFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_width: 100,
            default_height: 100,
            pixel_format: PixelFormat::default(),
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads from the file named by [`CONFIG_ENV_VAR`], or returns the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => {
                debug!("{} not set, using default config", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.default_width, self.default_height)
    }

    /// Test pattern descriptor at the default size.
    pub fn default_descriptor(&self) -> PatternDescriptor {
        PatternDescriptor::test_pattern(self.default_width, self.default_height)
    }
}

/// Checks dimensions before they reach the generator, which would panic on zero.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::InvalidDimensions { width, height });
    }
    Ok(())
}
