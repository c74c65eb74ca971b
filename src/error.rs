// src/error.rs

//! Recoverable errors. Only configuration loading can fail; contract
//! violations in pattern generation panic instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid pattern dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Unknown pixel format: {0}")]
    UnknownPixelFormat(String),
}
