// File: crates/chart-core/src/error.rs
// Summary: Errors raised while loading chart configuration. Layout itself never fails.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid chart config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid canvas dimension '{0}': expected a finite, non-negative number")]
    InvalidDimension(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
