//! # Hero Error Types
//!
//! Only loading overrides can fail. Everything past configuration
//! resolution falls back silently on degenerate input.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a hero configuration.
#[derive(Error, Debug)]
pub enum HeroError {
    /// The overrides file could not be read.
    #[error("cannot read overrides file {}: {source}", path.display())]
    ConfigRead {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The overrides document is not valid TOML or has mistyped fields.
    #[error("invalid overrides: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for hero operations.
pub type HeroResult<T> = Result<T, HeroError>;
