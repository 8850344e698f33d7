//! Configuration loading

mod settings;

pub use settings::{CombatConstants, GameSettings};

use thiserror::Error;

/// Error loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
