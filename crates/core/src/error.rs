// src/error.rs
//! Defines the error types shared by every page behavior.

use thiserror::Error;

/// Rejected site configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Selector for '{0}' must not be empty")]
    EmptySelector(&'static str),
    #[error("Playback rate must be a positive finite number, got {0}")]
    InvalidPlaybackRate(f64),
    #[error("Scroll threshold must be a non-negative finite number, got {0}")]
    InvalidScrollThreshold(f64),
    #[error("Value for '{0}' must not be empty")]
    EmptyValue(&'static str),
    #[error("Configuration JSON is invalid: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e.to_string())
    }
}

/// The main error enum for booting and running page behaviors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BehaviorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Page environment unavailable: {0}")]
    Environment(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("Page behaviors were already booted")]
    AlreadyBooted,
    #[error("Other behavior error: {0}")]
    Other(String),
}
