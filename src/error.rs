//! Error types for the remote store and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Failures talking to the remote project store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Endpoint missing or still the setup placeholder
    #[error("Set up your Google Apps Script and put its URL in config.toml (endpoint = \"...\")")]
    NotConfigured,

    /// Network or TLS failure
    #[error("Could not reach the project store: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("Project store returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The store answered with `success: false`
    #[error("{0}")]
    Remote(String),

    /// Body was not the expected envelope
    #[error("Unexpected response from the project store: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}
