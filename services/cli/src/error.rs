//! services/cli/src/error.rs
//!
//! Defines the primary error type for the entire `cli` service.

use crate::config::ConfigError;

/// The primary error type for the `cli` service.
///
/// Fetch failures never reach this type: the browsing session absorbs them
/// and exposes the reason through its `last_error` accessor instead.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error from building the underlying HTTP client.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Represents a standard Input/Output error (e.g., reading from stdin).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
