//! Error types for effect authors

use thiserror::Error;

/// Errors that effects can return from their lifecycle hooks
///
/// The host never catches these; they propagate to whoever triggered
/// the switch.
#[derive(Error, Debug)]
pub enum PluginError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Activation failed
    #[error("Activation failed: {0}")]
    Activation(String),

    /// Teardown failed
    #[error("Teardown failed: {0}")]
    Teardown(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message
    #[error("{0}")]
    Custom(String),
}

impl PluginError {
    /// Create a custom error with a message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an activation error
    pub fn activation(message: impl Into<String>) -> Self {
        Self::Activation(message.into())
    }

    /// Create a teardown error
    pub fn teardown(message: impl Into<String>) -> Self {
        Self::Teardown(message.into())
    }
}
