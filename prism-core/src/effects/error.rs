//! Effect host error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading effect bundles.
///
/// Local switch failures (unknown id, empty registry) are deliberately
/// soft and never surface here; bundle loading is the one loud,
/// caller-observable failure path.
#[derive(Error, Debug)]
pub enum EffectHostError {
    /// Bundle library not found in directory
    #[error("Effect library not found in {dir}")]
    LibraryNotFound { dir: PathBuf },

    /// Failed to load dynamic library
    #[error("Failed to load effect library: {0}")]
    LibraryLoad(#[from] libloading::Error),

    /// API version mismatch between prism and the bundle
    #[error("API version mismatch: prism expects {expected}, bundle has {found}")]
    ApiVersionMismatch { expected: u32, found: u32 },

    /// Bundle entry point ran but registered nothing
    #[error("Bundle in {dir} did not register an effect")]
    DidNotRegister { dir: PathBuf },

    /// Bundle registered more than one effect in a single load
    #[error("Bundle registered more than one effect: {}", .ids.join(", "))]
    AmbiguousRegistration { ids: Vec<String> },

    /// Bundle config.toml present but unusable
    #[error("Bundle config error: {0}")]
    BundleConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
