//! prism-core: Core library for the prism display shell
//!
//! This crate provides the lifecycle machinery behind prism's
//! switchable display effects:
//!
//! - **Effect lifecycle** - [`EffectHost`] owns the active session for
//!   one effect kind and guarantees teardown-before-reuse switching
//! - **Registration** - [`EffectRegistry`] maps effect ids to
//!   implementations of the [`prism_plugin_api::Plugin`] contract
//! - **Loadable bundles** - [`EffectHost::load_bundle`] loads
//!   operator-installed effect libraries at runtime
//! - **Composition** - [`DisplayShell`] instantiates the seven hosts a
//!   prism page runs (clocks, lights, sounds, draw, display, cameras,
//!   QR)
//! - **Built-ins** - [`builtin`] holds the fallback effect for every
//!   kind
//!
//! # Quick Start
//!
//! ```
//! use prism_core::{DisplayShell, FrameSurface};
//! use prism_plugin_api::{Collaborators, Config};
//!
//! let mut shell = DisplayShell::new();
//! let mut surface = FrameSurface::new(80, 24);
//!
//! // Unknown ids degrade to the kind's fallback instead of failing
//! shell.clocks_mut().switch(
//!     "sundial",
//!     &mut surface,
//!     &Config::new(),
//!     &Collaborators::new(),
//! )?;
//! assert_eq!(shell.host("clock").unwrap().current_id(), Some("digital"));
//! # Ok::<(), prism_plugin_api::PluginError>(())
//! ```

pub mod builtin;
pub mod effects;
pub mod paths;
pub mod shell;
pub mod surface;

// Re-export key types for convenience
pub use effects::{EffectHost, EffectHostError, EffectRegistry, LoadedBundle};
pub use shell::{DisplayShell, KINDS};
pub use surface::FrameSurface;
