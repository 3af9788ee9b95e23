//! Effect lifecycle management
//!
//! This module is the heart of prism: one generic lifecycle manager
//! that every effect kind instantiates:
//!
//! - [`EffectHost`]: owns the registry and active session for one
//!   kind; switches effects with teardown-before-reuse guarantees
//! - [`EffectRegistry`]: id → effect map with stable enumeration
//! - [`LoadedBundle`] / [`EffectHost::load_bundle`]: dynamic loading of
//!   out-of-tree effect bundles
//! - [`EffectHostError`]: the loud error path (bundle loading only;
//!   switch resolution degrades softly)
//!
//! # Example
//!
//! ```
//! use prism_core::{EffectHost, FrameSurface};
//! use prism_plugin_api::{Collaborators, Config};
//!
//! let mut host = EffectHost::new("light", "solid");
//! host.register(Box::new(prism_core::builtin::SolidLight::new()));
//!
//! let mut surface = FrameSurface::new(80, 24);
//! host.switch(
//!     "solid",
//!     &mut surface,
//!     &Config::new().with("color", "#ff8800"),
//!     &Collaborators::new(),
//! )?;
//! assert_eq!(host.current_id(), Some("solid"));
//! # Ok::<(), prism_plugin_api::PluginError>(())
//! ```

mod error;
mod host;
mod loader;
mod registry;

pub use error::EffectHostError;
pub use host::EffectHost;
pub use loader::LoadedBundle;
pub use registry::EffectRegistry;
