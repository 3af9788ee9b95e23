//! prism-plugin-api - Plugin API for the prism display shell
//!
//! This crate provides the traits and types needed to write display
//! effects for prism: clock faces, ambient lights, sound visualizers,
//! draw themes, camera views, QR renderers. Effects are swappable
//! rendering units managed by an `EffectHost` in prism-core; out-of-tree
//! effects are native dynamic libraries loaded at runtime.
//!
//! # Example
//!
//! ```
//! use prism_plugin_api::{Collaborators, Config, Plugin, PluginError, Surface};
//!
//! #[derive(Default)]
//! pub struct Strobe {
//!     running: bool,
//! }
//!
//! impl Plugin for Strobe {
//!     fn id(&self) -> &str {
//!         "strobe"
//!     }
//!
//!     fn defaults(&self) -> Config {
//!         Config::new().with("color", "#ffffff").with("hz", 2i64)
//!     }
//!
//!     fn activate(
//!         &mut self,
//!         surface: &mut dyn Surface,
//!         config: &Config,
//!         _collaborators: &Collaborators,
//!     ) -> Result<(), PluginError> {
//!         let hz = config.get_u32_clamped("hz", 1, 10, 2);
//!         surface.set_class(Some("light-strobe"));
//!         surface.push(&format!("strobe {hz}Hz"));
//!         self.running = true;
//!         Ok(())
//!     }
//!
//!     fn teardown(&mut self) -> Result<(), PluginError> {
//!         self.running = false;
//!         Ok(())
//!     }
//! }
//! ```
//!
//! Loadable bundles additionally call `export_plugin!(Strobe);` and
//! build as a `cdylib`.

pub mod collab;
pub mod config;
pub mod error;
pub mod surface;

pub use collab::{AudioLevels, Collaborators};
pub use config::{Config, ConfigValue};
pub use error::PluginError;
pub use surface::Surface;

/// Current plugin API version. Bundles must match this exactly; the
/// loader checks it before creating any instances.
pub const API_VERSION: u32 = 1;

/// The effect contract - implement this to create a prism effect.
///
/// `teardown` and `on_resize` have default no-op implementations, so
/// effects only override the hooks they need.
pub trait Plugin: Send {
    /// Stable, unique identifier (e.g. `"digital"`, `"candle"`).
    ///
    /// Registering a second effect under the same id overwrites the
    /// first.
    fn id(&self) -> &str;

    /// Declared default configuration.
    ///
    /// Caller overrides are overlaid onto these at switch time; keys
    /// absent from both stay absent.
    fn defaults(&self) -> Config {
        Config::new()
    }

    /// Take over the surface and start rendering.
    ///
    /// Must return promptly after scheduling any ongoing work. An
    /// effect that starts timers or animation loops must gate their
    /// callbacks on a liveness flag cleared by its own `teardown`; the
    /// host never cancels effect internals.
    fn activate(
        &mut self,
        surface: &mut dyn Surface,
        config: &Config,
        collaborators: &Collaborators,
    ) -> Result<(), PluginError>;

    /// Release every resource acquired in `activate`.
    ///
    /// Invoked by the host before the surface is reused and errors
    /// propagate to the switch caller uncaught.
    fn teardown(&mut self) -> Result<(), PluginError> {
        Ok(())
    }

    /// The surface was resized; re-measure if output is size-dependent.
    fn on_resize(&mut self) {}
}

/// Receiver for effect registrations.
///
/// The registry in prism-core implements this; loadable bundles get a
/// `&mut dyn PluginRegistrar` through their exported entry point and
/// register themselves into it.
pub trait PluginRegistrar {
    /// Register an effect, overwriting any prior entry with the same id
    fn register_plugin(&mut self, plugin: Box<dyn Plugin>);
}

/// Export effect types from a loadable bundle.
///
/// Generates the C ABI entry points the prism loader looks up:
///
/// - `_prism_plugin_api_version()`: returns the API version
/// - `_prism_plugin_register()`: registers one instance of each listed
///   type, created via `Default`
///
/// # Usage
///
/// ```ignore
/// prism_plugin_api::export_plugin!(Aurora);
/// ```
#[macro_export]
macro_rules! export_plugin {
    ($($plugin_type:ty),+ $(,)?) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn _prism_plugin_api_version() -> u32 {
            $crate::API_VERSION
        }

        #[unsafe(no_mangle)]
        #[allow(improper_ctypes_definitions)]
        pub extern "C" fn _prism_plugin_register(
            registrar: &mut dyn $crate::PluginRegistrar,
        ) {
            $(
                registrar.register_plugin(Box::new(<$plugin_type>::default()));
            )+
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_is_set() {
        assert_eq!(API_VERSION, 1);
    }

    #[test]
    fn test_plugin_trait_is_object_safe() {
        // This compiles only if Plugin is object-safe
        fn _takes_boxed_plugin(_: Box<dyn Plugin>) {}
    }

    #[test]
    fn test_default_hooks_are_no_ops() {
        struct Bare;
        impl Plugin for Bare {
            fn id(&self) -> &str {
                "bare"
            }
            fn activate(
                &mut self,
                _surface: &mut dyn Surface,
                _config: &Config,
                _collaborators: &Collaborators,
            ) -> Result<(), PluginError> {
                Ok(())
            }
        }

        let mut plugin = Bare;
        assert!(plugin.defaults().is_empty());
        assert!(plugin.teardown().is_ok());
        plugin.on_resize();
    }
}
