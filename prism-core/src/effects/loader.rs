//! Dynamic effect bundle loading
//!
//! A bundle is a directory holding a native library built against
//! prism-plugin-api plus an optional `config.toml` with presentation
//! overrides. The library exports the entry points generated by
//! `export_plugin!`; on load it registers itself into the host's
//! registry.
//!
//! Bundles are trusted, operator-installed code. Loads are serialized
//! by the `&mut self` receiver, so the registry diff around the entry
//! point call unambiguously identifies what one load registered.

use libloading::{Library, Symbol};
use prism_plugin_api::{API_VERSION, Config, PluginRegistrar};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::error::EffectHostError;
use super::host::EffectHost;

/// Outcome of a successful bundle load
#[derive(Debug, Clone)]
pub struct LoadedBundle {
    /// Id the bundle registered under
    pub id: String,
    /// Presentation overrides from the bundle's `config.toml`, empty if
    /// the file is absent. Callers pass these as overrides when
    /// switching to the loaded effect.
    pub overrides: Config,
}

impl EffectHost {
    /// Load an effect bundle from a directory and register it into
    /// this host.
    ///
    /// The directory name doubles as the library name
    /// (`<name>.so` / `lib<name>.so`, platform extension varies).
    /// Fails loudly, unlike local switch resolution: callers must
    /// handle load errors.
    pub fn load_bundle(&mut self, dir: &Path) -> Result<LoadedBundle, EffectHostError> {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();
        if name.is_empty() {
            return Err(EffectHostError::LibraryNotFound {
                dir: dir.to_path_buf(),
            });
        }

        let lib_path = find_library(dir, &name)?;

        // SAFETY: loading a bundle the operator explicitly installed.
        // The bundle is expected to follow the export_plugin! contract.
        let library = unsafe { Library::new(&lib_path)? };

        // SAFETY: calling a C function exported by the bundle.
        let api_version_fn: Symbol<extern "C" fn() -> u32> =
            unsafe { library.get(b"_prism_plugin_api_version")? };
        let bundle_api_version = api_version_fn();
        if bundle_api_version != API_VERSION {
            return Err(EffectHostError::ApiVersionMismatch {
                expected: API_VERSION,
                found: bundle_api_version,
            });
        }

        let before: HashSet<String> = self.ids().map(str::to_string).collect();

        {
            // SAFETY: entry point generated by export_plugin!; it hands
            // boxed Plugin instances to our registrar. Registering
            // through the host tears down a displaced active instance.
            let register_fn: Symbol<extern "C" fn(&mut dyn PluginRegistrar)> =
                unsafe { library.get(b"_prism_plugin_register")? };
            register_fn(&mut *self);
        }

        let added: Vec<String> = self
            .ids()
            .filter(|id| !before.contains(*id))
            .map(str::to_string)
            .collect();

        // The registry may now reference code from this library, so the
        // handle is retained even when the load fails past this point.
        self.libraries.push(library);

        let id = match added.as_slice() {
            [] => {
                return Err(EffectHostError::DidNotRegister {
                    dir: dir.to_path_buf(),
                });
            }
            [id] => id.clone(),
            _ => {
                return Err(EffectHostError::AmbiguousRegistration { ids: added });
            }
        };

        let overrides = Config::load(&dir.join("config.toml"))
            .map_err(|e| EffectHostError::BundleConfig(e.to_string()))?;

        tracing::info!(
            kind = %self.kind(),
            effect = %id,
            path = %lib_path.display(),
            "effect bundle loaded"
        );

        Ok(LoadedBundle { id, overrides })
    }
}

/// Find the bundle library file in a directory
fn find_library(dir: &Path, name: &str) -> Result<PathBuf, EffectHostError> {
    let extensions = if cfg!(target_os = "macos") {
        vec!["dylib", "so"]
    } else if cfg!(target_os = "windows") {
        vec!["dll"]
    } else {
        vec!["so"]
    };

    for ext in extensions {
        let lib_path = dir.join(format!("{name}.{ext}"));
        if lib_path.exists() {
            return Ok(lib_path);
        }

        // Also try lib<name>.<ext>, the default cdylib artifact name
        let lib_path = dir.join(format!("lib{name}.{ext}"));
        if lib_path.exists() {
            return Ok(lib_path);
        }
    }

    Err(EffectHostError::LibraryNotFound {
        dir: dir.to_path_buf(),
    })
}
