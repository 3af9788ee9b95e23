//! Effect registry - id to effect map with stable enumeration order

use prism_plugin_api::{Plugin, PluginRegistrar};
use std::collections::HashMap;

/// Registry of effects for one host.
///
/// Every id maps to exactly one effect; re-registering an id
/// overwrites the prior entry (last registration wins). Enumeration
/// follows first-registration order so UI listings stay stable across
/// overwrites.
#[derive(Default)]
pub struct EffectRegistry {
    plugins: HashMap<String, Box<dyn Plugin>>,
    order: Vec<String>,
}

impl EffectRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an effect under its own id.
    ///
    /// An effect with an empty id is dropped with a logged error; this
    /// is non-fatal so one bad registration can't take the shell down.
    /// On re-registration the displaced prior instance is returned so
    /// the caller can tear it down if it was live.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> Option<Box<dyn Plugin>> {
        let id = plugin.id().to_string();
        if id.is_empty() {
            tracing::error!("refusing to register effect without an id");
            return None;
        }
        let displaced = self.plugins.insert(id.clone(), plugin);
        if displaced.is_none() {
            self.order.push(id);
        } else {
            tracing::debug!(effect = %id, "effect re-registered, previous entry replaced");
        }
        displaced
    }

    /// Look up an effect by id
    pub fn lookup(&self, id: &str) -> Option<&dyn Plugin> {
        self.plugins.get(id).map(|p| p.as_ref())
    }

    /// Look up an effect by id, mutably
    pub fn lookup_mut(&mut self, id: &str) -> Option<&mut dyn Plugin> {
        match self.plugins.get_mut(id) {
            Some(p) => Some(p.as_mut()),
            None => None,
        }
    }

    /// Check whether an id is registered
    pub fn has(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }

    /// Iterate over registered ids in first-registration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of registered effects
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl PluginRegistrar for EffectRegistry {
    fn register_plugin(&mut self, plugin: Box<dyn Plugin>) {
        self.register(plugin);
    }
}
