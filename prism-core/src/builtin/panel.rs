//! Static placeholder effects
//!
//! The draw, display, camera, and QR hosts each need a registered
//! fallback before any richer effect is installed; these panels
//! satisfy the contract with a single labeled node.

use prism_plugin_api::{Collaborators, Config, Plugin, PluginError, Surface};

/// Minimal effect that renders one configurable label.
#[derive(Debug)]
pub struct StaticPanel {
    id: &'static str,
    class: &'static str,
    label: &'static str,
    running: bool,
}

impl StaticPanel {
    pub fn new(id: &'static str, class: &'static str, label: &'static str) -> Self {
        Self {
            id,
            class,
            label,
            running: false,
        }
    }

    /// Whether the panel is live between activate and teardown
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Plugin for StaticPanel {
    fn id(&self) -> &str {
        self.id
    }

    fn defaults(&self) -> Config {
        Config::new().with("label", self.label)
    }

    fn activate(
        &mut self,
        surface: &mut dyn Surface,
        config: &Config,
        _collaborators: &Collaborators,
    ) -> Result<(), PluginError> {
        surface.set_class(Some(self.class));
        surface.push(config.get_str("label").unwrap_or(self.label));
        self.running = true;
        Ok(())
    }

    fn teardown(&mut self) -> Result<(), PluginError> {
        self.running = false;
        Ok(())
    }
}
