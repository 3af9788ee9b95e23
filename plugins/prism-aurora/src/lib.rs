//! Aurora - drifting color band effect for the prism light host
//!
//! Ships as a loadable bundle: build the cdylib, drop it in
//! `~/.config/prism/effects/prism-aurora/` and load it into the light
//! host at runtime.

use prism_plugin_api::{Collaborators, Config, Plugin, PluginError, Surface, export_plugin};

/// Sliding gradient bands across the surface width.
#[derive(Debug, Default)]
pub struct Aurora {
    phase: usize,
    running: bool,
}

impl Aurora {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the effect is live between activate and teardown
    pub fn is_running(&self) -> bool {
        self.running
    }
}

const PALETTE: [char; 4] = ['░', '▒', '▓', '█'];

fn band(width: usize, phase: usize, row: usize) -> String {
    (0..width)
        .map(|col| PALETTE[(col + phase + row) % PALETTE.len()])
        .collect()
}

impl Plugin for Aurora {
    fn id(&self) -> &str {
        "aurora"
    }

    fn defaults(&self) -> Config {
        Config::new()
            .with("bands", 5u32)
            .with("color", "#19b5fe")
            .with("drift", true)
    }

    fn activate(
        &mut self,
        surface: &mut dyn Surface,
        config: &Config,
        _collaborators: &Collaborators,
    ) -> Result<(), PluginError> {
        let bands = config.get_u32_clamped("bands", 1, 32, 5) as usize;
        let (cols, _rows) = surface.size();
        if config.get_bool("drift").unwrap_or(true) {
            self.phase += 1;
        }

        surface.set_class(Some("light-aurora"));
        for row in 0..bands {
            surface.push(&band(cols as usize, self.phase, row));
        }

        tracing::debug!(bands, phase = self.phase, "aurora activated");
        self.running = true;
        Ok(())
    }

    fn teardown(&mut self) -> Result<(), PluginError> {
        self.running = false;
        Ok(())
    }

    fn on_resize(&mut self) {
        // Next activation re-reads the surface width; drop the phase so
        // bands restart aligned.
        self.phase = 0;
    }
}

export_plugin!(Aurora);

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::FrameSurface;

    #[test]
    fn test_aurora_renders_band_rows() {
        let mut aurora = Aurora::new();
        let mut surface = FrameSurface::new(12, 24);

        aurora
            .activate(&mut surface, &aurora.defaults(), &Collaborators::new())
            .unwrap();

        assert_eq!(surface.class(), Some("light-aurora"));
        assert_eq!(surface.nodes().len(), 5);
        assert_eq!(surface.nodes()[0].chars().count(), 12);
        assert!(aurora.is_running());

        aurora.teardown().unwrap();
        assert!(!aurora.is_running());
    }

    #[test]
    fn test_aurora_band_count_from_config() {
        let mut aurora = Aurora::new();
        let mut surface = FrameSurface::new(12, 24);
        let config = Config::merged(&aurora.defaults(), &Config::new().with("bands", 2u32));

        aurora
            .activate(&mut surface, &config, &Collaborators::new())
            .unwrap();

        assert_eq!(surface.nodes().len(), 2);
    }

    #[test]
    fn test_resize_resets_phase() {
        let mut aurora = Aurora::new();
        let mut surface = FrameSurface::new(12, 24);

        aurora
            .activate(&mut surface, &aurora.defaults(), &Collaborators::new())
            .unwrap();
        assert_eq!(aurora.phase, 1);

        aurora.on_resize();
        assert_eq!(aurora.phase, 0);
    }

    #[test]
    fn test_registers_through_exported_entry_point() {
        use prism_core::EffectRegistry;
        use prism_plugin_api::PluginRegistrar;

        let mut registry = EffectRegistry::new();
        _prism_plugin_register(&mut registry as &mut dyn PluginRegistrar);

        assert!(registry.has("aurora"));
        assert_eq!(_prism_plugin_api_version(), prism_plugin_api::API_VERSION);
    }
}
