//! Built-in sound visualizer

use prism_plugin_api::{collab, AudioLevels, Collaborators, Config, Plugin, PluginError, Surface};

const GLYPHS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];

/// Frequency bar visualizer, the sound host's fallback.
///
/// Reads the audio level collaborator when present; with no audio
/// source it renders a flat baseline.
#[derive(Debug, Default)]
pub struct BarsVisualizer {
    running: bool,
}

impl BarsVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the visualizer is live between activate and teardown
    pub fn is_running(&self) -> bool {
        self.running
    }
}

fn glyph(level: f32) -> char {
    let idx = (level.clamp(0.0, 1.0) * (GLYPHS.len() - 1) as f32).round() as usize;
    GLYPHS[idx.min(GLYPHS.len() - 1)]
}

impl Plugin for BarsVisualizer {
    fn id(&self) -> &str {
        "bars"
    }

    fn defaults(&self) -> Config {
        Config::new().with("bars", 16u32).with("color", "#3399ff")
    }

    fn activate(
        &mut self,
        surface: &mut dyn Surface,
        config: &Config,
        collaborators: &Collaborators,
    ) -> Result<(), PluginError> {
        let bars = config.get_u32_clamped("bars", 1, 64, 16) as usize;
        let levels = collaborators
            .get::<AudioLevels>(collab::AUDIO)
            .map(|source| source.bands())
            .unwrap_or_default();

        let row: String = (0..bars)
            .map(|i| glyph(levels.get(i).copied().unwrap_or(0.0)))
            .collect();

        surface.set_class(Some("sound-bars"));
        surface.push(&row);
        self.running = true;
        Ok(())
    }

    fn teardown(&mut self) -> Result<(), PluginError> {
        self.running = false;
        Ok(())
    }
}
