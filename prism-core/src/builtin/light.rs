//! Built-in ambient light effect

use prism_plugin_api::{Collaborators, Config, Plugin, PluginError, Surface};

/// Single solid color fill, the light host's fallback.
#[derive(Debug, Default)]
pub struct SolidLight {
    running: bool,
}

impl SolidLight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the effect is live between activate and teardown
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Plugin for SolidLight {
    fn id(&self) -> &str {
        "solid"
    }

    fn defaults(&self) -> Config {
        Config::new().with("color", "#ffffff").with("brightness", 100u32)
    }

    fn activate(
        &mut self,
        surface: &mut dyn Surface,
        config: &Config,
        _collaborators: &Collaborators,
    ) -> Result<(), PluginError> {
        let (r, g, b) = config.get_color("color").unwrap_or((255, 255, 255));
        let brightness = config.get_u32_clamped("brightness", 0, 100, 100);

        surface.set_class(Some("light-solid"));
        surface.push(&format!("fill rgb({r},{g},{b}) @ {brightness}%"));
        self.running = true;
        Ok(())
    }

    fn teardown(&mut self) -> Result<(), PluginError> {
        self.running = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FrameSurface;

    #[test]
    fn test_solid_light_uses_config() {
        let mut light = SolidLight::new();
        let mut surface = FrameSurface::new(80, 24);
        let config = Config::merged(
            &light.defaults(),
            &Config::new().with("color", "#f80").with("brightness", 250u32),
        );

        light
            .activate(&mut surface, &config, &Collaborators::new())
            .unwrap();

        assert_eq!(surface.class(), Some("light-solid"));
        // brightness clamps to 100, short hex expands
        assert_eq!(surface.nodes()[0], "fill rgb(255,136,0) @ 100%");
        assert!(light.is_running());

        light.teardown().unwrap();
        assert!(!light.is_running());
    }

    #[test]
    fn test_solid_light_falls_back_on_bad_color() {
        let mut light = SolidLight::new();
        let mut surface = FrameSurface::new(80, 24);
        let config = Config::merged(&light.defaults(), &Config::new().with("color", "chartreuse"));

        light
            .activate(&mut surface, &config, &Collaborators::new())
            .unwrap();

        assert_eq!(surface.nodes()[0], "fill rgb(255,255,255) @ 100%");
    }
}
