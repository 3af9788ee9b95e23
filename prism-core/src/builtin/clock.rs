//! Built-in clock faces

use chrono::{Local, Timelike};
use prism_plugin_api::{Collaborators, Config, Plugin, PluginError, Surface};

/// Plain digital clock face, the clock host's fallback.
#[derive(Debug, Default)]
pub struct DigitalClock {
    running: bool,
}

impl DigitalClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the face is live between activate and teardown
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Plugin for DigitalClock {
    fn id(&self) -> &str {
        "digital"
    }

    fn defaults(&self) -> Config {
        Config::new()
            .with("format", "24h")
            .with("seconds", true)
            .with("color", "#00ff88")
    }

    fn activate(
        &mut self,
        surface: &mut dyn Surface,
        config: &Config,
        _collaborators: &Collaborators,
    ) -> Result<(), PluginError> {
        let now = Local::now();
        let seconds = config.get_bool("seconds").unwrap_or(true);
        let face = match (config.get_str("format"), seconds) {
            (Some("12h"), true) => now.format("%I:%M:%S %p").to_string(),
            (Some("12h"), false) => now.format("%I:%M %p").to_string(),
            (_, true) => now.format("%H:%M:%S").to_string(),
            (_, false) => now.format("%H:%M").to_string(),
        };

        surface.set_class(Some("clock-digital"));
        surface.push(&face);
        self.running = true;
        Ok(())
    }

    fn teardown(&mut self) -> Result<(), PluginError> {
        self.running = false;
        Ok(())
    }
}

/// Binary clock face: one row of bits per time component.
#[derive(Debug, Default)]
pub struct BinaryClock {
    running: bool,
}

impl BinaryClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the face is live between activate and teardown
    pub fn is_running(&self) -> bool {
        self.running
    }
}

fn bits(value: u32) -> String {
    (0..6)
        .rev()
        .map(|bit| if value >> bit & 1 == 1 { '●' } else { '○' })
        .collect()
}

impl Plugin for BinaryClock {
    fn id(&self) -> &str {
        "binary"
    }

    fn defaults(&self) -> Config {
        Config::new().with("seconds", true).with("color", "#ffaa00")
    }

    fn activate(
        &mut self,
        surface: &mut dyn Surface,
        config: &Config,
        _collaborators: &Collaborators,
    ) -> Result<(), PluginError> {
        let now = Local::now();
        surface.set_class(Some("clock-binary"));
        surface.push(&bits(now.hour()));
        surface.push(&bits(now.minute()));
        if config.get_bool("seconds").unwrap_or(true) {
            surface.push(&bits(now.second()));
        }
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
    fn test_digital_clock_renders_one_node() {
        let mut clock = DigitalClock::new();
        let mut surface = FrameSurface::new(80, 24);

        clock
            .activate(&mut surface, &clock.defaults(), &Collaborators::new())
            .unwrap();

        assert!(clock.is_running());
        assert_eq!(surface.nodes().len(), 1);
        assert_eq!(surface.class(), Some("clock-digital"));

        clock.teardown().unwrap();
        assert!(!clock.is_running());
    }

    #[test]
    fn test_digital_clock_12h_without_seconds() {
        let mut clock = DigitalClock::new();
        let mut surface = FrameSurface::new(80, 24);
        let config = Config::merged(
            &clock.defaults(),
            &Config::new().with("format", "12h").with("seconds", false),
        );

        clock
            .activate(&mut surface, &config, &Collaborators::new())
            .unwrap();

        // "hh:mm AM" has no second seconds colon
        assert_eq!(surface.nodes()[0].matches(':').count(), 1);
    }

    #[test]
    fn test_binary_clock_row_count_follows_seconds() {
        let mut clock = BinaryClock::new();
        let mut surface = FrameSurface::new(80, 24);

        clock
            .activate(&mut surface, &clock.defaults(), &Collaborators::new())
            .unwrap();
        assert_eq!(surface.nodes().len(), 3);

        clock.teardown().unwrap();
        let config = Config::merged(&clock.defaults(), &Config::new().with("seconds", false));
        let mut surface = FrameSurface::new(80, 24);
        clock
            .activate(&mut surface, &config, &Collaborators::new())
            .unwrap();
        assert_eq!(surface.nodes().len(), 2);
    }

    #[test]
    fn test_bits_width_and_pattern() {
        assert_eq!(bits(0).chars().count(), 6);
        assert_eq!(bits(0b101010), "●○●○●○");
    }
}
