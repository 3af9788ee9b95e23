//! DisplayShell - the seven effect hosts behind one page
//!
//! The original display app repeats its manager logic per effect
//! category; here each category is just an [`EffectHost`] instantiation
//! with its own kind label and fallback id. The shell is explicitly
//! constructed and passed by reference to whatever owns the top-level
//! composition; there is no ambient global instance.

use crate::builtin::{BarsVisualizer, BinaryClock, DigitalClock, SolidLight, StaticPanel};
use crate::effects::EffectHost;

/// Kind labels in display order
pub const KINDS: [&str; 7] = [
    "clock", "light", "sound", "draw", "display", "camera", "qr",
];

/// All effect hosts of one prism page.
///
/// Construction pre-registers the built-in fallback effect for every
/// kind, so each host can always resolve its fallback id.
pub struct DisplayShell {
    clocks: EffectHost,
    lights: EffectHost,
    sounds: EffectHost,
    draw: EffectHost,
    display: EffectHost,
    cameras: EffectHost,
    qr: EffectHost,
}

impl DisplayShell {
    /// Create a shell with the built-in effects registered
    pub fn new() -> Self {
        let mut clocks = EffectHost::new("clock", "digital");
        clocks.register(Box::new(DigitalClock::new()));
        clocks.register(Box::new(BinaryClock::new()));

        let mut lights = EffectHost::new("light", "solid");
        lights.register(Box::new(SolidLight::new()));

        let mut sounds = EffectHost::new("sound", "bars");
        sounds.register(Box::new(BarsVisualizer::new()));

        let mut draw = EffectHost::new("draw", "default");
        draw.register(Box::new(StaticPanel::new("default", "draw-default", "ink")));

        let mut display = EffectHost::new("display", "default");
        display.register(Box::new(StaticPanel::new(
            "default",
            "display-default",
            "plain",
        )));

        let mut cameras = EffectHost::new("camera", "default");
        cameras.register(Box::new(StaticPanel::new(
            "default",
            "camera-default",
            "mirror",
        )));

        let mut qr = EffectHost::new("qr", "default");
        qr.register(Box::new(StaticPanel::new("default", "qr-default", "qr")));

        Self {
            clocks,
            lights,
            sounds,
            draw,
            display,
            cameras,
            qr,
        }
    }

    /// Host for a kind label, if known
    pub fn host(&self, kind: &str) -> Option<&EffectHost> {
        match kind {
            "clock" => Some(&self.clocks),
            "light" => Some(&self.lights),
            "sound" => Some(&self.sounds),
            "draw" => Some(&self.draw),
            "display" => Some(&self.display),
            "camera" => Some(&self.cameras),
            "qr" => Some(&self.qr),
            _ => None,
        }
    }

    /// Mutable host for a kind label, if known
    pub fn host_mut(&mut self, kind: &str) -> Option<&mut EffectHost> {
        match kind {
            "clock" => Some(&mut self.clocks),
            "light" => Some(&mut self.lights),
            "sound" => Some(&mut self.sounds),
            "draw" => Some(&mut self.draw),
            "display" => Some(&mut self.display),
            "camera" => Some(&mut self.cameras),
            "qr" => Some(&mut self.qr),
            _ => None,
        }
    }

    /// Iterate over all hosts in display order
    pub fn hosts(&self) -> impl Iterator<Item = &EffectHost> {
        [
            &self.clocks,
            &self.lights,
            &self.sounds,
            &self.draw,
            &self.display,
            &self.cameras,
            &self.qr,
        ]
        .into_iter()
    }

    /// Forward a container resize or orientation change to every
    /// active effect
    pub fn resize_all(&mut self) {
        self.clocks.resize();
        self.lights.resize();
        self.sounds.resize();
        self.draw.resize();
        self.display.resize();
        self.cameras.resize();
        self.qr.resize();
    }

    /// The clock host
    pub fn clocks_mut(&mut self) -> &mut EffectHost {
        &mut self.clocks
    }

    /// The light host
    pub fn lights_mut(&mut self) -> &mut EffectHost {
        &mut self.lights
    }

    /// The sound visualizer host
    pub fn sounds_mut(&mut self) -> &mut EffectHost {
        &mut self.sounds
    }
}

impl Default for DisplayShell {
    fn default() -> Self {
        Self::new()
    }
}
