//! Built-in effects
//!
//! One minimal effect per kind so every host has its fallback
//! registered out of the box. Rendering is deliberately simple; these
//! exist to satisfy the lifecycle contract, not to look good.

mod clock;
mod light;
mod panel;
mod sound;

pub use clock::{BinaryClock, DigitalClock};
pub use light::SolidLight;
pub use panel::StaticPanel;
pub use sound::BarsVisualizer;
