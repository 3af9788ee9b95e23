//! Collaborators - external engines passed through to effects
//!
//! Sound visualizers read an audio level source, camera mirrors read a
//! frame source, ink themes drive a draw engine. The host forwards the
//! whole bag to `activate` without examining it; effects pull out the
//! services they know by name and type.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Well-known collaborator name for the audio level source
pub const AUDIO: &str = "audio";
/// Well-known collaborator name for the camera frame source
pub const CAMERA: &str = "camera";
/// Well-known collaborator name for the draw-stroke engine
pub const DRAW: &str = "draw";

/// Named bag of opaque services forwarded to effect activation.
#[derive(Default)]
pub struct Collaborators {
    services: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl Collaborators {
    /// Create an empty collaborator bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a service under a name, replacing any previous entry
    pub fn insert<T: Any + Send + Sync>(&mut self, name: impl Into<String>, service: Arc<T>) {
        self.services.insert(name.into(), service);
    }

    /// Builder: insert a service
    pub fn with<T: Any + Send + Sync>(mut self, name: impl Into<String>, service: Arc<T>) -> Self {
        self.insert(name, service);
        self
    }

    /// Get a service by name and concrete type.
    ///
    /// For trait objects stored as `Arc<Arc<dyn Trait>>`, specify
    /// `T = Arc<dyn Trait>`.
    pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        self.services
            .get(name)
            .cloned()
            .and_then(|service| service.downcast::<T>().ok())
    }

    /// Check whether a service is present
    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }
}

/// Shared audio level source for sound visualizer effects.
///
/// The audio capture collaborator writes band magnitudes in `0.0..=1.0`;
/// visualizers snapshot them on each frame.
#[derive(Debug, Default)]
pub struct AudioLevels {
    bands: Mutex<Vec<f32>>,
}

impl AudioLevels {
    /// Create a source with no bands yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current band magnitudes
    pub fn set_bands(&self, bands: Vec<f32>) {
        if let Ok(mut current) = self.bands.lock() {
            *current = bands;
        }
    }

    /// Snapshot the current band magnitudes
    pub fn bands(&self) -> Vec<f32> {
        self.bands.lock().map(|b| b.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get_typed() {
        let levels = Arc::new(AudioLevels::new());
        let collab = Collaborators::new().with(AUDIO, levels.clone());

        let fetched: Arc<AudioLevels> = collab.get(AUDIO).unwrap();
        levels.set_bands(vec![0.5]);
        assert_eq!(fetched.bands(), vec![0.5]);
    }

    #[test]
    fn test_get_missing_name() {
        let collab = Collaborators::new();
        assert!(collab.get::<AudioLevels>(AUDIO).is_none());
        assert!(!collab.contains(AUDIO));
    }

    #[test]
    fn test_get_wrong_type() {
        let collab = Collaborators::new().with(AUDIO, Arc::new(AudioLevels::new()));
        assert!(collab.get::<String>(AUDIO).is_none());
    }

    #[test]
    fn test_audio_levels_snapshot_is_a_copy() {
        let levels = AudioLevels::new();
        levels.set_bands(vec![0.1, 0.2]);

        let mut snapshot = levels.bands();
        snapshot.push(0.9);

        assert_eq!(levels.bands(), vec![0.1, 0.2]);
    }
}
