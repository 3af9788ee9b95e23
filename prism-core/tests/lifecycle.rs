//! Effect host lifecycle tests
//!
//! Exercises the switching guarantees with instrumented effects: every
//! activate opens a tracked resource, every teardown releases it, and
//! an event log records hook ordering.

use prism_core::{EffectHost, FrameSurface};
use prism_plugin_api::{Collaborators, Config, Plugin, PluginError, Surface};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Probe {
    events: Arc<Mutex<Vec<String>>>,
    open_resources: Arc<AtomicUsize>,
}

impl Probe {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: impl Into<String>) {
        self.events.lock().unwrap().push(event.into());
    }

    fn open(&self) -> usize {
        self.open_resources.load(Ordering::SeqCst)
    }
}

struct TrackedEffect {
    id: &'static str,
    /// Event-log label; distinct tags tell two instances of the same
    /// id apart
    tag: &'static str,
    defaults: Config,
    probe: Probe,
    fail_activate: bool,
    fail_teardown: bool,
}

impl TrackedEffect {
    fn new(id: &'static str, probe: &Probe) -> Self {
        Self {
            id,
            tag: id,
            defaults: Config::new(),
            probe: probe.clone(),
            fail_activate: false,
            fail_teardown: false,
        }
    }

    fn with_defaults(mut self, defaults: Config) -> Self {
        self.defaults = defaults;
        self
    }

    fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }
}

impl Plugin for TrackedEffect {
    fn id(&self) -> &str {
        self.id
    }

    fn defaults(&self) -> Config {
        self.defaults.clone()
    }

    fn activate(
        &mut self,
        surface: &mut dyn Surface,
        _config: &Config,
        _collaborators: &Collaborators,
    ) -> Result<(), PluginError> {
        // The open-resource count at activation time proves the
        // previous effect finished tearing down first.
        self.probe
            .record(format!("{}:activate(open={})", self.tag, self.probe.open()));
        if self.fail_activate {
            return Err(PluginError::activation("broken effect"));
        }
        self.probe.open_resources.fetch_add(1, Ordering::SeqCst);
        surface.push(self.id);
        Ok(())
    }

    fn teardown(&mut self) -> Result<(), PluginError> {
        self.probe.record(format!("{}:teardown", self.tag));
        if self.fail_teardown {
            return Err(PluginError::teardown("stuck resource"));
        }
        self.probe.open_resources.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }

    fn on_resize(&mut self) {
        self.probe.record(format!("{}:resize", self.tag));
    }
}

fn host_with(probe: &Probe, ids: &[&'static str]) -> EffectHost {
    let mut host = EffectHost::new("light", "default");
    for id in ids {
        host.register(Box::new(TrackedEffect::new(id, probe)));
    }
    host
}

#[test]
fn single_active_effect_after_switch_sequence() {
    let probe = Probe::default();
    let mut host = host_with(&probe, &["default", "candle", "strobe"]);
    let mut surface = FrameSurface::new(80, 24);

    for id in ["candle", "strobe", "candle"] {
        host.switch(id, &mut surface, &Config::new(), &Collaborators::new())
            .unwrap();
    }

    assert_eq!(host.current_id(), Some("candle"));
    assert_eq!(host.current().unwrap().id(), "candle");
    // One resource open: the active effect's
    assert_eq!(probe.open(), 1);
    assert_eq!(
        probe.events(),
        vec![
            "candle:activate(open=0)",
            "candle:teardown",
            "strobe:activate(open=0)",
            "strobe:teardown",
            "candle:activate(open=0)",
        ]
    );
}

#[test]
fn teardown_completes_before_next_activate() {
    let probe = Probe::default();
    let mut host = host_with(&probe, &["a", "b"]);
    let mut surface = FrameSurface::new(80, 24);

    host.switch("a", &mut surface, &Config::new(), &Collaborators::new())
        .unwrap();
    assert_eq!(probe.open(), 1);

    host.switch("b", &mut surface, &Config::new(), &Collaborators::new())
        .unwrap();

    // b observed zero open resources at activation: a released first
    assert!(probe.events().contains(&"b:activate(open=0)".to_string()));
    assert_eq!(
        probe
            .events()
            .iter()
            .filter(|e| *e == "a:teardown")
            .count(),
        1
    );
}

#[test]
fn fallback_is_deterministic() {
    let probe = Probe::default();
    let mut host = EffectHost::new("light", "default");
    host.register(Box::new(
        TrackedEffect::new("default", &probe)
            .with_defaults(Config::new().with("color", "#ffffff").with("level", 3i64)),
    ));
    let mut surface = FrameSurface::new(80, 24);

    host.switch(
        "nonexistent-id",
        &mut surface,
        &Config::new().with("level", 9i64),
        &Collaborators::new(),
    )
    .unwrap();

    assert_eq!(host.current_id(), Some("default"));
    // Merged config reflects the fallback's defaults, not the
    // requested id's
    let config = host.current_config().unwrap();
    assert_eq!(config.get_str("color"), Some("#ffffff"));
    assert_eq!(config.get_f64("level"), Some(9.0));
}

#[test]
fn total_failure_leaves_session_empty_without_error() {
    let mut host = EffectHost::new("light", "default");
    let mut surface = FrameSurface::new(80, 24);
    surface.push("stale external content");

    let result = host.switch(
        "anything",
        &mut surface,
        &Config::new(),
        &Collaborators::new(),
    );

    assert!(result.is_ok());
    assert!(host.current_id().is_none());
    assert!(host.current().is_none());
    assert!(host.current_config().is_none());
    // The surface was still cleared for the (absent) incoming effect
    assert!(surface.nodes().is_empty());
}

#[test]
fn surface_cleared_even_without_previous_effect() {
    let probe = Probe::default();
    let mut host = host_with(&probe, &["default"]);
    let mut surface = FrameSurface::new(80, 24);
    surface.push("left behind by someone else");
    surface.set_class(Some("stale-class"));

    host.switch("default", &mut surface, &Config::new(), &Collaborators::new())
        .unwrap();

    assert_eq!(surface.nodes(), ["default"]);
    assert!(surface.class().is_none());
}

#[test]
fn resize_forwards_exactly_once_per_call() {
    let probe = Probe::default();
    let mut host = host_with(&probe, &["default"]);
    let mut surface = FrameSurface::new(80, 24);

    // No active effect: no-op, no error
    host.resize();
    assert!(probe.events().is_empty());

    host.switch("default", &mut surface, &Config::new(), &Collaborators::new())
        .unwrap();
    host.resize();
    host.resize();

    let resizes = probe
        .events()
        .iter()
        .filter(|e| *e == "default:resize")
        .count();
    assert_eq!(resizes, 2);
}

#[test]
fn current_config_is_a_defensive_copy() {
    let probe = Probe::default();
    let mut host = EffectHost::new("light", "default");
    host.register(Box::new(
        TrackedEffect::new("default", &probe)
            .with_defaults(Config::new().with("color", "#ffffff")),
    ));
    let mut surface = FrameSurface::new(80, 24);

    host.switch("default", &mut surface, &Config::new(), &Collaborators::new())
        .unwrap();

    let mut copy = host.current_config().unwrap();
    copy.set("color", "#000000");
    copy.set("injected", true);

    let fresh = host.current_config().unwrap();
    assert_eq!(fresh.get_str("color"), Some("#ffffff"));
    assert!(!fresh.contains("injected"));
}

#[test]
fn defaults_for_is_a_defensive_copy_and_does_not_activate() {
    let probe = Probe::default();
    let mut host = EffectHost::new("light", "default");
    host.register(Box::new(
        TrackedEffect::new("default", &probe).with_defaults(Config::new().with("level", 3i64)),
    ));

    let mut copy = host.defaults_for("default").unwrap();
    copy.set("level", 99i64);

    assert_eq!(
        host.defaults_for("default").unwrap().get_f64("level"),
        Some(3.0)
    );
    // Nothing activated, nothing logged
    assert!(host.current_id().is_none());
    assert!(probe.events().is_empty());
    assert!(host.defaults_for("unregistered").is_none());
}

#[test]
fn teardown_error_propagates_to_switch_caller() {
    let probe = Probe::default();
    let mut host = EffectHost::new("light", "default");
    let mut failing = TrackedEffect::new("sticky", &probe);
    failing.fail_teardown = true;
    host.register(Box::new(failing));
    host.register(Box::new(TrackedEffect::new("default", &probe)));
    let mut surface = FrameSurface::new(80, 24);

    host.switch("sticky", &mut surface, &Config::new(), &Collaborators::new())
        .unwrap();

    let result = host.switch("default", &mut surface, &Config::new(), &Collaborators::new());
    assert!(matches!(result, Err(PluginError::Teardown(_))));
}

#[test]
fn activate_error_propagates_to_switch_caller() {
    let probe = Probe::default();
    let mut host = EffectHost::new("light", "default");
    let mut failing = TrackedEffect::new("default", &probe);
    failing.fail_activate = true;
    host.register(Box::new(failing));
    let mut surface = FrameSurface::new(80, 24);

    let result = host.switch("default", &mut surface, &Config::new(), &Collaborators::new());
    assert!(matches!(result, Err(PluginError::Activation(_))));
}

#[test]
fn switching_to_the_active_effect_restarts_it() {
    let probe = Probe::default();
    let mut host = host_with(&probe, &["default"]);
    let mut surface = FrameSurface::new(80, 24);

    host.switch("default", &mut surface, &Config::new(), &Collaborators::new())
        .unwrap();
    host.switch("default", &mut surface, &Config::new(), &Collaborators::new())
        .unwrap();

    assert_eq!(
        probe.events(),
        vec![
            "default:activate(open=0)",
            "default:teardown",
            "default:activate(open=0)",
        ]
    );
    assert_eq!(probe.open(), 1);
}

#[test]
fn reregistering_the_active_id_tears_down_the_live_instance() {
    let probe = Probe::default();
    let mut host = host_with(&probe, &["default"]);
    host.register(Box::new(TrackedEffect::new("glow", &probe).with_tag("glow-v1")));
    let mut surface = FrameSurface::new(80, 24);

    host.switch("glow", &mut surface, &Config::new(), &Collaborators::new())
        .unwrap();
    assert_eq!(probe.open(), 1);

    // A re-load replaces the running instance under the same id
    host.register(Box::new(TrackedEffect::new("glow", &probe).with_tag("glow-v2")));

    // The instance that held resources was torn down, not the fresh
    // one, and the session emptied
    assert_eq!(probe.open(), 0);
    assert!(host.current_id().is_none());
    assert_eq!(
        probe.events(),
        vec!["glow-v1:activate(open=0)", "glow-v1:teardown"]
    );

    // The replacement activates normally afterwards
    host.switch("glow", &mut surface, &Config::new(), &Collaborators::new())
        .unwrap();
    assert_eq!(host.current_id(), Some("glow"));
    assert!(probe.events().contains(&"glow-v2:activate(open=0)".to_string()));
}

#[test]
fn reregistering_an_inactive_id_leaves_the_session_alone() {
    let probe = Probe::default();
    let mut host = host_with(&probe, &["default", "glow"]);
    let mut surface = FrameSurface::new(80, 24);

    host.switch("glow", &mut surface, &Config::new(), &Collaborators::new())
        .unwrap();

    host.register(Box::new(TrackedEffect::new("default", &probe).with_tag("default-v2")));

    assert_eq!(host.current_id(), Some("glow"));
    assert_eq!(probe.open(), 1);
    assert!(!probe.events().iter().any(|e| e.ends_with(":teardown")));
}

#[test]
fn overrides_survive_merge_with_defaults() {
    let probe = Probe::default();
    let mut host = EffectHost::new("light", "default");
    host.register(Box::new(
        TrackedEffect::new("default", &probe)
            .with_defaults(Config::new().with("a", 1i64).with("b", 2i64)),
    ));
    let mut surface = FrameSurface::new(80, 24);

    host.switch(
        "default",
        &mut surface,
        &Config::new().with("b", 3i64).with("c", 4i64),
        &Collaborators::new(),
    )
    .unwrap();

    let config = host.current_config().unwrap();
    assert_eq!(config.get_f64("a"), Some(1.0));
    assert_eq!(config.get_f64("b"), Some(3.0));
    assert_eq!(config.get_f64("c"), Some(4.0));
}
