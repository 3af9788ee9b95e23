//! EffectHost - owns the active-effect session for one effect kind
//!
//! The shell runs seven of these (clocks, lights, sounds, draw themes,
//! display themes, cameras, QR renderers). They differ only in kind
//! label and fallback id; all lifecycle logic lives here once.

use libloading::Library;
use prism_plugin_api::{Collaborators, Config, Plugin, PluginError, PluginRegistrar, Surface};

use super::registry::EffectRegistry;

/// The host's record of the currently active effect.
///
/// Both fields exist or neither does; the host transitions them
/// together so "what is currently active" has a single source of
/// truth.
struct ActiveSession {
    id: String,
    config: Config,
}

/// Lifecycle manager for one kind of effect.
///
/// Owns the registry and the active session, and guarantees that the
/// outgoing effect's `teardown` completes before the surface is handed
/// to the incoming one. Callers hold the host explicitly (typically
/// through [`DisplayShell`](crate::shell::DisplayShell)); there is no
/// ambient global instance.
pub struct EffectHost {
    /// Kind label used in logs and listings ("clock", "light", ...)
    kind: &'static str,
    /// Id switched to when a requested id is unregistered
    fallback_id: String,
    registry: EffectRegistry,
    session: Option<ActiveSession>,
    /// Libraries backing dynamically loaded bundles. Kept for the
    /// host's lifetime so registered effect code stays mapped.
    pub(super) libraries: Vec<Library>,
}

impl EffectHost {
    /// Create an empty host for one effect kind
    pub fn new(kind: &'static str, fallback_id: impl Into<String>) -> Self {
        Self {
            kind,
            fallback_id: fallback_id.into(),
            registry: EffectRegistry::new(),
            session: None,
            libraries: Vec::new(),
        }
    }

    /// Kind label of this host
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Fallback id of this host
    pub fn fallback_id(&self) -> &str {
        &self.fallback_id
    }

    /// Register an effect, overwriting any prior entry with the same id.
    ///
    /// Re-registering the currently active id (a bundle re-load, say)
    /// displaces the instance that holds live resources: that instance
    /// is torn down here and the session empties, so the activated
    /// instance always gets exactly one `teardown`. A teardown error on
    /// this path is logged rather than propagated, since the displaced
    /// instance is gone either way.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        if let Some(mut displaced) = self.registry.register(plugin) {
            let was_active = self
                .session
                .as_ref()
                .is_some_and(|s| s.id == displaced.id());
            if was_active {
                tracing::warn!(
                    kind = %self.kind,
                    effect = %displaced.id(),
                    "active effect re-registered, tearing down the displaced instance"
                );
                self.session = None;
                if let Err(err) = displaced.teardown() {
                    tracing::error!(
                        kind = %self.kind,
                        effect = %displaced.id(),
                        error = %err,
                        "displaced effect failed to tear down"
                    );
                }
            }
        }
    }

    /// Iterate over registered effect ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.registry.ids()
    }

    /// Check whether an effect id is registered
    pub fn has(&self, id: &str) -> bool {
        self.registry.has(id)
    }

    /// Number of registered effects
    pub fn effect_count(&self) -> usize {
        self.registry.len()
    }

    /// Switch the surface to another effect.
    ///
    /// Tears down the outgoing effect, clears the surface, resolves the
    /// requested id (one-hop fallback to this host's fallback id), then
    /// merges config and activates. An id that resolves to nothing is a
    /// soft failure: the session empties, an error is logged, and
    /// `Ok(())` is returned so a bad id degrades the display instead of
    /// crashing it. Errors returned by the effect's own `teardown` or
    /// `activate` propagate uncaught.
    pub fn switch(
        &mut self,
        id: &str,
        surface: &mut dyn Surface,
        overrides: &Config,
        collaborators: &Collaborators,
    ) -> Result<(), PluginError> {
        // 1. The outgoing effect must finish releasing its resources
        //    before the surface is reused; rapid cycling depends on it.
        if let Some(session) = self.session.take() {
            if let Some(previous) = self.registry.lookup_mut(&session.id) {
                previous.teardown()?;
            }
        }

        // 2. The host clears the surface itself, even when nothing was
        //    active, so an incomplete teardown or external mutation
        //    cannot leave stale content for the incoming effect.
        surface.clear();
        surface.set_class(None);

        // 3. Requested id, then one hop to the fallback, then give up.
        let resolved = if self.registry.has(id) {
            id.to_string()
        } else {
            tracing::warn!(
                kind = %self.kind,
                effect = %id,
                fallback = %self.fallback_id,
                "effect not registered, using fallback"
            );
            self.fallback_id.clone()
        };

        let Some(plugin) = self.registry.lookup_mut(&resolved) else {
            tracing::error!(
                kind = %self.kind,
                effect = %id,
                fallback = %self.fallback_id,
                "no effect available, leaving display empty"
            );
            return Ok(());
        };

        // 4.-6. Merge against the resolved effect's defaults (fallback
        //    may have occurred), record the session, activate.
        let config = Config::merged(&plugin.defaults(), overrides);
        self.session = Some(ActiveSession {
            id: resolved,
            config: config.clone(),
        });
        plugin.activate(surface, &config, collaborators)
    }

    /// Forward a resize notification to the active effect.
    ///
    /// No-op when nothing is active. Effects that size output to the
    /// surface cannot rely on being told by the surface itself, so the
    /// shell calls this on container resize and orientation changes.
    pub fn resize(&mut self) {
        if let Some(session) = &self.session {
            if let Some(plugin) = self.registry.lookup_mut(&session.id) {
                plugin.on_resize();
            }
        }
    }

    /// Id of the currently active effect
    pub fn current_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.id.as_str())
    }

    /// The currently active effect
    pub fn current(&self) -> Option<&dyn Plugin> {
        self.session
            .as_ref()
            .and_then(|s| self.registry.lookup(&s.id))
    }

    /// Defensive copy of the active session's merged config
    pub fn current_config(&self) -> Option<Config> {
        self.session.as_ref().map(|s| s.config.clone())
    }

    /// Defensive copy of a registered effect's declared defaults,
    /// without activating it.
    ///
    /// UI layers use this to pre-populate option panels before a
    /// switch.
    pub fn defaults_for(&self, id: &str) -> Option<Config> {
        self.registry.lookup(id).map(|p| p.defaults())
    }
}

/// Bundle entry points register through the host rather than the bare
/// registry, so an overwrite of the active id is handled.
impl PluginRegistrar for EffectHost {
    fn register_plugin(&mut self, plugin: Box<dyn Plugin>) {
        self.register(plugin);
    }
}
