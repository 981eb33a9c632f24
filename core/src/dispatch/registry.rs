use std::any::{Any, TypeId};
use std::collections::HashMap;

use log::{debug, info};

use crate::dispatch::config::DispatchConfig;
use crate::dispatch::dispatcher::{DispatchOutcome, PropertyDispatcher};

/// The per-type registry behind the host's field-changed notifications.
///
/// One registry serves the whole plugin; registration happens once per
/// concrete entity type, at startup, and is guarded so repeated module
/// initialization stays cheap. The host integration owns the registry and
/// feeds it `(outer, inner, object)` triples as reflection reports edits.
pub struct DispatchRegistry {
    config: DispatchConfig,
    dispatchers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl DispatchRegistry {
    pub fn new() -> Self {
        Self::with_config(DispatchConfig::default())
    }

    pub fn with_config(config: DispatchConfig) -> Self {
        Self {
            config,
            dispatchers: HashMap::new(),
        }
    }

    pub fn is_initialized<T: 'static>(&self) -> bool {
        self.dispatchers.contains_key(&TypeId::of::<T>())
    }

    /// Builds the dispatcher for `T`, once. Subsequent calls for the same
    /// type are no-ops; registration is process-wide and type-specific, not
    /// per-instance.
    pub fn init<T: 'static>(
        &mut self,
        type_name: &'static str,
        build: impl FnOnce(&mut PropertyDispatcher<T>),
    ) {
        if self.is_initialized::<T>() {
            return;
        }
        let mut dispatcher = PropertyDispatcher::new(type_name);
        build(&mut dispatcher);
        info!(
            "DispatchRegistry: registered {} change handlers for {}",
            dispatcher.len(),
            type_name
        );
        self.dispatchers
            .insert(TypeId::of::<T>(), Box::new(dispatcher));
    }

    /// Routes one field-changed notification to `target`'s dispatcher.
    ///
    /// A type with no dispatcher, or a field with no handler, yields
    /// `NotHandled` — a valid outcome, since the full resync on native
    /// (re)creation eventually makes the native state correct anyway.
    pub fn trigger<T: 'static>(&self, target: &mut T, outer: &str, inner: &str) -> DispatchOutcome {
        let Some(entry) = self.dispatchers.get(&TypeId::of::<T>()) else {
            if self.config.log_unhandled {
                debug!(
                    "DispatchRegistry: no dispatcher for changed field ({}, {})",
                    outer, inner
                );
            }
            return DispatchOutcome::NotHandled;
        };
        let Some(dispatcher) = entry.downcast_ref::<PropertyDispatcher<T>>() else {
            debug_assert!(false, "dispatcher entry has the wrong type");
            return DispatchOutcome::NotHandled;
        };
        let outcome = dispatcher.trigger(outer, inner, target);
        if outcome == DispatchOutcome::NotHandled && self.config.log_unhandled {
            debug!(
                "{}: no handler for changed field ({}, {})",
                dispatcher.type_name(),
                outer,
                inner
            );
        }
        outcome
    }
}

impl Default for DispatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}
