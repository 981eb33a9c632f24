use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::warn;

/// Interned identity of one registered field name. The host's reflection
/// events carry strings, but they are resolved to these at the boundary and
/// everything past it dispatches on integers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FieldId(u16);

/// Whether a field-changed notification found a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled,
    /// No handler claimed the field. Not an error: the field either has no
    /// incremental side effect, or is covered by the full resync that runs
    /// whenever a native is (re)created.
    NotHandled,
}

type Handler<T> = Box<dyn Fn(&mut T) + Send + Sync>;

/// Field-change routing table for one concrete entity type.
///
/// Keys are `(outer, inner)` name pairs: a top-level field registers as
/// `(name, name)`, a leaf inside a struct field as `(struct, leaf)`. One
/// callback registered under `(struct, struct)` owns an entire struct's
/// worth of leaves — resolution falls back to it when no exact leaf entry
/// exists — while still allowing finer-grained entries where needed.
pub struct PropertyDispatcher<T> {
    type_name: &'static str,
    names: HashMap<&'static str, FieldId>,
    handlers: HashMap<(FieldId, FieldId), Handler<T>>,
}

impl<T: 'static> PropertyDispatcher<T> {
    pub(crate) fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            names: HashMap::new(),
            handlers: HashMap::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Registers a handler for a top-level field. Equivalent to
    /// `add_pair(name, name, handler)`.
    pub fn add(&mut self, name: &'static str, handler: impl Fn(&mut T) + Send + Sync + 'static) {
        self.add_pair(name, name, handler);
    }

    /// Registers a handler for a field-within-a-struct-field. First
    /// registration wins; duplicates are logged and dropped.
    pub fn add_pair(
        &mut self,
        outer: &'static str,
        inner: &'static str,
        handler: impl Fn(&mut T) + Send + Sync + 'static,
    ) {
        let outer_id = self.intern(outer);
        let inner_id = self.intern(inner);
        match self.handlers.entry((outer_id, inner_id)) {
            Entry::Occupied(_) => {
                warn!(
                    "{}: handler for ({}, {}) already registered; keeping the first",
                    self.type_name, outer, inner
                );
            }
            Entry::Vacant(entry) => {
                entry.insert(Box::new(handler));
            }
        }
    }

    /// Routes one field-changed notification.
    ///
    /// Resolution: the exact `(outer, inner)` entry first, then the
    /// whole-struct `(outer, outer)` fallback, then `NotHandled`.
    pub fn trigger(&self, outer: &str, inner: &str, target: &mut T) -> DispatchOutcome {
        let Some(outer_id) = self.names.get(outer).copied() else {
            return DispatchOutcome::NotHandled;
        };
        if let Some(inner_id) = self.names.get(inner).copied() {
            if let Some(handler) = self.handlers.get(&(outer_id, inner_id)) {
                handler(target);
                return DispatchOutcome::Handled;
            }
        }
        if let Some(handler) = self.handlers.get(&(outer_id, outer_id)) {
            handler(target);
            return DispatchOutcome::Handled;
        }
        DispatchOutcome::NotHandled
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn intern(&mut self, name: &'static str) -> FieldId {
        if let Some(id) = self.names.get(name) {
            return *id;
        }
        debug_assert!(self.names.len() < u16::MAX as usize);
        let id = FieldId(self.names.len() as u16);
        self.names.insert(name, id);
        id
    }
}
