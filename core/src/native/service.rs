use crate::native::id::NativeId;

/// The minimal surface of the external engine that the generic machinery
/// needs. The engine is otherwise opaque; per-domain typed setters and
/// getters live on the consuming crate's backend trait, which supertraits
/// this one.
pub trait NativeService: Send + Sync {
    /// Whether `id` still names a live engine object.
    fn has(&self, id: NativeId) -> bool;

    /// Destroys the engine object behind `id`. Releasing an unknown id is a
    /// caller bug; implementations log it and continue.
    fn release(&mut self, id: NativeId);
}
