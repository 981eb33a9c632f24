use crate::native::{NativeBinding, NativeBridge, NativeError, NativeId, NativeService};

/// The per-entity data shape plugged into the generic [`Synced`] pattern.
///
/// Implementations are thin: they name the backend service they talk to,
/// know how to allocate their kind of engine object, and know how to push
/// every field into a live binding. The lifecycle logic around them lives
/// entirely in [`Synced`].
///
/// [`Synced`]: crate::entity::Synced
pub trait EntityData: Clone + Send + Sync + 'static {
    type Service: NativeService + ?Sized + 'static;

    /// Name used in log output. Stable, human-readable, one per entity kind.
    fn kind_name() -> &'static str;

    /// Allocates a fresh engine object for this kind of entity. The returned
    /// id carries no field values yet; the caller follows up with
    /// [`write_native`](Self::write_native).
    fn allocate_native(
        &self,
        bridge: &NativeBridge<Self::Service>,
    ) -> Result<NativeId, NativeError>;

    /// Pushes every field's current value into the binding, sub-entities
    /// included. Called once right after allocation so that a freshly
    /// allocated native always reflects the entity's last-known values.
    fn write_native(&self, binding: &NativeBinding<Self::Service>);

    /// Re-fetches every sub-entity's handle from `parent`. Sub-entities must
    /// be bound before [`write_native`](Self::write_native) runs so their
    /// values have somewhere to go.
    fn bind_sub_entities(&mut self, parent: &NativeBinding<Self::Service>) {
        let _ = parent;
    }

    fn unbind_sub_entities(&mut self) {}
}

/// Data shape of a controller sub-entity.
///
/// Same triad semantics as [`EntityData`], except the native object is never
/// allocated directly: it is fetched from a sub-accessor of the parent's
/// handle once the parent is live.
pub trait SubEntityData: Clone + Send + Sync + 'static {
    type Service: NativeService + ?Sized + 'static;

    fn kind_name() -> &'static str;

    /// Looks up this sub-entity's engine object on the parent's handle.
    fn fetch_native(parent: &NativeBinding<Self::Service>) -> Option<NativeId>;

    /// Pushes every field's current value into the binding.
    fn write_native(&self, binding: &NativeBinding<Self::Service>);
}
