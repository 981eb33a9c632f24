use log::error;

use crate::native::bridge::NativeBridge;
use crate::native::id::NativeId;
use crate::native::service::NativeService;

/// Exclusive evidence of ownership of one engine object.
///
/// A binding pairs a [`NativeId`] with the bridge it can be reached through.
/// It is deliberately not `Clone`: at any moment exactly one runtime instance
/// (or one in-flight transfer record) owns a given native object. Dropping a
/// binding does *not* release the engine object — release is a deliberate
/// lifecycle event, never a side effect of wrapper destruction, which is what
/// lets a native survive the host destroying its wrapper.
pub struct NativeBinding<S: NativeService + ?Sized> {
    bridge: NativeBridge<S>,
    id: NativeId,
}

impl<S: NativeService + ?Sized> NativeBinding<S> {
    pub fn new(bridge: NativeBridge<S>, id: NativeId) -> Self {
        Self { bridge, id }
    }

    pub fn id(&self) -> NativeId {
        self.id
    }

    pub fn bridge(&self) -> &NativeBridge<S> {
        &self.bridge
    }

    /// Destroys the engine object. Consumes the binding; the id is dead
    /// afterwards.
    pub(crate) fn release(self) {
        let id = self.id;
        self.bridge.with_mut(|service| service.release(id));
    }
}

/// The possibly-absent native side of a synchronized entity.
///
/// Detached (no binding) is a normal, common state: every template is
/// permanently detached, and every runtime instance starts detached until its
/// native is created or adopted.
pub struct NativeRef<S: NativeService + ?Sized> {
    binding: Option<NativeBinding<S>>,
}

impl<S: NativeService + ?Sized> NativeRef<S> {
    pub fn detached() -> Self {
        Self { binding: None }
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn id(&self) -> Option<NativeId> {
        self.binding.as_ref().map(NativeBinding::id)
    }

    pub fn binding(&self) -> Option<&NativeBinding<S>> {
        self.binding.as_ref()
    }

    /// Installs a binding. Binding over an existing binding is a caller bug
    /// (the engine object behind the old binding would leak); the old binding
    /// is kept and the new one dropped.
    pub(crate) fn bind(&mut self, binding: NativeBinding<S>) {
        if let Some(existing) = &self.binding {
            debug_assert!(false, "bind called on an already-bound NativeRef");
            error!(
                "Refusing to bind {} over already-bound {}; release the existing native first",
                binding.id(),
                existing.id()
            );
            return;
        }
        self.binding = Some(binding);
    }

    /// Replaces whatever binding is present. Used by sub-entities, whose
    /// handles are re-fetched whenever the parent's native changes identity.
    pub(crate) fn rebind(&mut self, binding: NativeBinding<S>) {
        self.binding = Some(binding);
    }

    /// Removes and returns the binding without releasing the engine object.
    pub(crate) fn take(&mut self) -> Option<NativeBinding<S>> {
        self.binding.take()
    }

    pub(crate) fn clear(&mut self) {
        self.binding = None;
    }
}

impl<S: NativeService + ?Sized> Default for NativeRef<S> {
    fn default() -> Self {
        Self::detached()
    }
}
