use crate::native::{NativeBridge, NativeService};
use crate::types::WorldKind;

/// The host world an operation runs in, plus the way to the engine.
///
/// Runtime instances and native objects may only be created inside a `Play`
/// context; asking inside an `Editor` context is not an error, it just
/// yields nothing. Contexts are cheap clones (the bridge is shared) and are
/// carried by transfer records across reconstruction passes.
pub struct RuntimeContext<S: NativeService + ?Sized> {
    world_kind: WorldKind,
    bridge: NativeBridge<S>,
}

impl<S: NativeService + ?Sized> RuntimeContext<S> {
    pub fn play(bridge: NativeBridge<S>) -> Self {
        Self {
            world_kind: WorldKind::Play,
            bridge,
        }
    }

    pub fn editor(bridge: NativeBridge<S>) -> Self {
        Self {
            world_kind: WorldKind::Editor,
            bridge,
        }
    }

    pub fn world_kind(&self) -> WorldKind {
        self.world_kind
    }

    pub fn is_play(&self) -> bool {
        self.world_kind.is_play()
    }

    pub fn bridge(&self) -> &NativeBridge<S> {
        &self.bridge
    }
}

impl<S: NativeService + ?Sized> Clone for RuntimeContext<S> {
    fn clone(&self) -> Self {
        Self {
            world_kind: self.world_kind,
            bridge: self.bridge.clone(),
        }
    }
}
