use std::sync::{Arc, RwLock};

use rigbridge_core::{NativeBridge, RuntimeContext};
use rigbridge_entities::backend::PhysicsBackend;

use crate::stub_backend::StubBackend;

/// One stub engine plus the two context flavors, wired the way the host
/// integration wires the real thing. Tests keep the concrete `Arc` so they
/// can inspect engine-side state directly.
pub struct TestRig {
    pub backend: Arc<RwLock<StubBackend>>,
    pub play: RuntimeContext<dyn PhysicsBackend>,
    pub editor: RuntimeContext<dyn PhysicsBackend>,
}

impl TestRig {
    pub fn new() -> Self {
        let backend = Arc::new(RwLock::new(StubBackend::new()));
        let service: Arc<RwLock<dyn PhysicsBackend>> = backend.clone();
        let bridge = NativeBridge::new(service);
        Self {
            backend,
            play: RuntimeContext::play(bridge.clone()),
            editor: RuntimeContext::editor(bridge),
        }
    }

    pub fn with_backend<R>(&self, f: impl FnOnce(&StubBackend) -> R) -> R {
        f(&self.backend.read().unwrap())
    }

    pub fn allocations(&self) -> u64 {
        self.with_backend(StubBackend::allocation_count)
    }

    pub fn releases(&self) -> u64 {
        self.with_backend(StubBackend::release_count)
    }

    pub fn live(&self) -> usize {
        self.with_backend(StubBackend::live_count)
    }
}

impl Default for TestRig {
    fn default() -> Self {
        Self::new()
    }
}
