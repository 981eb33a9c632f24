use log::debug;

use rigbridge_core::{
    synced_entity, EntityData, EntityError, NativeBinding, NativeBridge, NativeError, NativeId,
    RuntimeContext,
};

use crate::backend::PhysicsBackend;

#[derive(Clone, Debug)]
pub struct WireData {
    pub radius: f64,
    /// Simulation nodes per unit length along the routed path.
    pub resolution: f64,
    pub velocity_damping: f64,
}

impl Default for WireData {
    fn default() -> Self {
        Self {
            radius: 0.02,
            resolution: 2.0,
            velocity_damping: 0.0,
        }
    }
}

impl EntityData for WireData {
    type Service = dyn PhysicsBackend;

    fn kind_name() -> &'static str {
        "Wire"
    }

    fn allocate_native(
        &self,
        bridge: &NativeBridge<dyn PhysicsBackend>,
    ) -> Result<NativeId, NativeError> {
        Ok(bridge.with_mut(|service| service.allocate_wire()))
    }

    fn write_native(&self, binding: &NativeBinding<dyn PhysicsBackend>) {
        let id = binding.id();
        binding.bridge().with_mut(|service| {
            service.set_wire_radius(id, self.radius);
            service.set_wire_resolution(id, self.resolution);
            service.set_wire_velocity_damping(id, self.velocity_damping);
        });
    }
}

synced_entity! {
    /// A lumped-element wire. Routing geometry lives in the engine; these
    /// are the authored parameters.
    pub struct Wire(WireData);
    field radius: f64 { set = set_wire_radius, get = wire_radius }
    field resolution: f64 { set = set_wire_resolution, get = wire_resolution }
    field velocity_damping: f64 { set = set_wire_velocity_damping, get = wire_velocity_damping }
}

impl Wire {
    /// Rebuilds the wire from its authored parameters after a routing edit.
    /// The engine cannot re-route in place, so the native is replaced
    /// wholesale: released, reallocated, and resynced from the stored
    /// fields.
    pub fn reroute(
        &mut self,
        context: &RuntimeContext<dyn PhysicsBackend>,
    ) -> Result<(), EntityError> {
        debug!("Wire: rerouting, native will be replaced wholesale");
        self.sync.recreate_native(context)
    }
}
