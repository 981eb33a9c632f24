use rigbridge_core::{synced_entity, EntityData, NativeBinding, NativeBridge, NativeError, NativeId};

use crate::backend::{MotionControl, PhysicsBackend};

#[derive(Clone, Debug)]
pub struct RigidBodyData {
    pub mass: f64,
    pub motion_control: MotionControl,
    pub linear_velocity_damping: f64,
    pub angular_velocity_damping: f64,
}

impl Default for RigidBodyData {
    fn default() -> Self {
        Self {
            mass: 1.0,
            motion_control: MotionControl::Dynamic,
            linear_velocity_damping: 0.0,
            angular_velocity_damping: 0.0,
        }
    }
}

impl EntityData for RigidBodyData {
    type Service = dyn PhysicsBackend;

    fn kind_name() -> &'static str {
        "RigidBody"
    }

    fn allocate_native(
        &self,
        bridge: &NativeBridge<dyn PhysicsBackend>,
    ) -> Result<NativeId, NativeError> {
        Ok(bridge.with_mut(|service| service.allocate_rigid_body()))
    }

    fn write_native(&self, binding: &NativeBinding<dyn PhysicsBackend>) {
        let id = binding.id();
        binding.bridge().with_mut(|service| {
            service.set_body_mass(id, self.mass);
            service.set_body_motion_control(id, self.motion_control);
            service.set_body_linear_damping(id, self.linear_velocity_damping);
            service.set_body_angular_damping(id, self.angular_velocity_damping);
        });
    }
}

synced_entity! {
    /// A rigid body exposed to the host as an editable entity. Simulation
    /// state (position, velocity) lives in the engine and is not mirrored
    /// here; these are the authored parameters.
    pub struct RigidBody(RigidBodyData);
    field mass: f64 { set = set_body_mass, get = body_mass }
    field motion_control: MotionControl { set = set_body_motion_control, get = body_motion_control }
    field linear_velocity_damping: f64 { set = set_body_linear_damping, get = body_linear_damping }
    field angular_velocity_damping: f64 { set = set_body_angular_damping, get = body_angular_damping }
}
