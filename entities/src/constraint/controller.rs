//! The five secondary-constraint controllers.
//!
//! Each controller is a [`SubEntityData`]: its native object is never
//! allocated here, it is fetched from the owning constraint's handle. All
//! five share the common enable/compliance/damping surface and add their own
//! degree-of-freedom parameters.

use rigbridge_core::{NativeBinding, NativeId, SubEntityData};

use crate::backend::{ControllerKind, PhysicsBackend};

fn write_common(
    binding: &NativeBinding<dyn PhysicsBackend>,
    enabled: bool,
    compliance: f64,
    spook_damping: f64,
) {
    let id = binding.id();
    binding.bridge().with_mut(|service| {
        service.set_controller_enabled(id, enabled);
        service.set_controller_compliance(id, compliance);
        service.set_controller_spook_damping(id, spook_damping);
    });
}

fn fetch(
    parent: &NativeBinding<dyn PhysicsBackend>,
    kind: ControllerKind,
) -> Option<NativeId> {
    parent
        .bridge()
        .with(|service| service.controller(parent.id(), kind))
}

/// Locks the free degree of freedom at a position.
#[derive(Clone, Debug)]
pub struct LockControllerData {
    pub enabled: bool,
    pub compliance: f64,
    pub spook_damping: f64,
    pub position: f64,
}

impl Default for LockControllerData {
    fn default() -> Self {
        Self {
            enabled: false,
            compliance: 1.0e-8,
            spook_damping: 0.0333,
            position: 0.0,
        }
    }
}

impl SubEntityData for LockControllerData {
    type Service = dyn PhysicsBackend;

    fn kind_name() -> &'static str {
        "LockController"
    }

    fn fetch_native(parent: &NativeBinding<dyn PhysicsBackend>) -> Option<NativeId> {
        fetch(parent, ControllerKind::Lock)
    }

    fn write_native(&self, binding: &NativeBinding<dyn PhysicsBackend>) {
        write_common(binding, self.enabled, self.compliance, self.spook_damping);
        let id = binding.id();
        binding
            .bridge()
            .with_mut(|service| service.set_lock_position(id, self.position));
    }
}

/// Drives the free degree of freedom at a target speed.
#[derive(Clone, Debug)]
pub struct TargetSpeedControllerData {
    pub enabled: bool,
    pub compliance: f64,
    pub spook_damping: f64,
    pub target: f64,
}

impl Default for TargetSpeedControllerData {
    fn default() -> Self {
        Self {
            enabled: false,
            compliance: 1.0e-8,
            spook_damping: 0.0333,
            target: 0.0,
        }
    }
}

impl SubEntityData for TargetSpeedControllerData {
    type Service = dyn PhysicsBackend;

    fn kind_name() -> &'static str {
        "TargetSpeedController"
    }

    fn fetch_native(parent: &NativeBinding<dyn PhysicsBackend>) -> Option<NativeId> {
        fetch(parent, ControllerKind::TargetSpeed)
    }

    fn write_native(&self, binding: &NativeBinding<dyn PhysicsBackend>) {
        write_common(binding, self.enabled, self.compliance, self.spook_damping);
        let id = binding.id();
        binding
            .bridge()
            .with_mut(|service| service.set_target_speed(id, self.target));
    }
}

/// Dry friction along the free degree of freedom.
#[derive(Clone, Debug)]
pub struct FrictionControllerData {
    pub enabled: bool,
    pub compliance: f64,
    pub spook_damping: f64,
    pub coefficient: f64,
}

impl Default for FrictionControllerData {
    fn default() -> Self {
        Self {
            enabled: false,
            compliance: 1.0e-8,
            spook_damping: 0.0333,
            coefficient: 0.417,
        }
    }
}

impl SubEntityData for FrictionControllerData {
    type Service = dyn PhysicsBackend;

    fn kind_name() -> &'static str {
        "FrictionController"
    }

    fn fetch_native(parent: &NativeBinding<dyn PhysicsBackend>) -> Option<NativeId> {
        fetch(parent, ControllerKind::Friction)
    }

    fn write_native(&self, binding: &NativeBinding<dyn PhysicsBackend>) {
        write_common(binding, self.enabled, self.compliance, self.spook_damping);
        let id = binding.id();
        binding
            .bridge()
            .with_mut(|service| service.set_friction_coefficient(id, self.coefficient));
    }
}

/// Restricts the free degree of freedom to `[min, max]`.
#[derive(Clone, Debug)]
pub struct RangeControllerData {
    pub enabled: bool,
    pub compliance: f64,
    pub spook_damping: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for RangeControllerData {
    fn default() -> Self {
        Self {
            enabled: false,
            compliance: 1.0e-8,
            spook_damping: 0.0333,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }
}

impl SubEntityData for RangeControllerData {
    type Service = dyn PhysicsBackend;

    fn kind_name() -> &'static str {
        "RangeController"
    }

    fn fetch_native(parent: &NativeBinding<dyn PhysicsBackend>) -> Option<NativeId> {
        fetch(parent, ControllerKind::Range)
    }

    fn write_native(&self, binding: &NativeBinding<dyn PhysicsBackend>) {
        write_common(binding, self.enabled, self.compliance, self.spook_damping);
        let id = binding.id();
        binding.bridge().with_mut(|service| {
            service.set_range_min(id, self.min);
            service.set_range_max(id, self.max);
        });
    }
}

/// Drives the free degree of freedom through an electric-motor model.
#[derive(Clone, Debug)]
pub struct ElectricMotorControllerData {
    pub enabled: bool,
    pub compliance: f64,
    pub spook_damping: f64,
    pub voltage: f64,
    pub armature_resistance: f64,
    pub torque_constant: f64,
}

impl Default for ElectricMotorControllerData {
    fn default() -> Self {
        Self {
            enabled: false,
            compliance: 1.0e-8,
            spook_damping: 0.0333,
            voltage: 24.0,
            armature_resistance: 1.0,
            torque_constant: 1.0,
        }
    }
}

impl SubEntityData for ElectricMotorControllerData {
    type Service = dyn PhysicsBackend;

    fn kind_name() -> &'static str {
        "ElectricMotorController"
    }

    fn fetch_native(parent: &NativeBinding<dyn PhysicsBackend>) -> Option<NativeId> {
        fetch(parent, ControllerKind::ElectricMotor)
    }

    fn write_native(&self, binding: &NativeBinding<dyn PhysicsBackend>) {
        write_common(binding, self.enabled, self.compliance, self.spook_damping);
        let id = binding.id();
        binding.bridge().with_mut(|service| {
            service.set_motor_voltage(id, self.voltage);
            service.set_motor_armature_resistance(id, self.armature_resistance);
            service.set_motor_torque_constant(id, self.torque_constant);
        });
    }
}
