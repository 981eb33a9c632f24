use rigbridge_core::{
    synced_entity, EntityData, NativeBinding, NativeBridge, NativeError, NativeId, SubEntity,
};

use crate::backend::PhysicsBackend;
use crate::constraint::controller::{
    ElectricMotorControllerData, FrictionControllerData, LockControllerData, RangeControllerData,
    TargetSpeedControllerData,
};

/// Authored parameters of a prismatic joint. Same controller set as
/// [`HingeData`](crate::constraint::HingeData), acting on the translational
/// degree of freedom: positions are meters, speeds meters per second.
#[derive(Clone, Debug)]
pub struct PrismaticData {
    pub enabled: bool,
    pub compliance: f64,
    pub spook_damping: f64,
    pub lock: SubEntity<LockControllerData>,
    pub speed: SubEntity<TargetSpeedControllerData>,
    pub friction: SubEntity<FrictionControllerData>,
    pub range: SubEntity<RangeControllerData>,
    pub motor: SubEntity<ElectricMotorControllerData>,
}

impl Default for PrismaticData {
    fn default() -> Self {
        Self {
            enabled: true,
            compliance: 1.0e-8,
            spook_damping: 0.0333,
            lock: SubEntity::default(),
            speed: SubEntity::default(),
            friction: SubEntity::default(),
            range: SubEntity::default(),
            motor: SubEntity::default(),
        }
    }
}

impl EntityData for PrismaticData {
    type Service = dyn PhysicsBackend;

    fn kind_name() -> &'static str {
        "Prismatic"
    }

    fn allocate_native(
        &self,
        bridge: &NativeBridge<dyn PhysicsBackend>,
    ) -> Result<NativeId, NativeError> {
        Ok(bridge.with_mut(|service| service.allocate_prismatic()))
    }

    fn write_native(&self, binding: &NativeBinding<dyn PhysicsBackend>) {
        let id = binding.id();
        binding.bridge().with_mut(|service| {
            service.set_constraint_enabled(id, self.enabled);
            service.set_constraint_compliance(id, self.compliance);
            service.set_constraint_spook_damping(id, self.spook_damping);
        });
        self.lock.write_native();
        self.speed.write_native();
        self.friction.write_native();
        self.range.write_native();
        self.motor.write_native();
    }

    fn bind_sub_entities(&mut self, parent: &NativeBinding<dyn PhysicsBackend>) {
        self.lock.bind(parent);
        self.speed.bind(parent);
        self.friction.bind(parent);
        self.range.bind(parent);
        self.motor.bind(parent);
    }

    fn unbind_sub_entities(&mut self) {
        self.lock.unbind();
        self.speed.unbind();
        self.friction.unbind();
        self.range.unbind();
        self.motor.unbind();
    }
}

synced_entity! {
    /// A prismatic (sliding) constraint between two rigid bodies.
    pub struct Prismatic(PrismaticData);
    field enabled: bool { set = set_constraint_enabled, get = constraint_enabled }
    field compliance: f64 { set = set_constraint_compliance, get = constraint_compliance }
    field spook_damping: f64 { set = set_constraint_spook_damping, get = constraint_spook_damping }
    sub lock: LockControllerData {
        field enabled: bool { set = set_controller_enabled, get = controller_enabled }
        field compliance: f64 { set = set_controller_compliance, get = controller_compliance }
        field spook_damping: f64 { set = set_controller_spook_damping, get = controller_spook_damping }
        field position: f64 { set = set_lock_position, get = lock_position }
    }
    sub speed: TargetSpeedControllerData {
        field enabled: bool { set = set_controller_enabled, get = controller_enabled }
        field compliance: f64 { set = set_controller_compliance, get = controller_compliance }
        field spook_damping: f64 { set = set_controller_spook_damping, get = controller_spook_damping }
        field target: f64 { set = set_target_speed, get = target_speed }
    }
    sub friction: FrictionControllerData {
        field enabled: bool { set = set_controller_enabled, get = controller_enabled }
        field compliance: f64 { set = set_controller_compliance, get = controller_compliance }
        field spook_damping: f64 { set = set_controller_spook_damping, get = controller_spook_damping }
        field coefficient: f64 { set = set_friction_coefficient, get = friction_coefficient }
    }
    sub range: RangeControllerData {
        field enabled: bool { set = set_controller_enabled, get = controller_enabled }
        field compliance: f64 { set = set_controller_compliance, get = controller_compliance }
        field spook_damping: f64 { set = set_controller_spook_damping, get = controller_spook_damping }
        field min: f64 { set = set_range_min, get = range_min }
        field max: f64 { set = set_range_max, get = range_max }
    }
    sub motor: ElectricMotorControllerData {
        field enabled: bool { set = set_controller_enabled, get = controller_enabled }
        field compliance: f64 { set = set_controller_compliance, get = controller_compliance }
        field spook_damping: f64 { set = set_controller_spook_damping, get = controller_spook_damping }
        field voltage: f64 { set = set_motor_voltage, get = motor_voltage }
        field armature_resistance: f64 { set = set_motor_armature_resistance, get = motor_armature_resistance }
        field torque_constant: f64 { set = set_motor_torque_constant, get = motor_torque_constant }
    }
}
