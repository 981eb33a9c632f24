use rigbridge_core::{NativeId, NativeService};

/// How the engine integrates a rigid body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MotionControl {
    Static,
    Kinematic,
    #[default]
    Dynamic,
}

/// The secondary-constraint controllers a constraint exposes, used to fetch
/// a controller's native object from its owning constraint's handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControllerKind {
    Lock,
    TargetSpeed,
    Friction,
    Range,
    ElectricMotor,
}

/// The typed surface of the external physics/raytracing engine.
///
/// Everything behind this trait is opaque: the real implementation wraps the
/// closed-source engine's FFI, and the test crate substitutes an in-memory
/// stub. Allocators hand out [`NativeId`]s into the engine's object arena;
/// setters are fire-and-forget; getters return `None` when the id names no
/// live object of the right kind, which callers treat as the expected-absence
/// case and fall back to their stored values.
///
/// Controller natives are never allocated through this trait — they come
/// into existence with their constraint and are looked up with
/// [`controller`](Self::controller).
pub trait PhysicsBackend: NativeService {
    // Rigid bodies

    fn allocate_rigid_body(&mut self) -> NativeId;
    fn set_body_mass(&mut self, body: NativeId, mass: f64);
    fn body_mass(&self, body: NativeId) -> Option<f64>;
    fn set_body_motion_control(&mut self, body: NativeId, motion: MotionControl);
    fn body_motion_control(&self, body: NativeId) -> Option<MotionControl>;
    fn set_body_linear_damping(&mut self, body: NativeId, damping: f64);
    fn body_linear_damping(&self, body: NativeId) -> Option<f64>;
    fn set_body_angular_damping(&mut self, body: NativeId, damping: f64);
    fn body_angular_damping(&self, body: NativeId) -> Option<f64>;

    // Shape materials

    fn allocate_shape_material(&mut self) -> NativeId;
    fn set_material_density(&mut self, material: NativeId, density: f64);
    fn material_density(&self, material: NativeId) -> Option<f64>;
    fn set_material_young_modulus(&mut self, material: NativeId, modulus: f64);
    fn material_young_modulus(&self, material: NativeId) -> Option<f64>;
    fn set_material_roughness(&mut self, material: NativeId, roughness: f64);
    fn material_roughness(&self, material: NativeId) -> Option<f64>;
    fn set_material_surface_viscosity(&mut self, material: NativeId, viscosity: f64);
    fn material_surface_viscosity(&self, material: NativeId) -> Option<f64>;

    // Constraints

    fn allocate_hinge(&mut self) -> NativeId;
    fn allocate_prismatic(&mut self) -> NativeId;
    fn set_constraint_enabled(&mut self, constraint: NativeId, enabled: bool);
    fn constraint_enabled(&self, constraint: NativeId) -> Option<bool>;
    fn set_constraint_compliance(&mut self, constraint: NativeId, compliance: f64);
    fn constraint_compliance(&self, constraint: NativeId) -> Option<f64>;
    fn set_constraint_spook_damping(&mut self, constraint: NativeId, damping: f64);
    fn constraint_spook_damping(&self, constraint: NativeId) -> Option<f64>;

    /// Looks up a constraint's controller sub-object.
    fn controller(&self, constraint: NativeId, kind: ControllerKind) -> Option<NativeId>;

    // Controllers, common surface

    fn set_controller_enabled(&mut self, controller: NativeId, enabled: bool);
    fn controller_enabled(&self, controller: NativeId) -> Option<bool>;
    fn set_controller_compliance(&mut self, controller: NativeId, compliance: f64);
    fn controller_compliance(&self, controller: NativeId) -> Option<f64>;
    fn set_controller_spook_damping(&mut self, controller: NativeId, damping: f64);
    fn controller_spook_damping(&self, controller: NativeId) -> Option<f64>;

    // Controllers, per-kind surface

    fn set_lock_position(&mut self, controller: NativeId, position: f64);
    fn lock_position(&self, controller: NativeId) -> Option<f64>;
    fn set_target_speed(&mut self, controller: NativeId, speed: f64);
    fn target_speed(&self, controller: NativeId) -> Option<f64>;
    fn set_friction_coefficient(&mut self, controller: NativeId, coefficient: f64);
    fn friction_coefficient(&self, controller: NativeId) -> Option<f64>;
    fn set_range_min(&mut self, controller: NativeId, min: f64);
    fn range_min(&self, controller: NativeId) -> Option<f64>;
    fn set_range_max(&mut self, controller: NativeId, max: f64);
    fn range_max(&self, controller: NativeId) -> Option<f64>;
    fn set_motor_voltage(&mut self, controller: NativeId, voltage: f64);
    fn motor_voltage(&self, controller: NativeId) -> Option<f64>;
    fn set_motor_armature_resistance(&mut self, controller: NativeId, resistance: f64);
    fn motor_armature_resistance(&self, controller: NativeId) -> Option<f64>;
    fn set_motor_torque_constant(&mut self, controller: NativeId, torque_constant: f64);
    fn motor_torque_constant(&self, controller: NativeId) -> Option<f64>;

    // Wires

    fn allocate_wire(&mut self) -> NativeId;
    fn set_wire_radius(&mut self, wire: NativeId, radius: f64);
    fn wire_radius(&self, wire: NativeId) -> Option<f64>;
    fn set_wire_resolution(&mut self, wire: NativeId, nodes_per_unit: f64);
    fn wire_resolution(&self, wire: NativeId) -> Option<f64>;
    fn set_wire_velocity_damping(&mut self, wire: NativeId, damping: f64);
    fn wire_velocity_damping(&self, wire: NativeId) -> Option<f64>;

    // Terrain

    fn allocate_terrain(&mut self) -> NativeId;
    fn set_terrain_max_depth(&mut self, terrain: NativeId, depth: f64);
    fn terrain_max_depth(&self, terrain: NativeId) -> Option<f64>;
    fn set_terrain_penetration_force_scaling(&mut self, terrain: NativeId, scaling: f64);
    fn terrain_penetration_force_scaling(&self, terrain: NativeId) -> Option<f64>;
    fn set_terrain_deformation_enabled(&mut self, terrain: NativeId, enabled: bool);
    fn terrain_deformation_enabled(&self, terrain: NativeId) -> Option<bool>;

    // Contact merge-split thresholds

    fn allocate_contact_thresholds(&mut self) -> NativeId;
    fn set_threshold_max_impact_speed(&mut self, thresholds: NativeId, speed: f64);
    fn threshold_max_impact_speed(&self, thresholds: NativeId) -> Option<f64>;
    fn set_threshold_max_normal_speed(&mut self, thresholds: NativeId, speed: f64);
    fn threshold_max_normal_speed(&self, thresholds: NativeId) -> Option<f64>;
    fn set_threshold_max_tangent_speed(&mut self, thresholds: NativeId, speed: f64);
    fn threshold_max_tangent_speed(&self, thresholds: NativeId) -> Option<f64>;
    fn set_threshold_max_rolling_speed(&mut self, thresholds: NativeId, speed: f64);
    fn threshold_max_rolling_speed(&self, thresholds: NativeId) -> Option<f64>;

    // Lidar sensors

    fn allocate_lidar(&mut self) -> NativeId;
    fn set_lidar_frequency(&mut self, lidar: NativeId, hertz: f64);
    fn lidar_frequency(&self, lidar: NativeId) -> Option<f64>;
    fn set_lidar_horizontal_fov(&mut self, lidar: NativeId, degrees: f64);
    fn lidar_horizontal_fov(&self, lidar: NativeId) -> Option<f64>;
    fn set_lidar_vertical_fov(&mut self, lidar: NativeId, degrees: f64);
    fn lidar_vertical_fov(&self, lidar: NativeId) -> Option<f64>;
    fn set_lidar_range_min(&mut self, lidar: NativeId, meters: f64);
    fn lidar_range_min(&self, lidar: NativeId) -> Option<f64>;
    fn set_lidar_range_max(&mut self, lidar: NativeId, meters: f64);
    fn lidar_range_max(&self, lidar: NativeId) -> Option<f64>;
}
