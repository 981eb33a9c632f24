//! # Rigbridge Entities
//! The concrete entity types the plugin exposes to the host, each a thin
//! data shape plugged into the generic synchronization pattern of
//! `rigbridge-core`, plus [`backend::PhysicsBackend`] — the typed surface of
//! the opaque external engine they all talk to.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod backend;

mod constraint;
mod lidar;
mod material;
mod merge_split;
mod rigid_body;
mod terrain;
mod wire;

pub use constraint::controller::{
    ElectricMotorControllerData, FrictionControllerData, LockControllerData, RangeControllerData,
    TargetSpeedControllerData,
};
pub use constraint::{Hinge, HingeData, Prismatic, PrismaticData};
pub use lidar::{LidarSensor, LidarSensorData, RangeInterval};
pub use material::{ShapeMaterial, ShapeMaterialData};
pub use merge_split::{ContactMergeSplitThresholds, ContactThresholdsData};
pub use rigid_body::{RigidBody, RigidBodyData};
pub use terrain::{Terrain, TerrainData};
pub use wire::{Wire, WireData};

use rigbridge_core::DispatchRegistry;

/// Registers the field-change handlers of every entity type in this crate.
/// Idempotent; the host integration calls it once at plugin startup.
pub fn register_dispatchers(registry: &mut DispatchRegistry) {
    RigidBody::register_dispatch(registry);
    ShapeMaterial::register_dispatch(registry);
    Hinge::register_dispatch(registry);
    Prismatic::register_dispatch(registry);
    Wire::register_dispatch(registry);
    Terrain::register_dispatch(registry);
    ContactMergeSplitThresholds::register_dispatch(registry);
    LidarSensor::register_dispatch(registry);
}
