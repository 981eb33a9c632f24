//! Property tests: for all field values, creation resyncs them exactly, and
//! a transfer round-trip preserves both the address and the native state.

use proptest::prelude::*;

use rigbridge_core::NativeTransferRecord;
use rigbridge_entities::{RigidBody, RigidBodyData, ShapeMaterial, ShapeMaterialData};
use rigbridge_test::TestRig;

proptest! {
    #[test]
    fn create_native_resyncs_arbitrary_values(
        mass in 1.0e-3..1.0e6f64,
        linear in 0.0..1.0e3f64,
        angular in 0.0..1.0e3f64,
    ) {
        let rig = TestRig::new();
        let mut body = RigidBody::new(RigidBodyData {
            mass,
            linear_velocity_damping: linear,
            angular_velocity_damping: angular,
            ..RigidBodyData::default()
        });

        body.create_native(&rig.play).unwrap();

        prop_assert_eq!(body.mass(), mass);
        prop_assert_eq!(body.linear_velocity_damping(), linear);
        prop_assert_eq!(body.angular_velocity_damping(), angular);
    }

    #[test]
    fn transfer_round_trip_preserves_address_and_state(
        density in 1.0..2.0e4f64,
        roughness in 0.0..1.0f64,
    ) {
        let rig = TestRig::new();
        let mut material = ShapeMaterial::new(ShapeMaterialData {
            density,
            roughness,
            ..ShapeMaterialData::default()
        });
        material.create_native(&rig.play).unwrap();
        let id = material.native_address().unwrap();
        let allocations = rig.allocations();

        let record = NativeTransferRecord::capture(&mut material, &rig.play).unwrap();
        drop(material);

        let mut replacement = ShapeMaterial::default();
        record.apply_to(&mut replacement).unwrap();

        prop_assert_eq!(replacement.native_address(), Some(id));
        prop_assert_eq!(rig.allocations(), allocations);
        prop_assert_eq!(replacement.density(), density);
        prop_assert_eq!(replacement.roughness(), roughness);
    }

    #[test]
    fn deferred_writes_survive_instance_creation(value in -1.0e6..1.0e6f64) {
        let rig = TestRig::new();
        let mut material = ShapeMaterial::default();

        // Written while detached, served from storage.
        material.set_young_modulus(value);
        prop_assert_eq!(material.young_modulus(), value);

        // Still intact after the clone into the instance and the resync.
        material.create_native(&rig.play).unwrap();
        prop_assert_eq!(material.young_modulus(), value);
    }
}
