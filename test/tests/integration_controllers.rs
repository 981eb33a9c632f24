//! Controller sub-entity composition: the two-phase init (parent native
//! first, then controller handles fetched from it) and its repetition on
//! adoption and wholesale recreation.

use rigbridge_core::{NativeService, NativeTransferRecord};
use rigbridge_entities::backend::{ControllerKind, PhysicsBackend};
use rigbridge_entities::{Hinge, HingeData, Prismatic, Wire};
use rigbridge_test::TestRig;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn create_binds_controllers_and_pushes_their_values() {
    init();
    let rig = TestRig::new();

    let mut hinge = Hinge::default();
    hinge.set_range_min(-1.0);
    hinge.set_range_max(2.0);
    hinge.set_range_enabled(true);
    hinge.set_motor_voltage(48.0);

    // Detached: the writes went to local storage only.
    assert_eq!(rig.allocations(), 0);
    assert_eq!(hinge.range_min(), -1.0);

    hinge.create_native(&rig.play).unwrap();

    // Phase two bound each controller to a sub-object of the parent handle.
    let parent = hinge.native_address().unwrap();
    let range = rig
        .with_backend(|backend| backend.controller(parent, ControllerKind::Range))
        .expect("range controller must exist on the parent");
    rig.with_backend(|backend| {
        assert_eq!(backend.range_min(range), Some(-1.0));
        assert_eq!(backend.range_max(range), Some(2.0));
        assert_eq!(backend.controller_enabled(range), Some(true));
    });
    assert_eq!(hinge.range_min(), -1.0);
    assert_eq!(hinge.motor_voltage(), 48.0);
}

#[test]
fn live_controller_edits_reach_the_sub_native() {
    init();
    let rig = TestRig::new();

    let mut prismatic = Prismatic::default();
    prismatic.create_native(&rig.play).unwrap();

    prismatic.set_speed_target(0.75);
    prismatic.set_friction_coefficient(0.2);

    let parent = prismatic.native_address().unwrap();
    rig.with_backend(|backend| {
        let speed = backend
            .controller(parent, ControllerKind::TargetSpeed)
            .unwrap();
        let friction = backend.controller(parent, ControllerKind::Friction).unwrap();
        assert_eq!(backend.target_speed(speed), Some(0.75));
        assert_eq!(backend.friction_coefficient(friction), Some(0.2));
    });
}

#[test]
fn adoption_rebinds_controllers_without_pushing_values() {
    init();
    let rig = TestRig::new();

    let mut hinge = Hinge::default();
    hinge.create_native(&rig.play).unwrap();
    hinge.set_range_min(9.0);
    hinge.set_lock_position(0.5);

    let record = NativeTransferRecord::capture(&mut hinge, &rig.play).unwrap();
    drop(hinge);

    // The replacement's stored values differ from the live native state.
    let mut replacement = Hinge::new(HingeData::default());
    record.apply_to(&mut replacement).unwrap();

    // Controllers were re-fetched (the getters reach the sub-natives), and
    // the surviving native values were NOT overwritten by the replacement's
    // stored defaults.
    assert_eq!(replacement.range_min(), 9.0);
    assert_eq!(replacement.lock_position(), 0.5);

    let parent = replacement.native_address().unwrap();
    let range = rig
        .with_backend(|backend| backend.controller(parent, ControllerKind::Range))
        .unwrap();
    assert_eq!(rig.with_backend(|backend| backend.range_min(range)), Some(9.0));
}

#[test]
fn edits_after_adoption_reach_the_rebound_controllers() {
    init();
    let rig = TestRig::new();

    let mut hinge = Hinge::default();
    hinge.create_native(&rig.play).unwrap();
    let record = NativeTransferRecord::capture(&mut hinge, &rig.play).unwrap();
    drop(hinge);

    let mut replacement = Hinge::default();
    record.apply_to(&mut replacement).unwrap();

    replacement.set_motor_voltage(12.0);
    let parent = replacement.native_address().unwrap();
    let motor = rig
        .with_backend(|backend| backend.controller(parent, ControllerKind::ElectricMotor))
        .unwrap();
    assert_eq!(
        rig.with_backend(|backend| backend.motor_voltage(motor)),
        Some(12.0)
    );
}

#[test]
fn wholesale_recreation_replaces_the_native_and_keeps_values() {
    init();
    let rig = TestRig::new();

    let mut wire = Wire::default();
    wire.create_native(&rig.play).unwrap();
    wire.set_radius(0.5);
    let first = wire.native_address().unwrap();

    // A routing edit forces the engine to rebuild the wire wholesale.
    wire.reroute(&rig.play).unwrap();
    let second = wire.native_address().unwrap();

    assert_ne!(first, second);
    assert!(!rig.with_backend(|backend| backend.has(first)));
    assert_eq!(rig.releases(), 1);
    // The stored mirror kept every live edit, so the rebuild resynced it.
    assert_eq!(wire.radius(), 0.5);
    assert_eq!(
        rig.with_backend(|backend| backend.wire_radius(second)),
        Some(0.5)
    );
}

#[test]
fn controllers_detach_with_their_parent() {
    init();
    let rig = TestRig::new();

    let mut hinge = Hinge::default();
    hinge.create_native(&rig.play).unwrap();
    hinge.release_native();

    // Controller getters fall back to stored values once detached.
    assert_eq!(hinge.range_min(), f64::NEG_INFINITY);
    let instance = hinge.instance().unwrap();
    assert!(!instance.data().range.has_native());
    assert!(!instance.data().motor.has_native());
}
