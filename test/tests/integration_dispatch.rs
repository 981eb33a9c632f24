//! The field-changed notification path end to end: the host's reflection
//! writes a stored field directly, then the dispatcher re-pushes it through
//! the routed setter so the live native picks it up.

use rigbridge_core::{DispatchConfig, DispatchOutcome, DispatchRegistry, NativeService};
use rigbridge_entities::backend::PhysicsBackend;
use rigbridge_entities::{register_dispatchers, Hinge, LidarSensor, RigidBody};
use rigbridge_test::TestRig;

fn init() -> DispatchRegistry {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut registry = DispatchRegistry::with_config(DispatchConfig {
        log_unhandled: true,
    });
    register_dispatchers(&mut registry);
    registry
}

#[test]
fn registration_is_once_per_type() {
    let mut registry = init();
    assert!(registry.is_initialized::<Hinge>());
    assert!(registry.is_initialized::<LidarSensor>());
    // Module init can run again (host reloads do that); it must be a no-op.
    register_dispatchers(&mut registry);
    assert!(registry.is_initialized::<Hinge>());
}

#[test]
fn top_level_field_edit_reaches_the_native() {
    let registry = init();
    let rig = TestRig::new();

    let mut hinge = Hinge::default();
    hinge.create_native(&rig.play).unwrap();

    // Reflection writes the stored field directly, bypassing the setter.
    hinge.data_mut().compliance = 3.5;
    assert_eq!(
        registry.trigger(&mut hinge, "compliance", "compliance"),
        DispatchOutcome::Handled
    );

    let id = hinge.native_address().unwrap();
    assert_eq!(
        rig.with_backend(|backend| backend.constraint_compliance(id)),
        Some(3.5)
    );
}

#[test]
fn nested_leaf_edit_resolves_to_the_leaf_handler() {
    let registry = init();
    let rig = TestRig::new();

    let mut hinge = Hinge::default();
    hinge.create_native(&rig.play).unwrap();

    hinge.data_mut().range.data_mut().min = -9.0;
    assert_eq!(
        registry.trigger(&mut hinge, "range", "min"),
        DispatchOutcome::Handled
    );
    assert_eq!(hinge.range_min(), -9.0);
}

#[test]
fn whole_struct_fallback_covers_unregistered_leaves() {
    let registry = init();
    let rig = TestRig::new();

    // LidarSensor registers only the whole-struct handler for `range`, so a
    // leaf notification resolves through the (outer, outer) fallback.
    let mut lidar = LidarSensor::default();
    lidar.create_native(&rig.play).unwrap();

    lidar.data_mut().range.min = 0.5;
    assert_eq!(
        registry.trigger(&mut lidar, "range", "min"),
        DispatchOutcome::Handled
    );

    let id = lidar.native_address().unwrap();
    rig.with_backend(|backend| {
        assert_eq!(backend.lidar_range_min(id), Some(0.5));
        // The whole-struct handler re-pushed the sibling leaf too.
        assert_eq!(backend.lidar_range_max(id), Some(120.0));
    });
}

#[test]
fn unknown_fields_are_not_handled() {
    let registry = init();

    let mut hinge = Hinge::default();
    assert_eq!(
        registry.trigger(&mut hinge, "unrelated", "foo"),
        DispatchOutcome::NotHandled
    );
}

#[test]
fn unregistered_types_are_not_handled() {
    let registry = init();

    struct NotAnEntity;
    let mut value = NotAnEntity;
    assert_eq!(
        registry.trigger(&mut value, "compliance", "compliance"),
        DispatchOutcome::NotHandled
    );
}

#[test]
fn single_name_registration_claims_any_inner_leaf() {
    let registry = init();
    let rig = TestRig::new();

    let mut body = RigidBody::default();
    body.create_native(&rig.play).unwrap();

    body.data_mut().mass = 42.0;
    // The host may report an inner name even for scalar fields; the
    // single-name registration covers it through the fallback.
    assert_eq!(
        registry.trigger(&mut body, "mass", "some_inner_detail"),
        DispatchOutcome::Handled
    );
    assert_eq!(body.mass(), 42.0);
}

#[test]
fn design_time_edits_dispatch_into_local_storage_only() {
    let registry = init();
    let rig = TestRig::new();

    let mut hinge = Hinge::default();
    hinge.data_mut().compliance = 2.0;
    assert_eq!(
        registry.trigger(&mut hinge, "compliance", "compliance"),
        DispatchOutcome::Handled
    );
    // Nothing live: the handler's setter wrote deferred storage.
    assert_eq!(hinge.compliance(), 2.0);
    assert_eq!(rig.allocations(), 0);
}
