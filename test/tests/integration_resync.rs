//! The template → instance → native walkthrough and the full-resync
//! invariant: immediately after native creation, every getter reads back the
//! value written before creation.

use rigbridge_core::{EntityError, NativeService};
use rigbridge_entities::backend::{MotionControl, PhysicsBackend};
use rigbridge_entities::{Hinge, HingeData, RigidBody, RigidBodyData, ShapeMaterial};
use rigbridge_test::{assert_detached, TestRig};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn template_instance_native_walkthrough() {
    init();
    let rig = TestRig::new();

    let mut hinge = Hinge::new(HingeData {
        compliance: 5.0,
        ..HingeData::default()
    });

    // Design time: value is served from local storage, nothing is live.
    assert_eq!(hinge.compliance(), 5.0);
    assert_detached!(hinge);
    assert!(hinge.is_template());
    assert!(!hinge.is_instance());

    // No play context: instance creation defers, and that is not an error.
    assert!(hinge.get_or_create_instance(&rig.editor).is_none());
    assert!(hinge.instance().is_none());

    // Play context: the instance is a clone of the template's values.
    {
        let instance = hinge
            .get_or_create_instance(&rig.play)
            .expect("play context must yield an instance");
        assert!(instance.is_instance());
        assert!(!instance.is_template());
        assert_eq!(instance.data().compliance, 5.0);
        assert!(!instance.has_native());
    }
    assert!(hinge.instance().is_some());

    // Native creation pushes a full resync; the engine now holds 5.0.
    hinge.create_native(&rig.play).unwrap();
    assert!(hinge.has_native());
    let id = hinge.native_address().unwrap();
    assert_eq!(
        rig.with_backend(|backend| backend.constraint_compliance(id)),
        Some(5.0)
    );
    assert_eq!(hinge.compliance(), 5.0);
}

#[test]
fn duality_holds_on_both_tiers() {
    init();
    let rig = TestRig::new();

    let mut body = RigidBody::default();
    assert_ne!(body.is_instance(), body.is_template());

    let instance = body.get_or_create_instance(&rig.play).unwrap();
    assert_ne!(instance.is_instance(), instance.is_template());
    assert!(instance.is_instance());
}

#[test]
fn create_native_resyncs_every_field() {
    init();
    let rig = TestRig::new();

    let mut body = RigidBody::new(RigidBodyData::default());
    body.set_mass(12.5);
    body.set_motion_control(MotionControl::Kinematic);
    body.set_linear_velocity_damping(0.25);
    body.set_angular_velocity_damping(0.5);

    body.create_native(&rig.play).unwrap();

    assert_eq!(body.mass(), 12.5);
    assert_eq!(body.motion_control(), MotionControl::Kinematic);
    assert_eq!(body.linear_velocity_damping(), 0.25);
    assert_eq!(body.angular_velocity_damping(), 0.5);

    // And the engine really holds them; the getters above read the native.
    let id = body.native_address().unwrap();
    rig.with_backend(|backend| {
        assert_eq!(backend.body_mass(id), Some(12.5));
        assert_eq!(backend.body_motion_control(id), Some(MotionControl::Kinematic));
    });
}

#[test]
fn create_native_on_template_without_play_context_is_a_usage_error() {
    init();
    let rig = TestRig::new();

    let mut material = ShapeMaterial::default();
    let result = material.create_native(&rig.editor);
    assert_eq!(
        result,
        Err(EntityError::NoPlayContext {
            entity: "ShapeMaterial"
        })
    );
    assert_detached!(material);
    assert_eq!(rig.allocations(), 0);

    // The host may recover by retrying once a play context exists.
    material.create_native(&rig.play).unwrap();
    assert!(material.has_native());
}

#[test]
fn get_or_create_native_is_idempotent() {
    init();
    let rig = TestRig::new();

    let mut material = ShapeMaterial::default();
    material.get_or_create_native(&rig.play).unwrap();
    let id = material.native_address().unwrap();
    let allocations = rig.allocations();

    material.get_or_create_native(&rig.play).unwrap();
    assert_eq!(material.native_address(), Some(id));
    assert_eq!(rig.allocations(), allocations);
}

#[test]
fn live_setters_write_native_and_local_mirror() {
    init();
    let rig = TestRig::new();

    let mut body = RigidBody::default();
    body.create_native(&rig.play).unwrap();
    body.set_mass(99.0);

    let id = body.native_address().unwrap();
    assert_eq!(rig.with_backend(|backend| backend.body_mass(id)), Some(99.0));
    // The instance's stored field mirrors the write; the template's does not.
    assert_eq!(body.instance().unwrap().data().mass, 99.0);
    assert_eq!(body.data().mass, 1.0);
}

#[test]
fn clear_instance_releases_the_native() {
    init();
    let rig = TestRig::new();

    let mut body = RigidBody::default();
    body.create_native(&rig.play).unwrap();
    let id = body.native_address().unwrap();

    assert!(body.clear_instance());
    assert!(body.instance().is_none());
    assert_detached!(body);
    assert!(!rig.with_backend(|backend| backend.has(id)));
    assert_eq!(rig.releases(), 1);
}

#[test]
fn release_native_keeps_the_instance() {
    init();
    let rig = TestRig::new();

    let mut body = RigidBody::default();
    body.create_native(&rig.play).unwrap();

    assert!(body.release_native());
    assert!(body.instance().is_some());
    assert_detached!(body);
    // A second release has nothing to do.
    assert!(!body.release_native());
}
