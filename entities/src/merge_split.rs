use rigbridge_core::{synced_entity, EntityData, NativeBinding, NativeBridge, NativeError, NativeId};

use crate::backend::PhysicsBackend;

/// Speed thresholds deciding when resting shape contacts may merge into one
/// simulated island and when a merged island must split again.
#[derive(Clone, Debug)]
pub struct ContactThresholdsData {
    pub max_impact_speed: f64,
    pub max_relative_normal_speed: f64,
    pub max_relative_tangent_speed: f64,
    pub max_rolling_speed: f64,
}

impl Default for ContactThresholdsData {
    fn default() -> Self {
        Self {
            max_impact_speed: 0.01,
            max_relative_normal_speed: 0.01,
            max_relative_tangent_speed: 0.01,
            max_rolling_speed: 0.01,
        }
    }
}

impl EntityData for ContactThresholdsData {
    type Service = dyn PhysicsBackend;

    fn kind_name() -> &'static str {
        "ContactMergeSplitThresholds"
    }

    fn allocate_native(
        &self,
        bridge: &NativeBridge<dyn PhysicsBackend>,
    ) -> Result<NativeId, NativeError> {
        Ok(bridge.with_mut(|service| service.allocate_contact_thresholds()))
    }

    fn write_native(&self, binding: &NativeBinding<dyn PhysicsBackend>) {
        let id = binding.id();
        binding.bridge().with_mut(|service| {
            service.set_threshold_max_impact_speed(id, self.max_impact_speed);
            service.set_threshold_max_normal_speed(id, self.max_relative_normal_speed);
            service.set_threshold_max_tangent_speed(id, self.max_relative_tangent_speed);
            service.set_threshold_max_rolling_speed(id, self.max_rolling_speed);
        });
    }
}

synced_entity! {
    pub struct ContactMergeSplitThresholds(ContactThresholdsData);
    field max_impact_speed: f64 { set = set_threshold_max_impact_speed, get = threshold_max_impact_speed }
    field max_relative_normal_speed: f64 { set = set_threshold_max_normal_speed, get = threshold_max_normal_speed }
    field max_relative_tangent_speed: f64 { set = set_threshold_max_tangent_speed, get = threshold_max_tangent_speed }
    field max_rolling_speed: f64 { set = set_threshold_max_rolling_speed, get = threshold_max_rolling_speed }
}
