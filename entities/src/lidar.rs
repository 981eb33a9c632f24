use rigbridge_core::{synced_entity, EntityData, NativeBinding, NativeBridge, NativeError, NativeId};

use crate::backend::PhysicsBackend;

/// A min/max interval in meters. Plain nested data, not a sub-entity: it has
/// no engine sub-object of its own, its leaves live on the sensor's handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeInterval {
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Debug)]
pub struct LidarSensorData {
    pub frequency: f64,
    pub horizontal_fov: f64,
    pub vertical_fov: f64,
    pub range: RangeInterval,
}

impl Default for LidarSensorData {
    fn default() -> Self {
        Self {
            frequency: 10.0,
            horizontal_fov: 360.0,
            vertical_fov: 35.0,
            range: RangeInterval {
                min: 0.1,
                max: 120.0,
            },
        }
    }
}

impl EntityData for LidarSensorData {
    type Service = dyn PhysicsBackend;

    fn kind_name() -> &'static str {
        "LidarSensor"
    }

    fn allocate_native(
        &self,
        bridge: &NativeBridge<dyn PhysicsBackend>,
    ) -> Result<NativeId, NativeError> {
        Ok(bridge.with_mut(|service| service.allocate_lidar()))
    }

    fn write_native(&self, binding: &NativeBinding<dyn PhysicsBackend>) {
        let id = binding.id();
        binding.bridge().with_mut(|service| {
            service.set_lidar_frequency(id, self.frequency);
            service.set_lidar_horizontal_fov(id, self.horizontal_fov);
            service.set_lidar_vertical_fov(id, self.vertical_fov);
            service.set_lidar_range_min(id, self.range.min);
            service.set_lidar_range_max(id, self.range.max);
        });
    }
}

synced_entity! {
    /// A scanning lidar sensor simulated by the engine's raytracing side.
    pub struct LidarSensor(LidarSensorData);
    field frequency: f64 { set = set_lidar_frequency, get = lidar_frequency }
    field horizontal_fov: f64 { set = set_lidar_horizontal_fov, get = lidar_horizontal_fov }
    field vertical_fov: f64 { set = set_lidar_vertical_fov, get = lidar_vertical_fov }
    group range {
        field min: f64 { set = set_lidar_range_min, get = lidar_range_min }
        field max: f64 { set = set_lidar_range_max, get = lidar_range_max }
    }
}
