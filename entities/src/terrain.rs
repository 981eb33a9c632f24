use rigbridge_core::{synced_entity, EntityData, NativeBinding, NativeBridge, NativeError, NativeId};

use crate::backend::PhysicsBackend;

#[derive(Clone, Debug)]
pub struct TerrainData {
    /// How deep below the surface the solid occupancy extends, in meters.
    pub max_depth: f64,
    pub penetration_force_scaling: f64,
    pub deformation_enabled: bool,
}

impl Default for TerrainData {
    fn default() -> Self {
        Self {
            max_depth: 1.0,
            penetration_force_scaling: 1.0,
            deformation_enabled: true,
        }
    }
}

impl EntityData for TerrainData {
    type Service = dyn PhysicsBackend;

    fn kind_name() -> &'static str {
        "Terrain"
    }

    fn allocate_native(
        &self,
        bridge: &NativeBridge<dyn PhysicsBackend>,
    ) -> Result<NativeId, NativeError> {
        Ok(bridge.with_mut(|service| service.allocate_terrain()))
    }

    fn write_native(&self, binding: &NativeBinding<dyn PhysicsBackend>) {
        let id = binding.id();
        binding.bridge().with_mut(|service| {
            service.set_terrain_max_depth(id, self.max_depth);
            service.set_terrain_penetration_force_scaling(id, self.penetration_force_scaling);
            service.set_terrain_deformation_enabled(id, self.deformation_enabled);
        });
    }
}

synced_entity! {
    /// A deformable terrain patch.
    pub struct Terrain(TerrainData);
    field max_depth: f64 { set = set_terrain_max_depth, get = terrain_max_depth }
    field penetration_force_scaling: f64 { set = set_terrain_penetration_force_scaling, get = terrain_penetration_force_scaling }
    field deformation_enabled: bool { set = set_terrain_deformation_enabled, get = terrain_deformation_enabled }
}
