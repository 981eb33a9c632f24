use rigbridge_core::{synced_entity, EntityData, NativeBinding, NativeBridge, NativeError, NativeId};

use crate::backend::PhysicsBackend;

/// Bulk and surface parameters of a shape material.
#[derive(Clone, Debug)]
pub struct ShapeMaterialData {
    pub density: f64,
    pub young_modulus: f64,
    pub roughness: f64,
    pub surface_viscosity: f64,
}

impl Default for ShapeMaterialData {
    fn default() -> Self {
        Self {
            density: 1000.0,
            young_modulus: 2.0e9,
            roughness: 0.417,
            surface_viscosity: 5.0e-9,
        }
    }
}

impl EntityData for ShapeMaterialData {
    type Service = dyn PhysicsBackend;

    fn kind_name() -> &'static str {
        "ShapeMaterial"
    }

    fn allocate_native(
        &self,
        bridge: &NativeBridge<dyn PhysicsBackend>,
    ) -> Result<NativeId, NativeError> {
        Ok(bridge.with_mut(|service| service.allocate_shape_material()))
    }

    fn write_native(&self, binding: &NativeBinding<dyn PhysicsBackend>) {
        let id = binding.id();
        binding.bridge().with_mut(|service| {
            service.set_material_density(id, self.density);
            service.set_material_young_modulus(id, self.young_modulus);
            service.set_material_roughness(id, self.roughness);
            service.set_material_surface_viscosity(id, self.surface_viscosity);
        });
    }
}

synced_entity! {
    pub struct ShapeMaterial(ShapeMaterialData);
    field density: f64 { set = set_material_density, get = material_density }
    field young_modulus: f64 { set = set_material_young_modulus, get = material_young_modulus }
    field roughness: f64 { set = set_material_roughness, get = material_roughness }
    field surface_viscosity: f64 { set = set_material_surface_viscosity, get = material_surface_viscosity }
}
