//! Per-scene light bookkeeping.

use tracing::debug;

use crate::ecs::components::LightComponent;
use crate::renderer::light::{AmbientLight, Light, LightUniforms};

/// Directional lights packed into one [`SceneLightUniforms`] block.
pub const MAX_DIRECTIONAL_LIGHTS: usize = 4;

/// Owns a scene's ambient light and the list of registered light entities.
///
/// Created by the scene's base initialization; it does not exist before that.
#[derive(Debug, Clone, Default)]
pub struct LightManager {
    ambient: AmbientLight,
    lights: Vec<hecs::Entity>,
}

impl LightManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ambient(&self) -> &AmbientLight {
        &self.ambient
    }

    pub fn set_ambient_color(&mut self, r: f32, g: f32, b: f32) {
        self.ambient.color = [r, g, b];
    }

    pub fn set_ambient_intensity(&mut self, intensity: f32) {
        self.ambient.intensity = intensity.max(0.0);
    }

    /// Register a light entity. Registering twice is a no-op.
    pub fn register(&mut self, entity: hecs::Entity) -> bool {
        if self.lights.contains(&entity) {
            return false;
        }
        debug!("registered light {:?}", entity);
        self.lights.push(entity);
        true
    }

    pub fn unregister(&mut self, entity: hecs::Entity) -> bool {
        let before = self.lights.len();
        self.lights.retain(|&e| e != entity);
        self.lights.len() != before
    }

    /// Registered light entities in registration order.
    pub fn lights(&self) -> &[hecs::Entity] {
        &self.lights
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Pack the ambient term and the first [`MAX_DIRECTIONAL_LIGHTS`] lights
    /// still alive in `world`.
    pub fn uniforms(&self, world: &hecs::World) -> SceneLightUniforms {
        let mut out = SceneLightUniforms {
            ambient: self.ambient.uniforms().color_intensity,
            ..Default::default()
        };

        let mut count = 0;
        for &entity in &self.lights {
            if count == MAX_DIRECTIONAL_LIGHTS {
                break;
            }
            if let Ok(light) = world.get::<&LightComponent>(entity) {
                out.directional[count] = light.0.uniforms();
                count += 1;
            }
        }
        out.counts[0] = count as u32;
        out
    }
}

/// Scene lighting block for GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneLightUniforms {
    /// Ambient color and intensity (rgb = color, a = intensity).
    pub ambient: [f32; 4],
    /// Directional lights; only the first `counts[0]` are valid.
    pub directional: [LightUniforms; MAX_DIRECTIONAL_LIGHTS],
    /// Directional light count, rest unused.
    pub counts: [u32; 4],
}
