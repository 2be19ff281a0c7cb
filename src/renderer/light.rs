//! Light types
//!
//! Ambient and directional lights as consumed by a scene's light manager.

use glam::{Mat4, Vec3};

use super::shadow::{ShadowSettings, ShadowUniform};

/// Light type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    Ambient,
    Directional,
}

/// Light uniform data for GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniforms {
    /// Light direction (w = 0 for directional).
    pub direction: [f32; 4],
    /// Light color and intensity (rgb = color, a = intensity).
    pub color_intensity: [f32; 4],
    /// Shadow parameters (cast flag, bias, normal bias, light size).
    pub shadow_params: [f32; 4],
}

/// Trait for light sources.
pub trait Light {
    /// Get the light type.
    fn light_type(&self) -> LightType;

    /// Get the light uniforms for GPU.
    fn uniforms(&self) -> LightUniforms;
}

/// Ambient light that illuminates all surfaces equally.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientLight {
    /// Light intensity.
    pub intensity: f32,
    /// Light color (RGB).
    pub color: [f32; 3],
}

impl AmbientLight {
    /// Create a new ambient light.
    pub fn new(intensity: f32, color: [f32; 3]) -> Self {
        Self { intensity, color }
    }

    /// Create a white ambient light.
    pub fn white(intensity: f32) -> Self {
        Self::new(intensity, [1.0, 1.0, 1.0])
    }
}

impl Light for AmbientLight {
    fn light_type(&self) -> LightType {
        LightType::Ambient
    }

    fn uniforms(&self) -> LightUniforms {
        LightUniforms {
            direction: [0.0; 4],
            color_intensity: [self.color[0], self.color[1], self.color[2], self.intensity],
            shadow_params: [0.0; 4],
        }
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self::white(0.3)
    }
}

/// Directional light that illuminates from a direction, like the sun.
///
/// The direction is kept exactly as authored. It is normalized when packed
/// into [`LightUniforms`] or when building the shadow matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    /// Light intensity (0.0 - 1.0+).
    pub intensity: f32,
    /// Light color (RGB).
    pub color: [f32; 3],
    /// Direction the light travels in.
    pub direction: Vec3,
    /// Shadow map parameters.
    pub shadow: ShadowSettings,
}

impl DirectionalLight {
    /// Create a new directional light without shadows.
    pub fn new(intensity: f32, color: [f32; 3], direction: Vec3) -> Self {
        Self {
            intensity,
            color,
            direction,
            shadow: ShadowSettings::default(),
        }
    }

    /// Create a white directional light.
    pub fn white(intensity: f32, direction: Vec3) -> Self {
        Self::new(intensity, [1.0, 1.0, 1.0], direction)
    }

    /// Replace the shadow settings.
    pub fn with_shadow(mut self, shadow: ShadowSettings) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn casts_shadows(&self) -> bool {
        self.shadow.cast_shadows
    }

    /// Light space matrix centered on `focus`.
    pub fn shadow_matrix(&self, focus: Vec3) -> Mat4 {
        self.shadow.light_matrix(self.direction, focus)
    }

    /// Shadow uniform centered on `focus`, or `None` if the light casts no shadows.
    pub fn shadow_uniform(&self, focus: Vec3) -> Option<ShadowUniform> {
        if !self.shadow.cast_shadows {
            return None;
        }
        Some(ShadowUniform {
            light_matrix: self.shadow_matrix(focus).to_cols_array_2d(),
            bias: self.shadow.bias,
            normal_bias: self.shadow.normal_bias,
            light_size: self.shadow.light_size,
            _padding: 0.0,
        })
    }
}

impl Light for DirectionalLight {
    fn light_type(&self) -> LightType {
        LightType::Directional
    }

    fn uniforms(&self) -> LightUniforms {
        let dir = self.direction.normalize_or_zero();
        let shadow = &self.shadow;
        LightUniforms {
            direction: [dir.x, dir.y, dir.z, 0.0],
            color_intensity: [self.color[0], self.color[1], self.color[2], self.intensity],
            shadow_params: [
                if shadow.cast_shadows { 1.0 } else { 0.0 },
                shadow.bias,
                shadow.normal_bias,
                shadow.light_size,
            ],
        }
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::white(1.0, Vec3::new(-0.3, -1.0, -0.5))
    }
}
