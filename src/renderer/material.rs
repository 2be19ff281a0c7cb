//! Material descriptor
//!
//! A plain bundle of shading parameters. The renderer resolves the shader
//! path through its own asset pipeline; this crate only carries the values.

use std::sync::Arc;

use tracing::warn;

/// Shader used when a material does not name one.
pub const DEFAULT_SHADER: &str = "assets/shaders/default_shader.hlsl";

/// Surface description consumed by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    shader: String,
    diffuse_color: [f32; 3],
    specular_color: [f32; 3],
    shininess: f32,
    metallic: f32,
    roughness: f32,
    ao: f32,
    opacity: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            shader: DEFAULT_SHADER.to_string(),
            diffuse_color: [1.0, 1.0, 1.0],
            specular_color: [1.0, 1.0, 1.0],
            shininess: 32.0,
            metallic: 0.0,
            roughness: 0.5,
            ao: 1.0,
            opacity: 1.0,
        }
    }
}

impl Material {
    /// Create a material with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shader(&self) -> &str {
        &self.shader
    }

    /// Diffuse color, linear RGB in `[0, 1]`.
    pub fn diffuse_color(&self) -> [f32; 3] {
        self.diffuse_color
    }

    /// Specular color, linear RGB in `[0, 1]`.
    pub fn specular_color(&self) -> [f32; 3] {
        self.specular_color
    }

    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    pub fn metallic(&self) -> f32 {
        self.metallic
    }

    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    pub fn ao(&self) -> f32 {
        self.ao
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the shader asset path.
    pub fn set_shader(&mut self, path: impl Into<String>) {
        self.shader = path.into();
    }

    /// Set the diffuse color from 8-bit channels.
    pub fn set_diffuse_color(&mut self, r: u8, g: u8, b: u8) {
        self.diffuse_color = rgb8_to_linear(r, g, b);
    }

    /// Set the specular color from 8-bit channels.
    pub fn set_specular_color(&mut self, r: u8, g: u8, b: u8) {
        self.specular_color = rgb8_to_linear(r, g, b);
    }

    /// Set the specular exponent. Negative values are clamped to zero.
    pub fn set_shininess(&mut self, shininess: f32) {
        self.shininess = shininess.max(0.0);
    }

    pub fn set_metallic(&mut self, metallic: f32) {
        self.metallic = clamp_unit("metallic", metallic);
    }

    pub fn set_roughness(&mut self, roughness: f32) {
        self.roughness = clamp_unit("roughness", roughness);
    }

    pub fn set_ao(&mut self, ao: f32) {
        self.ao = clamp_unit("ao", ao);
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = clamp_unit("opacity", opacity);
    }

    /// Whether the renderer must blend this material.
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }

    /// Pack the parameters for upload.
    pub fn uniform(&self) -> MaterialUniform {
        let [dr, dg, db] = self.diffuse_color;
        let [sr, sg, sb] = self.specular_color;
        MaterialUniform {
            diffuse_opacity: [dr, dg, db, self.opacity],
            specular_shininess: [sr, sg, sb, self.shininess],
            metallic: self.metallic,
            roughness: self.roughness,
            ao: self.ao,
            _padding: 0.0,
        }
    }
}

fn rgb8_to_linear(r: u8, g: u8, b: u8) -> [f32; 3] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

fn clamp_unit(name: &str, value: f32) -> f32 {
    if (0.0..=1.0).contains(&value) {
        value
    } else {
        warn!("material {} {} outside [0, 1], clamping", name, value);
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        }
    }
}

/// Shared material handle. Cloning shares the same instance.
#[derive(Debug, Clone)]
pub struct MaterialHandle(pub Arc<Material>);

impl MaterialHandle {
    pub fn new(material: Material) -> Self {
        Self(Arc::new(material))
    }

    /// Whether both handles point at the same material instance.
    pub fn ptr_eq(&self, other: &MaterialHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to this material.
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl std::ops::Deref for MaterialHandle {
    type Target = Material;

    fn deref(&self) -> &Material {
        &self.0
    }
}

impl From<Material> for MaterialHandle {
    fn from(material: Material) -> Self {
        Self::new(material)
    }
}

/// Material uniform data for GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    /// Diffuse RGB + opacity.
    pub diffuse_opacity: [f32; 4],
    /// Specular RGB + shininess.
    pub specular_shininess: [f32; 4],
    /// Metallic factor.
    pub metallic: f32,
    /// Roughness factor.
    pub roughness: f32,
    /// Ambient occlusion factor.
    pub ao: f32,
    /// Padding.
    pub _padding: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let mat = Material::default();
        assert_eq!(mat.shader(), DEFAULT_SHADER);
        assert_eq!(mat.diffuse_color(), [1.0, 1.0, 1.0]);
        assert_eq!(mat.roughness(), 0.5);
        assert!(!mat.is_transparent());
    }

    #[test]
    fn test_rgb8_colors() {
        let mut mat = Material::new();
        mat.set_diffuse_color(255, 0, 51);
        assert_eq!(mat.diffuse_color(), [1.0, 0.0, 0.2]);
        mat.set_specular_color(0, 0, 0);
        assert_eq!(mat.specular_color(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unit_parameters_are_clamped() {
        let mut mat = Material::new();
        mat.set_opacity(1.5);
        mat.set_roughness(-0.2);
        mat.set_metallic(f32::NAN);
        mat.set_ao(0.25);
        assert_eq!(mat.opacity(), 1.0);
        assert_eq!(mat.roughness(), 0.0);
        assert_eq!(mat.metallic(), 0.0);
        assert_eq!(mat.ao(), 0.25);
    }

    #[test]
    fn test_handle_sharing() {
        let a = MaterialHandle::new(Material::new());
        let b = a.clone();
        let c = MaterialHandle::new(Material::new());
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert_eq!(a.share_count(), 2);
    }

    #[test]
    fn test_uniform_packing() {
        let mut mat = Material::new();
        mat.set_opacity(0.5);
        mat.set_shininess(16.0);
        let uniform = mat.uniform();
        assert_eq!(uniform.diffuse_opacity[3], 0.5);
        assert_eq!(uniform.specular_shininess[3], 16.0);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 48);
    }
}
