//! Level building helpers shared by the scenes.

use glam::Vec3;
use scenery::{GameObject, Material, MaterialHandle, DEFAULT_SHADER};

/// Matte material used for all level geometry.
pub fn create_level_material(r: u8, g: u8, b: u8) -> MaterialHandle {
    let mut mat = Material::new();
    mat.set_shader(DEFAULT_SHADER);
    mat.set_diffuse_color(r, g, b);
    mat.set_specular_color(200, 200, 200);
    mat.set_shininess(16.0);
    mat.set_metallic(0.0);
    mat.set_roughness(0.7);
    mat.set_ao(1.0);
    mat.set_opacity(1.0);
    MaterialHandle::new(mat)
}

/// White, moderately glossy material of the sandbox cube.
pub fn create_sandbox_material() -> MaterialHandle {
    let mut mat = Material::new();
    mat.set_shader(DEFAULT_SHADER);
    mat.set_diffuse_color(255, 255, 255);
    mat.set_specular_color(255, 255, 255);
    mat.set_shininess(32.0);
    mat.set_metallic(0.0);
    mat.set_roughness(0.5);
    mat.set_ao(1.0);
    mat.set_opacity(1.0);
    MaterialHandle::new(mat)
}

/// Unit cube placed at `position`, stretched by `scale`, sharing `material`.
pub fn create_level_cube(
    position: Vec3,
    scale: Vec3,
    material: &MaterialHandle,
    name: &str,
) -> GameObject {
    let mut cube = GameObject::create_cube(Vec3::ZERO);
    cube.set_tag(name);

    if let Some(transform) = cube.transform_mut() {
        transform.set_position(position);
        transform.set_scale(scale);
    }

    if let Some(mat) = cube.material_mut() {
        mat.set_material(material.clone());
    }

    cube
}
