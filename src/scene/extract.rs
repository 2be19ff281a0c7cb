//! Frame extraction
//!
//! Flattens a scene into plain data for an external renderer.

use glam::Mat4;

use crate::renderer::geometry::{Aabb, Primitive};
use crate::renderer::material::{MaterialHandle, MaterialUniform};
use crate::renderer::shadow::ShadowUniform;
use crate::renderer::skybox::Skybox;
use crate::renderer::viewer::CameraUniform;

use super::light_manager::SceneLightUniforms;

/// Model uniform data for GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
}

impl ModelUniform {
    /// Pack `model` with its normal matrix. A singular model (zero scale on
    /// some axis) gets an identity normal matrix.
    pub fn from_matrix(model: Mat4) -> Self {
        let normal_matrix = if model.determinant() != 0.0 {
            model.inverse().transpose()
        } else {
            Mat4::IDENTITY
        };
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: normal_matrix.to_cols_array_2d(),
        }
    }
}

/// One visible mesh.
#[derive(Debug, Clone)]
pub struct DrawItem {
    pub entity: hecs::Entity,
    pub tag: String,
    pub primitive: Primitive,
    /// `None` when the object has no material component; the renderer
    /// substitutes its default material.
    pub material: Option<MaterialHandle>,
    pub material_uniform: MaterialUniform,
    pub model: ModelUniform,
    pub world_bounds: Aabb,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl DrawItem {
    pub fn is_transparent(&self) -> bool {
        self.material_uniform.diffuse_opacity[3] < 1.0
    }
}

/// Everything a renderer needs to draw one frame of a scene.
#[derive(Debug, Clone, Default)]
pub struct FrameExtract {
    /// Visible meshes in scene insertion order.
    pub draws: Vec<DrawItem>,
    /// `None` before the scene's base initialization.
    pub lights: Option<SceneLightUniforms>,
    /// Shadow of the first shadow-casting light, centered on the scene bounds.
    pub shadow: Option<ShadowUniform>,
    pub camera: Option<CameraUniform>,
    pub skybox: Option<Skybox>,
}

impl FrameExtract {
    pub fn opaque(&self) -> impl Iterator<Item = &DrawItem> {
        self.draws.iter().filter(|d| !d.is_transparent())
    }

    pub fn transparent(&self) -> impl Iterator<Item = &DrawItem> {
        self.draws.iter().filter(|d| d.is_transparent())
    }

    pub fn shadow_casters(&self) -> impl Iterator<Item = &DrawItem> {
        self.draws.iter().filter(|d| d.cast_shadow)
    }

    /// Union of all draw bounds, `None` when nothing is drawn.
    pub fn bounds(&self) -> Option<Aabb> {
        self.draws
            .iter()
            .map(|d| d.world_bounds)
            .reduce(|a, b| a.merge(&b))
    }
}
