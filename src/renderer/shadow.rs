//! Shadow parameters for directional lights
//!
//! The shadow pass itself belongs to the renderer; this module only describes
//! the light-space frustum and the filtering parameters.

use glam::{Mat4, Vec3};

/// Shadow configuration carried by a directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    /// Whether the light renders a shadow map at all.
    pub cast_shadows: bool,
    /// Depth bias to prevent shadow acne.
    pub bias: f32,
    /// Normal offset bias.
    pub normal_bias: f32,
    /// Apparent light source size, drives penumbra width.
    pub light_size: f32,
    /// Width and height of the orthographic shadow frustum.
    pub frustum_size: f32,
    /// Distance from the focus point back to the shadow camera.
    pub distance: f32,
    /// Near clipping plane of the shadow frustum.
    pub near_plane: f32,
    /// Far clipping plane of the shadow frustum.
    pub far_plane: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            cast_shadows: false,
            bias: 0.005,
            normal_bias: 0.02,
            light_size: 1.0,
            frustum_size: 20.0,
            distance: 30.0,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}

impl ShadowSettings {
    /// Light space matrix (projection * view) for a light shining along
    /// `direction` onto `focus`.
    pub fn light_matrix(&self, direction: Vec3, focus: Vec3) -> Mat4 {
        let light_dir = direction.normalize_or_zero();
        let light_dir = if light_dir == Vec3::ZERO {
            Vec3::NEG_Y
        } else {
            light_dir
        };

        // look_at degenerates when the view direction is parallel to up
        let up = if light_dir.dot(Vec3::Y).abs() > 0.99 {
            Vec3::Z
        } else {
            Vec3::Y
        };

        let eye = focus - light_dir * self.distance;
        let light_view = Mat4::look_at_rh(eye, focus, up);

        let half = self.frustum_size * 0.5;
        let light_proj =
            Mat4::orthographic_rh(-half, half, -half, half, self.near_plane, self.far_plane);

        light_proj * light_view
    }
}

/// Shadow uniform data for GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShadowUniform {
    /// Light space matrix (world to light clip space).
    pub light_matrix: [[f32; 4]; 4],
    /// Shadow bias.
    pub bias: f32,
    /// Normal offset bias.
    pub normal_bias: f32,
    /// Light source size.
    pub light_size: f32,
    /// Padding.
    pub _padding: f32,
}
