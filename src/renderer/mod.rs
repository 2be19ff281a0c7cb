//! Render-facing scene data
//!
//! Descriptors for materials, lights, cameras, geometry and the skybox,
//! together with the packed uniform layouts a renderer uploads.

pub mod geometry;
pub mod light;
pub mod material;
pub mod shadow;
pub mod skybox;
pub mod viewer;

pub use geometry::{Aabb, Primitive};
pub use light::{AmbientLight, DirectionalLight, Light, LightType, LightUniforms};
pub use material::{Material, MaterialHandle, MaterialUniform, DEFAULT_SHADER};
pub use shadow::{ShadowSettings, ShadowUniform};
pub use skybox::Skybox;
pub use viewer::{Camera, CameraUniform, Projection, Viewport};
