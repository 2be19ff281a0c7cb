//! Rendering components for ECS entities.

use crate::renderer::geometry::Primitive;
use crate::renderer::light::DirectionalLight;
use crate::renderer::material::MaterialHandle;
use crate::renderer::viewer::Camera;

/// Object name used for lookups. Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(pub String);

/// Mesh component: which primitive to draw and how it takes part in shadows.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshComponent {
    pub primitive: Primitive,
    pub visible: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl MeshComponent {
    pub fn new(primitive: Primitive) -> Self {
        Self {
            primitive,
            visible: true,
            cast_shadow: true,
            receive_shadow: true,
        }
    }
}

/// Material component. Several components may share one material.
#[derive(Debug, Clone)]
pub struct MaterialComponent {
    pub material: MaterialHandle,
}

impl MaterialComponent {
    pub fn new(material: MaterialHandle) -> Self {
        Self { material }
    }

    pub fn set_material(&mut self, material: MaterialHandle) {
        self.material = material;
    }
}

/// Directional light attached to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct LightComponent(pub DirectionalLight);

/// Camera component.
#[derive(Debug, Clone)]
pub struct CameraComponent {
    pub camera: Camera,
    pub active: bool,
}
