//! Game objects
//!
//! A [`GameObject`] is a plain aggregate of components keyed by
//! [`ComponentKind`]. Objects are assembled and edited freely, then moved into
//! a [`Scene`](super::Scene), which spawns them into its `hecs::World`.

use std::collections::BTreeMap;

use glam::Vec3;

use crate::ecs::components::{
    GlobalTransform, LightComponent, MaterialComponent, MeshComponent, Tag, Transform,
};
use crate::renderer::geometry::Primitive;
use crate::renderer::light::DirectionalLight;
use crate::renderer::material::{Material, MaterialHandle};

/// The kinds of component a game object can carry, at most one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentKind {
    Transform,
    Mesh,
    Material,
    Light,
}

/// A component instance, tagged by its kind.
#[derive(Debug, Clone)]
pub enum Component {
    Transform(Transform),
    Mesh(MeshComponent),
    Material(MaterialComponent),
    Light(LightComponent),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Transform(_) => ComponentKind::Transform,
            Component::Mesh(_) => ComponentKind::Mesh,
            Component::Material(_) => ComponentKind::Material,
            Component::Light(_) => ComponentKind::Light,
        }
    }
}

impl From<Transform> for Component {
    fn from(c: Transform) -> Self {
        Component::Transform(c)
    }
}

impl From<MeshComponent> for Component {
    fn from(c: MeshComponent) -> Self {
        Component::Mesh(c)
    }
}

impl From<MaterialComponent> for Component {
    fn from(c: MaterialComponent) -> Self {
        Component::Material(c)
    }
}

impl From<LightComponent> for Component {
    fn from(c: LightComponent) -> Self {
        Component::Light(c)
    }
}

/// An entity under construction: a tag plus a set of components.
#[derive(Debug, Clone, Default)]
pub struct GameObject {
    tag: String,
    components: BTreeMap<ComponentKind, Component>,
}

impl GameObject {
    /// Create an empty object.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            components: BTreeMap::new(),
        }
    }

    /// Unit cube at `position` with a default material.
    pub fn create_cube(position: Vec3) -> Self {
        let mut cube = Self::new("Cube");
        cube.add_component(Transform::from_position(position));
        cube.add_component(MeshComponent::new(Primitive::unit_cube()));
        cube.add_component(MaterialComponent::new(MaterialHandle::new(Material::default())));
        cube
    }

    /// Object carrying a directional light.
    pub fn directional_light(tag: impl Into<String>, light: DirectionalLight) -> Self {
        let mut obj = Self::new(tag);
        obj.add_component(Transform::identity());
        obj.add_component(LightComponent(light));
        obj
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Attach a component, replacing any existing one of the same kind.
    pub fn add_component(&mut self, component: impl Into<Component>) -> Option<Component> {
        let component = component.into();
        self.components.insert(component.kind(), component)
    }

    pub fn remove_component(&mut self, kind: ComponentKind) -> Option<Component> {
        self.components.remove(&kind)
    }

    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.components.contains_key(&kind)
    }

    /// Kinds currently attached, in a stable order.
    pub fn component_kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.components.keys().copied()
    }

    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.get(&kind)
    }

    pub fn transform(&self) -> Option<&Transform> {
        match self.components.get(&ComponentKind::Transform) {
            Some(Component::Transform(t)) => Some(t),
            _ => None,
        }
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        match self.components.get_mut(&ComponentKind::Transform) {
            Some(Component::Transform(t)) => Some(t),
            _ => None,
        }
    }

    pub fn mesh(&self) -> Option<&MeshComponent> {
        match self.components.get(&ComponentKind::Mesh) {
            Some(Component::Mesh(m)) => Some(m),
            _ => None,
        }
    }

    pub fn mesh_mut(&mut self) -> Option<&mut MeshComponent> {
        match self.components.get_mut(&ComponentKind::Mesh) {
            Some(Component::Mesh(m)) => Some(m),
            _ => None,
        }
    }

    pub fn material(&self) -> Option<&MaterialComponent> {
        match self.components.get(&ComponentKind::Material) {
            Some(Component::Material(m)) => Some(m),
            _ => None,
        }
    }

    pub fn material_mut(&mut self) -> Option<&mut MaterialComponent> {
        match self.components.get_mut(&ComponentKind::Material) {
            Some(Component::Material(m)) => Some(m),
            _ => None,
        }
    }

    pub fn light(&self) -> Option<&DirectionalLight> {
        match self.components.get(&ComponentKind::Light) {
            Some(Component::Light(l)) => Some(&l.0),
            _ => None,
        }
    }

    pub fn light_mut(&mut self) -> Option<&mut DirectionalLight> {
        match self.components.get_mut(&ComponentKind::Light) {
            Some(Component::Light(l)) => Some(&mut l.0),
            _ => None,
        }
    }

    /// Turn the object into an entity bundle. Objects with a transform also
    /// get a `GlobalTransform`.
    pub(crate) fn into_builder(self) -> hecs::EntityBuilder {
        let mut builder = hecs::EntityBuilder::new();
        builder.add(Tag(self.tag));
        for (_, component) in self.components {
            match component {
                Component::Transform(t) => {
                    builder.add(t);
                    builder.add(GlobalTransform(t.to_matrix()));
                }
                Component::Mesh(m) => {
                    builder.add(m);
                }
                Component::Material(m) => {
                    builder.add(m);
                }
                Component::Light(l) => {
                    builder.add(l);
                }
            }
        }
        builder
    }
}
