//! Scenes
//!
//! A [`Scene`] owns an ordered list of game objects stored in a
//! `hecs::World`, a skybox, and, once initialized, a [`LightManager`] and a
//! debug camera.
//!
//! Initialization is two-phase. [`Scene::initialize`] runs
//! [`SceneScript::setup`], then the base initialization (light manager,
//! light registration, debug camera, transform propagation), then
//! [`SceneScript::on_initialized`]. Anything that needs the light manager
//! belongs in `on_initialized`.

pub mod extract;
pub mod game_object;
pub mod light_manager;

pub use extract::{DrawItem, FrameExtract, ModelUniform};
pub use game_object::{Component, ComponentKind, GameObject};
pub use light_manager::{LightManager, SceneLightUniforms, MAX_DIRECTIONAL_LIGHTS};

use anyhow::Result;
use glam::Vec3;
use tracing::{debug, info, trace, warn};

use crate::ecs::components::{
    CameraComponent, GlobalTransform, LightComponent, MaterialComponent, MeshComponent, Tag,
    Transform,
};
use crate::ecs::systems::transform_system;
use crate::error::SceneError;
use crate::renderer::material::Material;
use crate::renderer::skybox::Skybox;
use crate::renderer::viewer::{Camera, CameraUniform, Viewport};

/// Scene-specific content hooks, run by [`Scene::initialize`].
pub trait SceneScript {
    /// Build materials, add objects and set the skybox. Runs before base
    /// initialization, so the light manager does not exist yet.
    fn setup(&mut self, _scene: &mut Scene) -> Result<()> {
        Ok(())
    }

    /// Configure lighting. Runs after base initialization.
    fn on_initialized(&mut self, _scene: &mut Scene) -> Result<()> {
        Ok(())
    }
}

/// A level: objects, lights and a skybox.
pub struct Scene {
    name: String,
    world: hecs::World,
    objects: Vec<hecs::Entity>,
    light_manager: Option<LightManager>,
    skybox: Option<Skybox>,
    debug_camera: Option<hecs::Entity>,
    viewport: Viewport,
    script: Option<Box<dyn SceneScript>>,
    initialized: bool,
}

impl Scene {
    /// Create an empty scene without content hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            world: hecs::World::new(),
            objects: Vec::new(),
            light_manager: None,
            skybox: None,
            debug_camera: None,
            viewport: Viewport::default(),
            script: None,
            initialized: false,
        }
    }

    /// Create a scene whose content comes from `script`.
    pub fn with_script(name: impl Into<String>, script: impl SceneScript + 'static) -> Self {
        let mut scene = Self::new(name);
        scene.script = Some(Box::new(script));
        scene
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Move an object into the scene. Lights added after base initialization
    /// are registered with the light manager right away.
    pub fn add_object(&mut self, object: GameObject) -> hecs::Entity {
        let is_light = object.light().is_some();
        let tag = object.tag().to_string();
        let entity = self.world.spawn(object.into_builder().build());
        self.objects.push(entity);

        if is_light {
            if let Some(lm) = self.light_manager.as_mut() {
                lm.register(entity);
            }
        }
        debug!("scene '{}': added '{}' ({:?})", self.name, tag, entity);
        entity
    }

    /// Remove an object. Returns `false` if it is not part of this scene.
    pub fn remove_object(&mut self, entity: hecs::Entity) -> bool {
        let Some(index) = self.objects.iter().position(|&e| e == entity) else {
            return false;
        };
        self.objects.remove(index);
        if let Some(lm) = self.light_manager.as_mut() {
            lm.unregister(entity);
        }
        self.world.despawn(entity).is_ok()
    }

    /// Objects in insertion order.
    pub fn objects(&self) -> &[hecs::Entity] {
        &self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// First object with the given tag, in insertion order.
    pub fn find_by_tag(&self, tag: &str) -> Option<hecs::Entity> {
        self.objects.iter().copied().find(|&e| {
            self.world
                .get::<&Tag>(e)
                .map(|t| t.0 == tag)
                .unwrap_or(false)
        })
    }

    pub fn tag(&self, entity: hecs::Entity) -> Option<String> {
        self.world.get::<&Tag>(entity).ok().map(|t| t.0.clone())
    }

    pub fn transform(&self, entity: hecs::Entity) -> Option<Transform> {
        self.world.get::<&Transform>(entity).ok().map(|t| *t)
    }

    pub fn material(&self, entity: hecs::Entity) -> Option<crate::renderer::MaterialHandle> {
        self.world
            .get::<&MaterialComponent>(entity)
            .ok()
            .map(|m| m.material.clone())
    }

    pub fn light(&self, entity: hecs::Entity) -> Option<crate::renderer::DirectionalLight> {
        self.world
            .get::<&LightComponent>(entity)
            .ok()
            .map(|l| l.0.clone())
    }

    /// Direct access to the component storage.
    pub fn world(&self) -> &hecs::World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut hecs::World {
        &mut self.world
    }

    pub fn set_skybox(&mut self, skybox: Skybox) {
        self.skybox = Some(skybox);
    }

    pub fn skybox(&self) -> Option<&Skybox> {
        self.skybox.as_ref()
    }

    /// `None` until base initialization has run.
    pub fn light_manager(&self) -> Option<&LightManager> {
        self.light_manager.as_ref()
    }

    /// `None` until base initialization has run.
    pub fn light_manager_mut(&mut self) -> Option<&mut LightManager> {
        self.light_manager.as_mut()
    }

    /// The camera spawned by base initialization.
    pub fn debug_camera(&self) -> Option<Camera> {
        let entity = self.debug_camera?;
        self.world
            .get::<&CameraComponent>(entity)
            .ok()
            .map(|c| c.camera.clone())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for (_, cam) in self.world.query_mut::<&mut CameraComponent>() {
            cam.camera.set_viewport(viewport);
        }
    }

    /// Run the two-phase initialization. Fails if called twice or if a
    /// script hook fails.
    ///
    /// On failure the scene is rolled back to its state before the call:
    /// objects added by the script are despawned, the light manager and
    /// debug camera are dropped, and the skybox is restored. A later call
    /// runs both phases again.
    pub fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Err(SceneError::AlreadyInitialized(self.name.clone()).into());
        }

        let object_count = self.objects.len();
        let skybox = self.skybox.clone();

        let mut script = self.script.take();
        let result = self.run_initialize(script.as_deref_mut());
        self.script = script;

        if let Err(err) = &result {
            warn!("scene '{}' failed to initialize: {err:#}", self.name);
            self.roll_back(object_count, skybox);
        }
        result
    }

    fn run_initialize(&mut self, mut script: Option<&mut (dyn SceneScript + 'static)>) -> Result<()> {
        if let Some(script) = script.as_deref_mut() {
            script.setup(self)?;
        }

        self.initialize_base();

        if let Some(script) = script {
            script.on_initialized(self)?;
        }

        self.initialized = true;
        info!(
            "scene '{}' initialized with {} objects",
            self.name,
            self.objects.len()
        );
        Ok(())
    }

    /// Base initialization: light manager, debug camera, transforms.
    fn initialize_base(&mut self) {
        let mut light_manager = LightManager::new();
        for &entity in &self.objects {
            if self.world.satisfies::<&LightComponent>(entity).unwrap_or(false) {
                light_manager.register(entity);
            }
        }
        self.light_manager = Some(light_manager);

        let mut camera = Camera::debug();
        camera.set_viewport(self.viewport);
        self.debug_camera = Some(self.world.spawn((
            Transform::from_position(camera.position),
            CameraComponent {
                camera,
                active: true,
            },
        )));

        transform_system(&mut self.world);
    }

    /// Undo a partial initialization. Objects past `object_count` were added
    /// by the failed attempt.
    fn roll_back(&mut self, object_count: usize, skybox: Option<Skybox>) {
        let added = self.objects.split_off(object_count.min(self.objects.len()));
        for entity in added {
            let _ = self.world.despawn(entity);
        }
        if let Some(camera) = self.debug_camera.take() {
            let _ = self.world.despawn(camera);
        }
        self.light_manager = None;
        self.skybox = skybox;
        self.initialized = false;
    }

    /// Per-frame scene work.
    pub fn update(&mut self, delta_time: f64) {
        let updated = transform_system(&mut self.world);
        trace!(
            "scene '{}' updated {} transforms (dt = {:.4})",
            self.name,
            updated,
            delta_time
        );
    }

    /// Snapshot the scene for rendering.
    pub fn extract(&self) -> FrameExtract {
        let fallback = Material::default().uniform();
        let mut draws = Vec::new();

        for &entity in &self.objects {
            let Ok(mut query) = self
                .world
                .query_one::<(&MeshComponent, &GlobalTransform, Option<&MaterialComponent>, &Tag)>(
                    entity,
                )
            else {
                continue;
            };
            let Some((mesh, global, material, tag)) = query.get() else {
                continue;
            };
            if !mesh.visible {
                continue;
            }
            let material = material.map(|m| m.material.clone());
            draws.push(DrawItem {
                entity,
                tag: tag.0.clone(),
                primitive: mesh.primitive,
                material_uniform: material.as_ref().map_or(fallback, |m| m.uniform()),
                material,
                model: ModelUniform::from_matrix(global.0),
                world_bounds: mesh.primitive.aabb().transformed(global.0),
                cast_shadow: mesh.cast_shadow,
                receive_shadow: mesh.receive_shadow,
            });
        }

        let mut extract = FrameExtract {
            draws,
            lights: None,
            shadow: None,
            camera: self.debug_camera().map(|c| CameraUniform::from_camera(&c)),
            skybox: self.skybox.clone(),
        };

        if let Some(lm) = &self.light_manager {
            extract.lights = Some(lm.uniforms(&self.world));

            let focus = extract.bounds().map_or(Vec3::ZERO, |b| b.center());
            extract.shadow = lm
                .lights()
                .iter()
                .filter_map(|&e| self.world.get::<&LightComponent>(e).ok())
                .find_map(|l| l.0.shadow_uniform(focus));
        }

        extract
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("objects", &self.objects.len())
            .field("initialized", &self.initialized)
            .field("has_script", &self.script.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::light::DirectionalLight;
    use crate::renderer::material::MaterialHandle;
    use crate::renderer::shadow::ShadowSettings;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        log: Rc<RefCell<Vec<String>>>,
    }

    impl SceneScript for Recorder {
        fn setup(&mut self, scene: &mut Scene) -> Result<()> {
            self.log.borrow_mut().push(format!(
                "setup lm={}",
                scene.light_manager().is_some()
            ));
            scene.add_object(GameObject::create_cube(Vec3::ZERO));
            Ok(())
        }

        fn on_initialized(&mut self, scene: &mut Scene) -> Result<()> {
            self.log.borrow_mut().push(format!(
                "post lm={}",
                scene.light_manager().is_some()
            ));
            Ok(())
        }
    }

    #[test]
    fn test_phase_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene = Scene::with_script("Test", Recorder { log: log.clone() });
        scene.initialize().unwrap();

        assert_eq!(*log.borrow(), vec!["setup lm=false", "post lm=true"]);
        assert_eq!(scene.object_count(), 1);
        assert!(scene.is_initialized());
    }

    /// Adds a cube and a sun in `setup`, dims the ambient light afterwards,
    /// and fails the chosen phase on its first run.
    struct FailOnce {
        fail_setup: bool,
        fail_post: bool,
    }

    impl SceneScript for FailOnce {
        fn setup(&mut self, scene: &mut Scene) -> Result<()> {
            scene.add_object(GameObject::create_cube(Vec3::ZERO));
            scene.set_skybox(Skybox::default());
            if std::mem::take(&mut self.fail_setup) {
                anyhow::bail!("setup failed");
            }
            Ok(())
        }

        fn on_initialized(&mut self, scene: &mut Scene) -> Result<()> {
            if let Some(lm) = scene.light_manager_mut() {
                lm.set_ambient_intensity(0.25);
            }
            if std::mem::take(&mut self.fail_post) {
                anyhow::bail!("lighting failed");
            }
            Ok(())
        }
    }

    #[test]
    fn test_failed_setup_rolls_back() {
        let mut scene = Scene::with_script(
            "Retry",
            FailOnce {
                fail_setup: true,
                fail_post: false,
            },
        );
        let kept = scene.add_object(GameObject::create_cube(Vec3::X));

        assert!(scene.initialize().is_err());
        assert!(!scene.is_initialized());
        assert_eq!(scene.objects(), &[kept]);
        assert!(scene.skybox().is_none());
        assert!(scene.light_manager().is_none());

        scene.initialize().unwrap();
        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.world().len(), 3);
        assert!(scene.skybox().is_some());
    }

    #[test]
    fn test_failed_post_init_reruns_both_phases() {
        let mut scene = Scene::with_script(
            "Retry",
            FailOnce {
                fail_setup: false,
                fail_post: true,
            },
        );

        let err = scene.initialize().unwrap_err();
        assert_eq!(err.to_string(), "lighting failed");
        assert!(!scene.is_initialized());
        assert_eq!(scene.object_count(), 0);
        assert!(scene.light_manager().is_none());
        assert!(scene.debug_camera().is_none());
        assert_eq!(scene.world().len(), 0);

        scene.initialize().unwrap();
        assert!(scene.is_initialized());
        assert_eq!(scene.object_count(), 1);
        assert_eq!(scene.light_manager().unwrap().ambient().intensity, 0.25);
        assert!(scene.debug_camera().is_some());
    }

    #[test]
    fn test_double_initialize_fails() {
        let mut scene = Scene::new("Twice");
        scene.initialize().unwrap();
        let err = scene.initialize().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SceneError>(),
            Some(SceneError::AlreadyInitialized(name)) if name == "Twice"
        ));
    }

    #[test]
    fn test_light_manager_absent_before_init() {
        let mut scene = Scene::new("Early");
        assert!(scene.light_manager_mut().is_none());
        if let Some(lm) = scene.light_manager_mut() {
            lm.set_ambient_intensity(5.0);
        }
        scene.initialize().unwrap();
        assert_eq!(scene.light_manager().unwrap().ambient().intensity, 0.3);
    }

    #[test]
    fn test_lights_registered_before_and_after_init() {
        let mut scene = Scene::new("Lights");
        let early = scene.add_object(GameObject::directional_light(
            "Early",
            DirectionalLight::default(),
        ));
        scene.initialize().unwrap();
        let late = scene.add_object(GameObject::directional_light(
            "Late",
            DirectionalLight::default(),
        ));

        let lm = scene.light_manager().unwrap();
        assert_eq!(lm.lights(), &[early, late]);
    }

    #[test]
    fn test_find_and_remove() {
        let mut scene = Scene::new("Find");
        let mut floor = GameObject::create_cube(Vec3::ZERO);
        floor.set_tag("Floor");
        let floor = scene.add_object(floor);
        let sun = scene.add_object(GameObject::directional_light(
            "Sun",
            DirectionalLight::default(),
        ));
        scene.initialize().unwrap();

        assert_eq!(scene.find_by_tag("Floor"), Some(floor));
        assert_eq!(scene.find_by_tag("Missing"), None);
        assert!(scene.remove_object(sun));
        assert!(!scene.remove_object(sun));
        assert_eq!(scene.object_count(), 1);
        assert_eq!(scene.light_manager().unwrap().light_count(), 0);
    }

    #[test]
    fn test_debug_camera_not_counted_as_object() {
        let mut scene = Scene::new("Camera");
        assert!(scene.debug_camera().is_none());
        scene.set_viewport(Viewport::new(1920, 1080));
        scene.initialize().unwrap();
        assert_eq!(scene.object_count(), 0);
        let camera = scene.debug_camera().unwrap();
        assert_eq!(camera.viewport(), Viewport::new(1920, 1080));
    }

    #[test]
    fn test_extract() {
        let mut scene = Scene::new("Extract");
        let shared = MaterialHandle::new(Material::new());
        for x in [-1.0, 1.0] {
            let mut cube = GameObject::create_cube(Vec3::new(x, 0.0, 0.0));
            cube.material_mut().unwrap().set_material(shared.clone());
            scene.add_object(cube);
        }
        let mut bare = GameObject::create_cube(Vec3::ZERO);
        bare.remove_component(ComponentKind::Material);
        scene.add_object(bare);
        let sun = DirectionalLight::default().with_shadow(ShadowSettings {
            cast_shadows: true,
            ..Default::default()
        });
        scene.add_object(GameObject::directional_light("Sun", sun));
        scene.set_skybox(Skybox::default());

        let before = scene.extract();
        assert_eq!(before.draws.len(), 3);
        assert!(before.lights.is_none());
        assert!(before.camera.is_none());

        scene.initialize().unwrap();
        let frame = scene.extract();
        assert_eq!(frame.draws.len(), 3);
        assert!(frame.draws[0]
            .material
            .as_ref()
            .unwrap()
            .ptr_eq(frame.draws[1].material.as_ref().unwrap()));
        assert!(frame.draws[2].material.is_none());
        assert_eq!(frame.lights.unwrap().counts[0], 1);
        assert!(frame.shadow.is_some());
        assert!(frame.camera.is_some());
        assert!(frame.skybox.is_some());

        let bounds = frame.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.5, -0.5, -0.5));
        assert_eq!(bounds.max, Vec3::new(1.5, 0.5, 0.5));
    }

    #[test]
    fn test_update_propagates_edits() {
        let mut scene = Scene::new("Update");
        let cube = scene.add_object(GameObject::create_cube(Vec3::ZERO));
        scene.initialize().unwrap();

        scene
            .world_mut()
            .get::<&mut Transform>(cube)
            .unwrap()
            .set_position(Vec3::new(0.0, 2.0, 0.0));
        scene.update(1.0 / 60.0);

        let frame = scene.extract();
        assert_eq!(frame.draws[0].world_bounds.center(), Vec3::new(0.0, 2.0, 0.0));
    }
}
