//! Scene registry with a single active scene.

use std::fmt;

use anyhow::Result;
use tracing::info;

use crate::error::SceneError;
use crate::renderer::viewer::Viewport;
use crate::scene::Scene;

/// Handle returned by [`SceneManager::add_scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(usize);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns every registered scene; at most one is active.
#[derive(Debug, Default)]
pub struct SceneManager {
    scenes: Vec<Scene>,
    active: Option<SceneId>,
    viewport: Viewport,
}

impl SceneManager {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scenes: Vec::new(),
            active: None,
            viewport,
        }
    }

    /// Register a scene. It stays inactive until [`set_active_scene`](Self::set_active_scene).
    pub fn add_scene(&mut self, mut scene: Scene) -> SceneId {
        scene.set_viewport(self.viewport);
        let id = SceneId(self.scenes.len());
        info!("registered scene '{}' as {}", scene.name(), id);
        self.scenes.push(scene);
        id
    }

    /// Make `id` the active scene, initializing it first if needed.
    pub fn set_active_scene(&mut self, id: SceneId) -> Result<()> {
        let scene = self
            .scenes
            .get_mut(id.0)
            .ok_or(SceneError::UnknownScene(id))?;
        if !scene.is_initialized() {
            scene.initialize()?;
        }
        info!("active scene is now '{}'", scene.name());
        self.active = Some(id);
        Ok(())
    }

    pub fn active_id(&self) -> Option<SceneId> {
        self.active
    }

    pub fn active_scene(&self) -> Option<&Scene> {
        self.active.and_then(|id| self.scenes.get(id.0))
    }

    pub fn active_scene_mut(&mut self) -> Option<&mut Scene> {
        self.active.and_then(|id| self.scenes.get_mut(id.0))
    }

    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.get(id.0)
    }

    pub fn scene_mut(&mut self, id: SceneId) -> Option<&mut Scene> {
        self.scenes.get_mut(id.0)
    }

    /// First scene registered under `name`.
    pub fn find(&self, name: &str) -> Option<SceneId> {
        self.scenes
            .iter()
            .position(|s| s.name() == name)
            .map(SceneId)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Resize every scene's cameras.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for scene in &mut self.scenes {
            scene.set_viewport(viewport);
        }
    }
}
