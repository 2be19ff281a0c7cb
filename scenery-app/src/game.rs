//! The game: builds one scene and makes it active.

use anyhow::Result;
use log::{debug, info};
use scenery::{FrameContext, Game, Scene, SceneId, SceneManager};

use crate::cli::SceneKind;
use crate::main_scene::MainScene;
use crate::sandbox_scene::SandboxScene;

pub struct ArenaGame {
    start_scene: SceneKind,
    main_scene: Option<SceneId>,
    running: bool,
}

impl ArenaGame {
    pub fn new(start_scene: SceneKind) -> Self {
        Self {
            start_scene,
            main_scene: None,
            running: true,
        }
    }

    pub fn main_scene(&self) -> Option<SceneId> {
        self.main_scene
    }

    /// Ask the host to stop after the current frame.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

impl Drop for ArenaGame {
    fn drop(&mut self) {
        debug!("game dropped, releasing scenes");
    }
}

impl Game for ArenaGame {
    fn initialize(&mut self, scenes: &mut SceneManager) -> Result<()> {
        let scene = match self.start_scene {
            SceneKind::Arena => Scene::with_script("MainScene", MainScene::new()),
            SceneKind::Sandbox => Scene::with_script("Sandbox", SandboxScene),
        };
        let id = scenes.add_scene(scene);
        scenes.set_active_scene(id)?;
        self.main_scene = Some(id);
        Ok(())
    }

    fn begin(&mut self, scenes: &mut SceneManager) -> Result<()> {
        if let Some(scene) = scenes.active_scene() {
            info!(
                "starting in '{}' with {} objects",
                scene.name(),
                scene.object_count()
            );
        }
        Ok(())
    }

    fn update(&mut self, _scenes: &mut SceneManager, _frame: &FrameContext) -> Result<()> {
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
