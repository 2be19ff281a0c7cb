//! Game lifecycle and the application host.
//!
//! The host drives a [`Game`] through `initialize` → `begin` → `update`
//! (every frame), and refreshes the active scene after each update. The host
//! is headless: it owns the frame loop and window description but creates no
//! window or GPU device.

mod scene_manager;
mod settings;

pub use scene_manager::{SceneId, SceneManager};
pub use settings::{GameLoopConfig, WindowSettings};

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{info, trace, warn};

use crate::error::LifecycleError;
use crate::renderer::viewer::Viewport;

/// Per-frame timing passed to [`Game::update`].
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Time since last frame (seconds).
    pub delta_time: f64,
    /// Fixed timestep interval (seconds).
    pub fixed_delta_time: f64,
    /// Time since `begin` (seconds).
    pub elapsed_time: f64,
    /// Zero-based frame counter.
    pub frame_index: u64,
    /// Current viewport dimensions.
    pub viewport: Viewport,
}

/// A game driven by [`Application`].
pub trait Game {
    /// Called once at startup. Create scenes, add objects, set the active scene.
    fn initialize(&mut self, scenes: &mut SceneManager) -> Result<()>;

    /// Called once after `initialize`, before the first frame.
    fn begin(&mut self, _scenes: &mut SceneManager) -> Result<()> {
        Ok(())
    }

    /// Called every frame with a variable timestep.
    fn update(&mut self, _scenes: &mut SceneManager, _frame: &FrameContext) -> Result<()> {
        Ok(())
    }

    /// Called at fixed timestep intervals.
    fn fixed_update(&mut self, _scenes: &mut SceneManager, _dt: f32) {}

    /// The host keeps looping while this returns `true`.
    fn is_running(&self) -> bool {
        true
    }
}

/// Where the application is in the game lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Initialized,
    Running,
    Finished,
}

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed_time: f64,
}

/// Headless application host.
pub struct Application {
    settings: WindowSettings,
    config: GameLoopConfig,
    scenes: SceneManager,
    phase: Lifecycle,
    accumulator: f64,
    frame_index: u64,
    elapsed_time: f64,
}

impl Application {
    /// Create a host. A non-positive or non-finite fixed timestep falls
    /// back to the default.
    pub fn new(settings: WindowSettings, mut config: GameLoopConfig) -> Self {
        if !(config.fixed_timestep.is_finite() && config.fixed_timestep > 0.0) {
            let fallback = GameLoopConfig::default().fixed_timestep;
            warn!(
                "invalid fixed timestep {}, using {:.4}s",
                config.fixed_timestep, fallback
            );
            config.fixed_timestep = fallback;
        }
        let scenes = SceneManager::new(settings.viewport());
        Self {
            settings,
            config,
            scenes,
            phase: Lifecycle::Created,
            accumulator: 0.0,
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    pub fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    pub fn phase(&self) -> Lifecycle {
        self.phase
    }

    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    pub fn scenes_mut(&mut self) -> &mut SceneManager {
        &mut self.scenes
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    fn expect_phase(&self, expected: Lifecycle, action: &'static str) -> Result<()> {
        if self.phase != expected {
            return Err(LifecycleError::OutOfOrder {
                action,
                phase: self.phase,
            }
            .into());
        }
        Ok(())
    }

    /// Run `Game::initialize`.
    pub fn initialize<G: Game>(&mut self, game: &mut G) -> Result<()> {
        self.expect_phase(Lifecycle::Created, "initialize")?;
        info!("initializing '{}'", self.settings.title);
        game.initialize(&mut self.scenes)?;
        if self.scenes.active_scene().is_none() {
            warn!("game initialized without an active scene");
        }
        self.phase = Lifecycle::Initialized;
        Ok(())
    }

    /// Run `Game::begin`.
    pub fn begin<G: Game>(&mut self, game: &mut G) -> Result<()> {
        self.expect_phase(Lifecycle::Initialized, "begin")?;
        game.begin(&mut self.scenes)?;
        self.phase = Lifecycle::Running;
        Ok(())
    }

    /// Advance one frame by `delta_time` seconds.
    ///
    /// 1. `Game::fixed_update` at fixed timestep intervals
    /// 2. `Game::update`
    /// 3. `Scene::update` on the active scene
    pub fn frame<G: Game>(&mut self, game: &mut G, delta_time: f64) -> Result<()> {
        self.expect_phase(Lifecycle::Running, "run a frame")?;

        self.elapsed_time += delta_time;
        self.accumulator += delta_time;
        let mut substeps = 0u32;
        while self.accumulator >= self.config.fixed_timestep
            && substeps < self.config.max_substeps
        {
            game.fixed_update(&mut self.scenes, self.config.fixed_timestep as f32);
            self.accumulator -= self.config.fixed_timestep;
            substeps += 1;
        }
        // Drop the backlog instead of spiraling when frames run long.
        if substeps == self.config.max_substeps {
            self.accumulator = self.accumulator.min(self.config.fixed_timestep);
        }

        let frame = FrameContext {
            delta_time,
            fixed_delta_time: self.config.fixed_timestep,
            elapsed_time: self.elapsed_time,
            frame_index: self.frame_index,
            viewport: self.settings.viewport(),
        };
        game.update(&mut self.scenes, &frame)?;

        if let Some(scene) = self.scenes.active_scene_mut() {
            scene.update(delta_time);
        }

        trace!("frame {} done ({} substeps)", self.frame_index, substeps);
        self.frame_index += 1;
        Ok(())
    }

    /// Drive `game` through its whole lifecycle until it stops or the frame
    /// budget runs out.
    pub fn run<G: Game>(mut self, game: &mut G) -> Result<RunSummary> {
        self.initialize(game)?;
        self.begin(game)?;

        let frame_budget = Duration::from_secs_f64(self.config.fixed_timestep);
        let mut last = Instant::now();

        while game.is_running() {
            if let Some(max) = self.config.max_frames {
                if self.frame_index >= max {
                    break;
                }
            }

            let now = Instant::now();
            let delta_time = now.duration_since(last).as_secs_f64();
            last = now;
            self.frame(game, delta_time)?;

            if self.settings.vsync {
                let spent = now.elapsed();
                if spent < frame_budget {
                    std::thread::sleep(frame_budget - spent);
                }
            }
        }

        self.phase = Lifecycle::Finished;
        info!(
            "'{}' finished after {} frames ({:.2}s)",
            self.settings.title, self.frame_index, self.elapsed_time
        );
        Ok(RunSummary {
            frames: self.frame_index,
            elapsed_time: self.elapsed_time,
        })
    }
}
