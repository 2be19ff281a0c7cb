//! Host settings
//!
//! Window description and game loop timing.

use crate::renderer::viewer::Viewport;

/// Settings for the host window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    /// Window title.
    pub title: String,
    /// Initial window size (width, height) in logical pixels.
    pub size: (u32, u32),
    /// Whether to pace frames to the display refresh rate.
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "scenery".to_string(),
            size: (1280, 720),
            vsync: true,
        }
    }
}

impl WindowSettings {
    /// Create new window settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set whether to enable vsync.
    pub fn vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Viewport covering the whole window.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.size.0, self.size.1)
    }
}

/// Game loop configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GameLoopConfig {
    /// Fixed timestep for `Game::fixed_update` (seconds). Default: 1/60.
    pub fixed_timestep: f64,
    /// Maximum fixed substeps per frame. Default: 4.
    pub max_substeps: u32,
    /// Stop after this many frames. `None` runs until the game stops itself.
    pub max_frames: Option<u64>,
}

impl Default for GameLoopConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: 1.0 / 60.0,
            max_substeps: 4,
            max_frames: None,
        }
    }
}

impl GameLoopConfig {
    pub fn max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }
}
