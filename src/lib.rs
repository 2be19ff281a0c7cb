//! scenery
//!
//! The scene composition layer between a game and its engine: materials,
//! lights, game objects, scenes and the game lifecycle. Rendering and physics
//! are left to the engine; scenes hand over plain data through
//! [`FrameExtract`].
//!
//! # Architecture
//!
//! 1. **renderer** - Material, light, camera, geometry and skybox descriptors
//! 2. **ecs** - hecs components and the transform system
//! 3. **scene** - Game objects, scenes, light manager, frame extraction
//! 4. **engine** - `Game` trait, scene manager and the application host

pub mod ecs;
pub mod engine;
pub mod error;
pub mod renderer;
pub mod scene;

// Re-export commonly used types
pub use renderer::{
    Aabb, AmbientLight, Camera, CameraUniform, DirectionalLight, Light, LightType, LightUniforms,
    Material, MaterialHandle, MaterialUniform, Primitive, Projection, ShadowSettings,
    ShadowUniform, Skybox, Viewport, DEFAULT_SHADER,
};

pub use ecs::prelude::*;

pub use scene::{
    Component, ComponentKind, DrawItem, FrameExtract, GameObject, LightManager, ModelUniform,
    Scene, SceneLightUniforms, SceneScript, MAX_DIRECTIONAL_LIGHTS,
};

pub use engine::{
    Application, FrameContext, Game, GameLoopConfig, Lifecycle, RunSummary, SceneId,
    SceneManager, WindowSettings,
};

pub use error::{LifecycleError, SceneError};

// Re-export glam for convenience
pub use glam;
