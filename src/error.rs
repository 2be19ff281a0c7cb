//! Error types for scene management and the game lifecycle.

use crate::engine::{Lifecycle, SceneId};

/// Errors raised by scenes and the scene manager.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A scene handle that was never returned by `add_scene`.
    #[error("unknown scene {0}")]
    UnknownScene(SceneId),

    /// `initialize` called on a scene that already ran it.
    #[error("scene '{0}' is already initialized")]
    AlreadyInitialized(String),
}

/// Errors raised when the host drives a game out of order.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// A lifecycle step was requested from the wrong phase.
    #[error("cannot {action} while the application is {phase:?}")]
    OutOfOrder {
        action: &'static str,
        phase: Lifecycle,
    },
}
