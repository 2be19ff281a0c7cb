//! Skybox description

/// Background environment drawn behind all scene geometry.
///
/// With no cubemap the renderer falls back to a vertical gradient between
/// the three colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Skybox {
    /// Optional cubemap asset path.
    pub cubemap: Option<String>,
    /// Color straight up.
    pub zenith_color: [f32; 3],
    /// Color at the horizon.
    pub horizon_color: [f32; 3],
    /// Color below the horizon.
    pub ground_color: [f32; 3],
    /// Luminance scale applied to the sky.
    pub intensity: f32,
}

impl Default for Skybox {
    fn default() -> Self {
        Self {
            cubemap: None,
            zenith_color: [0.25, 0.45, 0.8],
            horizon_color: [0.7, 0.8, 0.9],
            ground_color: [0.3, 0.28, 0.25],
            intensity: 1.0,
        }
    }
}

impl Skybox {
    pub fn new() -> Self {
        Self::default()
    }
}
