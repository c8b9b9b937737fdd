use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and scroll-driven motion parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Camera depth with the page scrolled to the top.
    #[schemars(title = "Base Depth", range(min = -50.0, max = 50.0), extend("step" = 0.5))]
    pub base_depth: f64,
    /// Depth travelled per viewport height of scroll.
    #[schemars(title = "Scroll Depth", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub scroll_to_depth: f64,
    /// Per-frame lerp factor toward the target depth.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing: f64,
    /// Vertical bob amplitude.
    #[schemars(title = "Bob Amplitude", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub bob_amplitude: f64,
    /// Vertical bob angular frequency (radians per second).
    #[schemars(title = "Bob Frequency", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub bob_frequency: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 100.0,
            base_depth: 4.0,
            scroll_to_depth: 10.0,
            smoothing: 0.05,
            bob_amplitude: 0.05,
            bob_frequency: 2.0,
        }
    }
}
