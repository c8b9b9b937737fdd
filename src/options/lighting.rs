use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Static scene lights: one ambient fill plus one sun-like directional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
pub struct LightingOptions {
    /// Ambient light color.
    #[schemars(skip)]
    pub ambient_color: [f32; 3],
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub ambient_intensity: f32,
    /// Directional light color.
    #[schemars(skip)]
    pub sun_color: [f32; 3],
    /// Directional light intensity.
    #[schemars(title = "Sun", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub sun_intensity: f32,
    /// Directional light position; it shines toward the origin.
    #[schemars(skip)]
    pub sun_position: [f64; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.5,
            sun_color: [1.0, 1.0, 1.0],
            sun_intensity: 1.0,
            sun_position: [5.0, 10.0, 2.0],
        }
    }
}
