use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Background particle shell parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Particles", inline)]
#[serde(default)]
pub struct ParticleOptions {
    /// Number of points in the shell.
    #[schemars(title = "Count", range(min = 0, max = 20000))]
    pub count: usize,
    /// Inner radius of the shell.
    #[schemars(title = "Min Radius", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub min_radius: f64,
    /// Outer radius of the shell.
    #[schemars(title = "Max Radius", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub max_radius: f64,
    /// Point sprite size.
    #[schemars(title = "Size", range(min = 0.001, max = 0.5), extend("step" = 0.001))]
    pub size: f32,
    /// Point color (linear RGB).
    #[schemars(skip)]
    pub color: [f32; 3],
    /// RNG seed. `None` draws a fresh field each session.
    #[schemars(skip)]
    pub seed: Option<u64>,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 1500,
            min_radius: 30.0,
            max_radius: 40.0,
            size: 0.02,
            color: [1.0, 1.0, 1.0],
            seed: None,
        }
    }
}
