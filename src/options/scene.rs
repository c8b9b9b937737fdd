use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One animated cube.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct MeshOptions {
    /// Rest position; the render loop bobs around its `y`.
    pub position: [f64; 3],
    /// Edge length of the cube.
    pub size: f64,
    /// Material color (linear RGB).
    pub color: [f32; 3],
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            size: 1.0,
            color: [1.0, 1.0, 1.0],
        }
    }
}

/// Textured ground plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct GroundOptions {
    /// Plane edge length.
    pub size: f64,
    /// Subdivisions per edge.
    pub segments: u32,
    /// Height of the plane.
    pub height: f64,
    /// Albedo texture path.
    pub color_map: Option<String>,
    /// Bump texture path.
    pub bump_map: Option<String>,
    /// Bump strength.
    pub bump_scale: f32,
    /// Roughness texture path.
    pub roughness_map: Option<String>,
    /// Roughness multiplier.
    pub roughness: f32,
}

const TERRAIN_DIR: &str = "assets/Terrain005_1k-JPG";

impl Default for GroundOptions {
    fn default() -> Self {
        Self {
            size: 100.0,
            segments: 64,
            height: -1.0,
            color_map: Some(format!("{TERRAIN_DIR}/Terrain005_1K_Color.jpg")),
            bump_map: Some(format!("{TERRAIN_DIR}/Terrain005_1K_Details.jpg")),
            bump_scale: 1.5,
            roughness_map: Some(format!(
                "{TERRAIN_DIR}/Terrain005_1K_Snowfall.jpg"
            )),
            roughness: 1.0,
        }
    }
}

/// Static scene content and continuous per-mesh motion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
pub struct SceneOptions {
    /// Radians added to every mesh's `y` rotation each frame.
    #[schemars(title = "Spin Rate", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub spin_rate: f64,
    /// Amplitude of the per-mesh vertical bob.
    #[schemars(title = "Bob Amplitude", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub bob_amplitude: f64,
    /// Background clear color.
    #[schemars(skip)]
    pub clear_color: [f32; 3],
    /// Upper bound on the device pixel ratio handed to the renderer.
    #[schemars(title = "Max Pixel Ratio", range(min = 1.0, max = 4.0), extend("step" = 0.5))]
    pub max_pixel_ratio: f64,
    /// Animated cubes, addressed by index from section bindings.
    #[schemars(skip)]
    pub meshes: Vec<MeshOptions>,
    /// Ground plane.
    #[schemars(skip)]
    pub ground: GroundOptions,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            spin_rate: 0.01,
            bob_amplitude: 0.1,
            clear_color: [0.0, 0.0, 0.0],
            max_pixel_ratio: 2.0,
            meshes: vec![
                MeshOptions {
                    position: [0.0, 0.0, 0.0],
                    color: [1.0, 0.0, 0.0],
                    ..MeshOptions::default()
                },
                MeshOptions {
                    position: [0.0, 0.0, -4.0],
                    color: [0.0, 1.0, 0.0],
                    ..MeshOptions::default()
                },
                MeshOptions {
                    position: [0.0, 0.0, -8.0],
                    color: [0.0, 0.0, 1.0],
                    ..MeshOptions::default()
                },
            ],
            ground: GroundOptions::default(),
        }
    }
}
