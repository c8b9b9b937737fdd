use glam::DVec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::MeshOptions;

/// Handle to a mesh owned by the [`Scene`](super::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MeshId(pub usize);

/// Rotation axis for tweens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Pitch.
    X,
    /// Yaw.
    Y,
    /// Roll.
    Z,
}

/// An animated cube.
///
/// `rotation` holds Euler angles (radians, XYZ order) and is unbounded; the
/// render loop and section tweens both add to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    /// Edge length.
    pub size: f64,
    /// Material color (linear RGB).
    pub color: [f32; 3],
    /// Rest position the bob oscillates around.
    pub base_position: DVec3,
    /// Current position.
    pub position: DVec3,
    /// Current Euler rotation.
    pub rotation: DVec3,
}

impl Mesh {
    /// Build a mesh at rest from its options.
    #[must_use]
    pub fn from_options(options: &MeshOptions) -> Self {
        let base_position = DVec3::from_array(options.position);
        Self {
            size: options.size,
            color: options.color,
            base_position,
            position: base_position,
            rotation: DVec3::ZERO,
        }
    }

    /// Mutable access to one rotation component.
    pub fn rotation_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.rotation.x,
            Axis::Y => &mut self.rotation.y,
            Axis::Z => &mut self.rotation.z,
        }
    }

    /// One rotation component.
    #[must_use]
    pub fn rotation(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.rotation.x,
            Axis::Y => self.rotation.y,
            Axis::Z => self.rotation.z,
        }
    }
}
