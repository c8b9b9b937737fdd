//! Flat per-frame transforms for external renderers.

use serde::Serialize;

use super::Scene;
use crate::camera::CameraTransform;

/// Position and rotation of one mesh, packed for upload.
#[repr(C)]
#[derive(
    Debug, Copy, Clone, PartialEq, Serialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct MeshTransform {
    /// World-space position.
    pub position: [f32; 3],
    #[serde(skip)]
    pub(crate) _pad0: f32,
    /// Euler rotation (radians, XYZ order).
    pub rotation: [f32; 3],
    #[serde(skip)]
    pub(crate) _pad1: f32,
}

/// Frame bookkeeping passed alongside the scene to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameInfo {
    /// Frames rendered before this one.
    pub frame: u64,
    /// Host time in seconds.
    pub time: f64,
    /// Latest raw scroll offset.
    pub scroll_offset: f64,
    /// Current section index.
    pub section: usize,
}

/// Everything that changes between frames, detached from the scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    /// Frame bookkeeping.
    #[serde(flatten)]
    pub info: FrameInfo,
    /// Camera block.
    pub camera: CameraTransform,
    /// One entry per mesh, in scene order.
    pub meshes: Vec<MeshTransform>,
}

impl FrameSnapshot {
    /// Capture the dynamic part of `scene`.
    #[must_use]
    pub fn capture(scene: &Scene, info: FrameInfo) -> Self {
        let meshes = scene
            .meshes()
            .iter()
            .map(|mesh| MeshTransform {
                position: mesh.position.as_vec3().to_array(),
                _pad0: 0.0,
                rotation: mesh.rotation.as_vec3().to_array(),
                _pad1: 0.0,
            })
            .collect();
        Self {
            info,
            camera: CameraTransform::from_camera(&scene.camera),
            meshes,
        }
    }

    /// Mesh transforms as a flat `f32` slice, 8 floats per mesh.
    #[must_use]
    pub fn mesh_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.meshes)
    }
}
