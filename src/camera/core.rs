use glam::{DVec3, Mat4, Vec3};
use serde::Serialize;

use crate::options::CameraOptions;

/// Perspective camera looking down `-Z`, positioned in world space.
///
/// The scroll controller only ever writes `position.y` and `position.z`;
/// orientation is fixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Camera {
    /// Eye position in world space.
    pub position: DVec3,
    /// Viewing direction.
    pub forward: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera at `(0, 0, base_depth)` with the configured projection.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, options.base_depth),
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view =
            Mat4::look_to_rh(self.position.as_vec3(), self.forward, self.up);
        proj_matrix(self) * view
    }

    /// Get just the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        proj_matrix(self)
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }
}

fn proj_matrix(camera: &Camera) -> Mat4 {
    // perspective_rh uses a [0,1] depth range
    Mat4::perspective_rh(
        camera.fovy.to_radians(),
        camera.aspect,
        camera.znear,
        camera.zfar,
    )
}

#[repr(C)]
#[derive(
    Debug, Copy, Clone, PartialEq, Serialize, bytemuck::Pod, bytemuck::Zeroable,
)]
/// Flat camera block handed to the renderer each frame.
pub struct CameraTransform {
    /// Combined view-projection matrix (column major).
    #[serde(skip)]
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Padding to a 16-byte multiple.
    #[serde(skip)]
    pub(crate) _pad: f32,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 100.0,
            _pad: 0.0,
        }
    }
}

impl CameraTransform {
    /// Capture the given camera's current state.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.build_matrix().to_cols_array_2d(),
            position: camera.position.as_vec3().to_array(),
            aspect: camera.aspect,
            fovy: camera.fovy,
            znear: camera.znear,
            zfar: camera.zfar,
            _pad: 0.0,
        }
    }

    /// The block as a flat `f32` slice.
    #[must_use]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}
