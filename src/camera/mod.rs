//! Camera system for the scroll-driven scene.
//!
//! Provides the perspective camera, its flat per-frame transform block, and
//! the motion controller that maps scroll offset to camera depth.

/// Core camera struct and renderer-facing transform.
pub mod core;
/// Scroll-to-depth smoothing and idle bob.
pub mod motion;

pub use self::core::{Camera, CameraTransform};
pub use motion::CameraMotionController;
