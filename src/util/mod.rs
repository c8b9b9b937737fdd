//! Shared utilities for the controller.
//!
//! Helpers for frame timing and easing curves.

/// Easing curves used by section tweens.
pub mod easing;
/// Frame clock and smoothed FPS estimate.
pub mod frame_timing;
