//! Read-only queries on [`ScrollSceneEngine`].

use super::{ScrollSceneEngine, Viewport};
use crate::animation::SectionAnimator;
use crate::options::Options;
use crate::scene::{FrameSnapshot, Scene};
use crate::scroll::ScrollState;

// ── State ──

impl ScrollSceneEngine {
    /// The scene as of the last tick.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Current viewport, pixel ratio already capped.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Latest scroll offset and section.
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.state()
    }

    /// Current filtered camera depth.
    #[must_use]
    pub fn smoothed_depth(&self) -> f64 {
        self.camera_motion.smoothed_depth()
    }

    /// The section animator and its binding table.
    #[must_use]
    pub fn animator(&self) -> &SectionAnimator {
        &self.animator
    }

    /// Rotation tweens still in flight.
    #[must_use]
    pub fn active_tweens(&self) -> usize {
        self.tweens.active_count()
    }
}

// ── Frames ──

impl ScrollSceneEngine {
    /// Frames presented so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Smoothed frame rate from tick timestamps.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.timing.fps()
    }

    /// Snapshot of the last presented frame.
    ///
    /// Before the first tick this is the freshly assembled scene as frame 0.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut info = self.frame_info();
        info.frame = self.frame_count.saturating_sub(1);
        FrameSnapshot::capture(&self.scene, info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NullSink;

    fn engine() -> ScrollSceneEngine {
        let mut options = Options::default();
        options.particles.seed = Some(2);
        options.particles.count = 8;
        ScrollSceneEngine::new(options, Viewport::new(640, 480)).unwrap()
    }

    #[test]
    fn snapshot_tracks_last_frame() {
        let mut engine = engine();
        assert_eq!(engine.snapshot().info.frame, 0);

        for frame in 0..3 {
            engine.tick(f64::from(frame) / 30.0, &mut NullSink);
        }
        let snap = engine.snapshot();
        assert_eq!(snap.info.frame, 2);
        assert_eq!(snap.info.time, 2.0 / 30.0);
        assert_eq!(snap.meshes.len(), engine.scene().meshes().len());
    }

    #[test]
    fn fps_follows_tick_spacing() {
        let mut engine = engine();
        for frame in 0..600 {
            engine.tick(f64::from(frame) / 30.0, &mut NullSink);
        }
        assert!((engine.fps() - 30.0).abs() < 0.5);
    }

    #[test]
    fn exposes_bindings() {
        let engine = engine();
        assert_eq!(engine.animator().bindings().len(), 2);
        assert_eq!(engine.options().particles.count, 8);
        assert_eq!(engine.viewport().height, 480);
    }
}
