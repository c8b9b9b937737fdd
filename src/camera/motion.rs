use super::core::Camera;
use crate::options::CameraOptions;

/// Scroll-driven dolly with a constant idle bob.
///
/// Each frame the depth moves a fixed fraction of the remaining distance
/// toward the scroll target. The fraction is per frame, not per second, so
/// faster displays converge sooner in wall-clock time.
#[derive(Debug, Clone)]
pub struct CameraMotionController {
    smoothed_depth: f64,
    base_depth: f64,
    scroll_to_depth: f64,
    smoothing: f64,
    bob_amplitude: f64,
    bob_frequency: f64,
}

impl CameraMotionController {
    /// Start at `base_depth` with the configured gains.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            smoothed_depth: options.base_depth,
            base_depth: options.base_depth,
            scroll_to_depth: options.scroll_to_depth,
            smoothing: options.smoothing,
            bob_amplitude: options.bob_amplitude,
            bob_frequency: options.bob_frequency,
        }
    }

    /// Current filtered depth.
    #[must_use]
    pub fn smoothed_depth(&self) -> f64 {
        self.smoothed_depth
    }

    /// Depth the camera is heading toward for a given scroll offset.
    #[must_use]
    pub fn target_depth(&self, raw_offset: f64, viewport_height: f64) -> f64 {
        self.base_depth - (raw_offset / viewport_height) * self.scroll_to_depth
    }

    /// Vertical bob at `time` seconds.
    #[must_use]
    pub fn bob(&self, time: f64) -> f64 {
        self.bob_amplitude * (time * self.bob_frequency).sin()
    }

    /// Advance one frame and write the result into `camera`.
    pub fn update(
        &mut self,
        raw_offset: f64,
        viewport_height: f64,
        time: f64,
        camera: &mut Camera,
    ) {
        let target = self.target_depth(raw_offset, viewport_height);
        self.smoothed_depth = lerp(self.smoothed_depth, target, self.smoothing);

        camera.position.y = self.bob(time);
        camera.position.z = self.smoothed_depth;
    }
}

#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn setup() -> (CameraMotionController, Camera) {
        let options = CameraOptions::default();
        (
            CameraMotionController::new(&options),
            Camera::new(&options, 1.0),
        )
    }

    #[test]
    fn starts_at_base_depth() {
        let (motion, _) = setup();
        assert_eq!(motion.smoothed_depth(), 4.0);
    }

    #[test]
    fn target_depth_follows_scroll() {
        let (motion, _) = setup();
        assert_eq!(motion.target_depth(0.0, VIEWPORT), 4.0);
        assert_eq!(motion.target_depth(VIEWPORT, VIEWPORT), -6.0);
        assert_eq!(motion.target_depth(VIEWPORT / 2.0, VIEWPORT), -1.0);
    }

    #[test]
    fn single_step_moves_five_percent() {
        let (mut motion, mut camera) = setup();
        motion.update(VIEWPORT, VIEWPORT, 0.0, &mut camera);
        // 4 + (-6 - 4) * 0.05
        assert!((motion.smoothed_depth() - 3.5).abs() < 1e-12);
        assert_eq!(camera.position.z, motion.smoothed_depth());
    }

    #[test]
    fn converges_monotonically_without_overshoot() {
        let (mut motion, mut camera) = setup();
        let target = motion.target_depth(2.5 * VIEWPORT, VIEWPORT);
        let mut previous = motion.smoothed_depth();
        for frame in 0..2000 {
            motion.update(2.5 * VIEWPORT, VIEWPORT, f64::from(frame), &mut camera);
            let depth = motion.smoothed_depth();
            assert!(depth <= previous, "depth rose at frame {frame}");
            assert!(depth >= target, "overshot at frame {frame}");
            previous = depth;
        }
        assert!((previous - target).abs() < 1e-9);
    }

    #[test]
    fn converges_upward_when_scrolling_back() {
        let (mut motion, mut camera) = setup();
        for _ in 0..500 {
            motion.update(VIEWPORT, VIEWPORT, 0.0, &mut camera);
        }
        let mut previous = motion.smoothed_depth();
        for _ in 0..500 {
            motion.update(0.0, VIEWPORT, 0.0, &mut camera);
            let depth = motion.smoothed_depth();
            assert!(depth >= previous && depth <= 4.0);
            previous = depth;
        }
    }

    #[test]
    fn bob_is_independent_of_scroll() {
        let (mut motion, mut camera) = setup();
        let t = 0.7;
        motion.update(0.0, VIEWPORT, t, &mut camera);
        let y_top = camera.position.y;
        motion.update(3.0 * VIEWPORT, VIEWPORT, t, &mut camera);
        assert_eq!(camera.position.y, y_top);
        assert!((y_top - 0.05 * (2.0 * t).sin()).abs() < 1e-12);
    }
}
