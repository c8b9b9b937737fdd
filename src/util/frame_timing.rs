use web_time::Instant;

/// Monotonic clock for the render loop, in seconds since construction.
///
/// On wasm this reads `performance.now()` through `web-time`.
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    /// Start a clock at zero.
    #[must_use]
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Seconds elapsed since [`start`](Self::start).
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::start()
    }
}

/// Smoothed FPS estimate fed with host frame timestamps.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Timestamp of the previous frame, in seconds.
    last_frame: Option<f64>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f64,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f64,
}

impl FrameTiming {
    /// Create a new frame timer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Record a frame presented at `time` seconds.
    pub fn record(&mut self, time: f64) {
        if let Some(last) = self.last_frame {
            let frame_time = time - last;
            if frame_time > 0.0 {
                let instant_fps = 1.0 / frame_time;
                self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                    + instant_fps * self.smoothing;
            }
        }
        self.last_frame = Some(time);
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_frames_pull_fps_toward_rate() {
        let mut timing = FrameTiming::new();
        for i in 0..400 {
            timing.record(f64::from(i) / 30.0);
        }
        assert!((timing.fps() - 30.0).abs() < 0.1, "fps {}", timing.fps());
    }

    #[test]
    fn repeated_timestamp_is_ignored() {
        let mut timing = FrameTiming::new();
        timing.record(1.0);
        timing.record(1.0);
        assert_eq!(timing.fps(), 60.0);
    }

    #[test]
    fn clock_is_monotonic() {
        let clock = FrameClock::start();
        let a = clock.elapsed_secs();
        let b = clock.elapsed_secs();
        assert!(b >= a);
    }
}
