//! Fixed-step offline driver.
//!
//! Stands in for the browser's frame callback: frames are spaced exactly
//! `1 / fps` apart, and every script sample whose time has come is applied
//! as a scroll event before the frame it precedes.

use super::{FrameSink, ScrollSceneEngine};
use crate::error::ParallaxError;
use crate::scroll::ScrollScript;

/// Replays a [`ScrollScript`] through an engine at a fixed frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Replayer {
    fps: f64,
    settle_secs: f64,
}

impl Replayer {
    /// Replayer at `fps` frames per second that keeps rendering for
    /// `settle_secs` after the last sample so tweens and the camera can land.
    pub fn new(fps: f64, settle_secs: f64) -> Result<Self, ParallaxError> {
        let fps_ok = fps.is_finite() && fps > 0.0;
        if !fps_ok {
            return Err(ParallaxError::InvalidOptions(format!(
                "replay fps must be positive, got {fps}"
            )));
        }
        let settle_ok = settle_secs.is_finite() && settle_secs >= 0.0;
        if !settle_ok {
            return Err(ParallaxError::InvalidOptions(format!(
                "replay settle time must be >= 0, got {settle_secs}"
            )));
        }
        Ok(Self { fps, settle_secs })
    }

    /// Frames per second.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Number of frames a replay of `script` renders.
    #[must_use]
    pub fn frame_count(&self, script: &ScrollScript) -> u64 {
        let span = script.duration() + self.settle_secs;
        (span * self.fps).ceil() as u64 + 1
    }

    /// Drive `engine` through `script`, presenting every frame into `sink`.
    ///
    /// Returns the number of frames rendered.
    pub fn run<S: FrameSink + ?Sized>(
        &self,
        engine: &mut ScrollSceneEngine,
        script: &ScrollScript,
        sink: &mut S,
    ) -> u64 {
        let frames = self.frame_count(script);
        let samples = script.samples();
        let mut cursor = 0;
        let mut fired = 0;

        log::info!(
            "replaying {} samples over {frames} frames at {} fps",
            samples.len(),
            self.fps
        );

        for frame in 0..frames {
            let time = frame as f64 / self.fps;
            while let Some(sample) =
                samples.get(cursor).filter(|s| s.time <= time)
            {
                fired += engine.handle_scroll(sample.offset);
                cursor += 1;
            }
            engine.tick(time, sink);
        }

        log::info!("replay done: {frames} frames, {fired} tweens fired");
        frames
    }
}
