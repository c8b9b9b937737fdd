//! The scroll-driven scene engine.
//!
//! [`ScrollSceneEngine`] owns every piece of mutable state: the scene, the
//! scroll tracker, the camera motion filter, the section animator and the
//! in-flight tweens. Hosts feed it [`HostEvent`]s and give it a
//! [`FrameSink`] to present into.

mod accessors;
mod event;
pub mod replay;
mod sink;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use self::event::{HostEvent, Viewport};
pub use self::replay::Replayer;
pub use self::sink::{FrameSink, JsonLinesSink, NullSink, SnapshotSink};
use crate::animation::{SectionAnimator, TweenEngine};
use crate::camera::CameraMotionController;
use crate::error::ParallaxError;
use crate::options::Options;
use crate::scene::{FrameInfo, Scene};
use crate::scroll::ScrollTracker;
use crate::util::frame_timing::FrameTiming;

/// Scroll-synchronized scene controller.
///
/// Everything runs on the caller's thread. Scroll and resize events may
/// arrive any number of times between frames; each [`tick`](Self::tick)
/// sees only the latest state.
#[derive(Debug)]
pub struct ScrollSceneEngine {
    options: Options,
    scene: Scene,
    viewport: Viewport,
    tracker: ScrollTracker,
    camera_motion: CameraMotionController,
    animator: SectionAnimator,
    tweens: TweenEngine,
    frame_count: u64,
    last_time: f64,
    timing: FrameTiming,
}

impl ScrollSceneEngine {
    /// Build the engine from validated options.
    ///
    /// The particle shell uses `options.particles.seed` when set and OS
    /// entropy otherwise.
    pub fn new(
        options: Options,
        viewport: Viewport,
    ) -> Result<Self, ParallaxError> {
        let mut rng = match options.particles.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(options, viewport, &mut rng)
    }

    /// Build the engine drawing particles from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        options: Options,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self, ParallaxError> {
        options.validate()?;

        let viewport = viewport.capped(options.scene.max_pixel_ratio);
        let scene = Scene::assemble(&options, viewport.aspect(), rng);
        let tracker = ScrollTracker::new(f64::from(viewport.height));
        let camera_motion = CameraMotionController::new(&options.camera);
        let animator = SectionAnimator::from_options(&options.sections);

        log::info!(
            "engine ready: {}x{} @{}x, {} section bindings",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio,
            animator.bindings().len()
        );

        Ok(Self {
            options,
            scene,
            viewport,
            tracker,
            camera_motion,
            animator,
            tweens: TweenEngine::new(),
            frame_count: 0,
            last_time: 0.0,
            timing: FrameTiming::new(),
        })
    }

    // -- Input --

    /// Dispatch one host event. Frames are presented into `sink`.
    pub fn handle_event<S: FrameSink + ?Sized>(
        &mut self,
        event: HostEvent,
        sink: &mut S,
    ) {
        match event {
            HostEvent::Scrolled { offset } => {
                let _ = self.handle_scroll(offset);
            }
            HostEvent::Resized { viewport } => self.resize(viewport),
            HostEvent::Frame { time } => self.tick(time, sink),
        }
    }

    /// Record a new scroll offset.
    ///
    /// Fires the bindings of the section landed on (and, under
    /// `EnumerateCrossed`, of the sections jumped over). Returns how many
    /// tweens were requested.
    pub fn handle_scroll(&mut self, offset: f64) -> usize {
        match self.tracker.apply(offset) {
            Some(change) => {
                self.animator.on_section_change(change, &mut self.tweens)
            }
            None => 0,
        }
    }

    /// Adopt a new viewport.
    ///
    /// Updates the section height and camera aspect. The current section is
    /// not re-evaluated until the next scroll event.
    pub fn resize(&mut self, viewport: Viewport) {
        let viewport = viewport.capped(self.options.scene.max_pixel_ratio);
        self.tracker.set_section_height(f64::from(viewport.height));
        self.scene.camera.resize(viewport.width, viewport.height);
        self.viewport = viewport;
        log::debug!(
            "resized to {}x{} @{}x",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );
    }

    // -- Frame --

    /// Run one frame at host time `time` (seconds) and present it.
    ///
    /// Order: camera follows scroll, tweens advance, meshes spin and bob,
    /// then the frame is submitted.
    pub fn tick<S: FrameSink + ?Sized>(&mut self, time: f64, sink: &mut S) {
        self.camera_motion.update(
            self.tracker.raw_offset(),
            self.tracker.section_height(),
            time,
            &mut self.scene.camera,
        );

        let _ = self.tweens.advance(time, self.scene.meshes_mut());

        let spin_rate = self.options.scene.spin_rate;
        let bob_amplitude = self.options.scene.bob_amplitude;
        for (index, mesh) in self.scene.meshes_mut().iter_mut().enumerate() {
            mesh.rotation.y += spin_rate;
            mesh.position.y = mesh.base_position.y
                + bob_amplitude * (time + index as f64).sin();
        }

        self.last_time = time;
        sink.submit(&self.scene, self.frame_info());
        self.frame_count += 1;
        self.timing.record(time);
    }

    fn frame_info(&self) -> FrameInfo {
        FrameInfo {
            frame: self.frame_count,
            time: self.last_time,
            scroll_offset: self.tracker.raw_offset(),
            section: self.tracker.section_index(),
        }
    }
}
