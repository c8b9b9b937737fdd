use serde::Serialize;

/// Host viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: u32,
    /// Height in CSS pixels. Also the height of one scroll section.
    pub height: u32,
    /// Device pixel ratio reported by the host.
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Viewport at pixel ratio 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    /// Width over height, guarding against a zero height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    /// Same viewport with the pixel ratio clamped to `[1, max]`.
    #[must_use]
    pub fn capped(self, max_pixel_ratio: f64) -> Self {
        let pixel_ratio = if self.pixel_ratio.is_finite() {
            self.pixel_ratio.clamp(1.0, max_pixel_ratio.max(1.0))
        } else {
            1.0
        };
        Self {
            pixel_ratio,
            ..self
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 800)
    }
}

/// Platform-agnostic host events.
///
/// The `web` feature translates window events into these; the replay binary
/// synthesizes them from a scroll script.
///
/// # Example
///
/// ```ignore
/// engine.handle_event(HostEvent::Scrolled { offset: 900.0 }, &mut sink);
/// engine.handle_event(HostEvent::Frame { time: 0.016 }, &mut sink);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// The page scrolled.
    Scrolled {
        /// Absolute vertical scroll offset in pixels.
        offset: f64,
    },
    /// The viewport changed size.
    Resized {
        /// New viewport.
        viewport: Viewport,
    },
    /// The host is ready for the next frame.
    Frame {
        /// Seconds since the loop started.
        time: f64,
    },
}
