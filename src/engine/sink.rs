//! Frame output boundary.
//!
//! The engine never draws. Each tick hands the finished scene to a
//! [`FrameSink`], which forwards it to whatever renders: a JS callback on the
//! web, a JSON writer in the replay binary, or a collector in tests.

use std::io::Write;

use crate::error::ParallaxError;
use crate::scene::{FrameInfo, FrameSnapshot, Scene};

/// Receives one finished frame per tick. Submission is infallible.
pub trait FrameSink {
    /// Present `scene` as frame `info`.
    fn submit(&mut self, scene: &Scene, info: FrameInfo);
}

impl<F: FnMut(&Scene, FrameInfo)> FrameSink for F {
    fn submit(&mut self, scene: &Scene, info: FrameInfo) {
        self(scene, info);
    }
}

/// Discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn submit(&mut self, _scene: &Scene, _info: FrameInfo) {}
}

/// Keeps a [`FrameSnapshot`] of every submitted frame.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSink {
    frames: Vec<FrameSnapshot>,
}

impl SnapshotSink {
    /// Empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames captured so far.
    #[must_use]
    pub fn frames(&self) -> &[FrameSnapshot] {
        &self.frames
    }

    /// Most recent frame.
    #[must_use]
    pub fn last(&self) -> Option<&FrameSnapshot> {
        self.frames.last()
    }

    /// Take the captured frames.
    #[must_use]
    pub fn into_frames(self) -> Vec<FrameSnapshot> {
        self.frames
    }
}

impl FrameSink for SnapshotSink {
    fn submit(&mut self, scene: &Scene, info: FrameInfo) {
        self.frames.push(FrameSnapshot::capture(scene, info));
    }
}

/// Writes one JSON [`FrameSnapshot`] per line.
///
/// Write failures cannot surface through [`FrameSink::submit`]; the first
/// one is kept, later frames are dropped, and [`finish`](Self::finish)
/// reports it.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: u64,
    error: Option<ParallaxError>,
}

impl<W: Write> JsonLinesSink<W> {
    /// Sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            error: None,
        }
    }

    /// Frames written so far.
    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush and return the writer, or the first write error.
    pub fn finish(mut self) -> Result<W, ParallaxError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_frame(
        &mut self,
        snapshot: &FrameSnapshot,
    ) -> Result<(), ParallaxError> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn submit(&mut self, scene: &Scene, info: FrameInfo) {
        if self.error.is_some() {
            return;
        }
        let snapshot = FrameSnapshot::capture(scene, info);
        match self.write_frame(&snapshot) {
            Ok(()) => self.written += 1,
            Err(e) => {
                log::error!("frame {} export failed: {e}", info.frame);
                self.error = Some(e);
            }
        }
    }
}
