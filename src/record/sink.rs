use std::path::{Path, PathBuf};

use crate::{
    foundation::{core::Millis, error::ChartResult},
    render::raster::FrameRGBA,
};

/// Configuration provided to a [`FrameSink`] before a recording starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

/// Consumer of recorded frames.
///
/// `push_frame` is called in strictly increasing frame order, between one `begin` and one `end`.
pub trait FrameSink: Send {
    fn begin(&mut self, cfg: SinkConfig) -> ChartResult<()>;
    /// Push frame `idx`, captured at virtual time `at`.
    fn push_frame(&mut self, idx: u64, at: Millis, frame: &FrameRGBA) -> ChartResult<()>;
    fn end(&mut self) -> ChartResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, Millis, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in order.
    pub fn frames(&self) -> &[(u64, Millis, FrameRGBA)] {
        &self.frames
    }

    /// Return `true` once `end` was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ChartResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, at: Millis, frame: &FrameRGBA) -> ChartResult<()> {
        self.frames.push((idx, at, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> ChartResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Writes each frame as `frame_00000.png` into a directory.
#[derive(Debug)]
pub struct PngDirSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn frame_path(&self, idx: u64) -> PathBuf {
        self.dir.join(format!("frame_{idx:05}.png"))
    }
}

impl FrameSink for PngDirSink {
    fn begin(&mut self, cfg: SinkConfig) -> ChartResult<()> {
        tracing::debug!(dir = %self.dir.display(), ?cfg, "png sink begin");
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, _at: Millis, frame: &FrameRGBA) -> ChartResult<()> {
        let path = self.frame_path(idx);
        frame.save_png(&path)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> ChartResult<()> {
        tracing::debug!(frames = self.written.len(), "png sink end");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/record/sink.rs"]
mod tests;
