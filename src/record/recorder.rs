use crate::{
    foundation::{
        core::Millis,
        error::{ChartError, ChartResult},
    },
    record::sink::{FrameSink, SinkConfig},
    render::raster::{FrameRGBA, Rasterizer},
    scene::model::Scene,
    shell::app::{App, UiEvent},
};

/// Options for [`record_playback`].
#[derive(Clone, Debug)]
pub struct RecordOpts {
    pub fps: u32,
    /// Hard stop, whatever is still animating.
    pub max_duration: Millis,
    /// Rasterize frames on a rayon pool.
    pub parallel: bool,
    /// Frames rasterized per batch.
    pub chunk_size: usize,
    /// Worker threads; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for RecordOpts {
    fn default() -> Self {
        Self {
            fps: 30,
            max_duration: Millis(120_000),
            parallel: true,
            chunk_size: 32,
            threads: None,
        }
    }
}

/// Summary of a recording.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordStats {
    pub frames: u64,
    /// Virtual time covered, first to last frame.
    pub duration: Millis,
    /// Steps the timeline advanced through.
    pub steps: usize,
}

impl RecordOpts {
    /// Virtual time between frames.
    pub fn frame_interval(&self) -> ChartResult<Millis> {
        if self.fps == 0 {
            return Err(ChartError::validation("fps must be >= 1"));
        }
        Ok(Millis((1000 / u64::from(self.fps)).max(1)))
    }
}

/// Record the mounted chart.
///
/// A bubble chart is started playing (from wherever its timeline is; playback on the last step
/// rewinds). Frames are captured every `1000 / fps` ms of virtual time until playback has stopped
/// and the last animation has finished, or `max_duration` is reached.
#[tracing::instrument(skip_all, fields(fps = opts.fps))]
pub fn record_playback(
    app: &mut App,
    opts: &RecordOpts,
    rasterizer: &Rasterizer,
    sink: &mut dyn FrameSink,
) -> ChartResult<RecordStats> {
    let interval = opts.frame_interval()?;
    let pool = build_thread_pool(opts)?;

    if app.timeline().is_some_and(|t| !t.is_playing) {
        app.dispatch(UiEvent::PlayButton)?;
    }
    let start = app.now();
    let first_step = app.timeline().map_or(0, |t| t.step_index);
    let canvas = app.content_canvas();
    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps: opts.fps,
    })?;

    let mut stats = RecordStats::default();
    let mut batch: Vec<(Millis, Scene)> = Vec::with_capacity(opts.chunk_size.max(1));
    loop {
        let now = app.now();
        batch.push((now, app.frame()?));
        if batch.len() >= opts.chunk_size.max(1) {
            flush(&mut batch, &mut stats, rasterizer, pool.as_ref(), sink)?;
        }

        let playing = app.timeline().is_some_and(|t| t.is_playing);
        let settled = app.busy_until().is_none_or(|end| now >= end);
        let elapsed = now.saturating_sub(start);
        if (!playing && settled) || elapsed >= opts.max_duration {
            break;
        }
        app.advance(interval)?;
        app.poll_view();
    }
    flush(&mut batch, &mut stats, rasterizer, pool.as_ref(), sink)?;
    sink.end()?;

    stats.duration = app.now().saturating_sub(start);
    stats.steps = app
        .timeline()
        .map_or(0, |t| t.step_index.saturating_sub(first_step));
    tracing::info!(frames = stats.frames, duration_ms = stats.duration.0, "recording done");
    Ok(stats)
}

/// Rasterize scenes in order, optionally in parallel on the current rayon pool.
pub fn rasterize_all(
    scenes: &[Scene],
    rasterizer: &Rasterizer,
    parallel: bool,
) -> ChartResult<Vec<FrameRGBA>> {
    if parallel {
        use rayon::prelude::*;
        scenes
            .par_iter()
            .map(|s| rasterizer.rasterize(s))
            .collect()
    } else {
        scenes.iter().map(|s| rasterizer.rasterize(s)).collect()
    }
}

fn flush(
    batch: &mut Vec<(Millis, Scene)>,
    stats: &mut RecordStats,
    rasterizer: &Rasterizer,
    pool: Option<&rayon::ThreadPool>,
    sink: &mut dyn FrameSink,
) -> ChartResult<()> {
    if batch.is_empty() {
        return Ok(());
    }
    let (times, scenes): (Vec<Millis>, Vec<Scene>) = batch.drain(..).unzip();
    let frames = match pool {
        Some(pool) => pool.install(|| rasterize_all(&scenes, rasterizer, true))?,
        None => rasterize_all(&scenes, rasterizer, false)?,
    };
    for (at, frame) in times.into_iter().zip(frames) {
        sink.push_frame(stats.frames, at, &frame)?;
        stats.frames += 1;
    }
    Ok(())
}

fn build_thread_pool(opts: &RecordOpts) -> ChartResult<Option<rayon::ThreadPool>> {
    if !opts.parallel {
        return Ok(None);
    }
    if let Some(n) = opts.threads
        && n == 0
    {
        return Err(ChartError::validation(
            "record threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = opts.threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| ChartError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/record/recorder.rs"]
mod tests;
