use crate::{
    foundation::{
        core::Millis,
        error::{ChartError, ChartResult},
    },
    timeline::clock::{Scheduler, TimerId},
};

/// Default playback period between automatic steps.
pub const DEFAULT_PLAYBACK_PERIOD: Millis = Millis(1000);

/// Snapshot of the controller's observable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineState {
    /// Shown step, always in `[0, key_count - 1]`.
    pub step_index: usize,
    /// Whether automatic playback is active.
    pub is_playing: bool,
}

/// Single source of truth for which step is shown and whether playback runs.
///
/// Operations return `Some(step)` when the caller must redraw (or animate to) that step. At most
/// one playback timer exists per controller; it is owned here and cancelled by [`stop`].
///
/// [`stop`]: TimelineController::stop
#[derive(Debug)]
pub struct TimelineController {
    step: usize,
    key_count: usize,
    playing: bool,
    timer: Option<TimerId>,
    period: Millis,
}

impl TimelineController {
    /// Controller at step 0 over `key_count` steps.
    pub fn new(key_count: usize, period: Millis) -> ChartResult<Self> {
        if key_count == 0 {
            return Err(ChartError::EmptyDataset);
        }
        Ok(Self {
            step: 0,
            key_count,
            playing: false,
            timer: None,
            period,
        })
    }

    /// Current state.
    pub fn state(&self) -> TimelineState {
        TimelineState {
            step_index: self.step,
            is_playing: self.playing,
        }
    }

    /// Shown step.
    pub fn step_index(&self) -> usize {
        self.step
    }

    /// Whether playback is active.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Number of steps.
    pub fn key_count(&self) -> usize {
        self.key_count
    }

    /// Final valid step index.
    pub fn last_index(&self) -> usize {
        self.key_count - 1
    }

    /// Playback timer, if one is scheduled.
    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Jump to `index`, clamped into range. Playback is left as it is unless the jump lands on the
    /// last step, which stops it.
    pub fn scrub_to(&mut self, index: usize, sched: &mut dyn Scheduler) -> usize {
        let clamped = index.min(self.last_index());
        if clamped != index {
            tracing::warn!(index, clamped, "scrub index out of range, clamping");
        }
        self.step = clamped;
        tracing::debug!(step = self.step, "scrub");
        self.observe(sched);
        self.step
    }

    /// Start playback. No-op while already playing.
    ///
    /// Playback started on the last step rewinds to step 0 first, and the rewind is returned as a
    /// redraw request.
    pub fn play(&mut self, sched: &mut dyn Scheduler) -> Option<usize> {
        if self.playing {
            return None;
        }
        self.playing = true;

        let mut redraw = None;
        if self.step == self.last_index() {
            self.step = 0;
            redraw = Some(0);
        }

        if self.step == self.last_index() {
            // Single-step timeline: nothing to play through.
            self.observe(sched);
            return redraw;
        }

        self.cancel_timer(sched);
        self.timer = Some(sched.set_interval(self.period));
        tracing::debug!(step = self.step, period = self.period.0, "play");
        redraw
    }

    /// Stop playback and cancel the timer. Safe to call when not playing.
    pub fn stop(&mut self, sched: &mut dyn Scheduler) {
        self.cancel_timer(sched);
        if self.playing {
            tracing::debug!(step = self.step, "stop");
        }
        self.playing = false;
    }

    /// Stop if playing, otherwise play.
    pub fn toggle(&mut self, sched: &mut dyn Scheduler) -> Option<usize> {
        if self.playing {
            self.stop(sched);
            None
        } else {
            self.play(sched)
        }
    }

    /// Handle a fired timer. Ticks from any timer other than the current one are ignored.
    pub fn on_tick(&mut self, id: TimerId, sched: &mut dyn Scheduler) -> Option<usize> {
        if self.timer != Some(id) {
            tracing::trace!(?id, "ignoring stale timer tick");
            return None;
        }
        if !self.playing || self.step >= self.last_index() {
            self.observe(sched);
            return None;
        }
        self.step += 1;
        tracing::debug!(step = self.step, "tick");
        self.observe(sched);
        Some(self.step)
    }

    /// Auto-stop check run after every state change: playback never stays active on the last step.
    pub fn observe(&mut self, sched: &mut dyn Scheduler) {
        if self.playing && self.step == self.last_index() {
            self.stop(sched);
        }
    }

    fn cancel_timer(&mut self, sched: &mut dyn Scheduler) {
        if let Some(id) = self.timer.take() {
            sched.clear_interval(id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/controller.rs"]
mod tests;
