use crate::{
    data::dataset::DataPoint,
    foundation::{
        color::Rgba8,
        core::{Canvas, Millis, Padding},
    },
    render::{
        axis::{bottom_axis, left_axis},
        marks::BubbleStyle,
    },
    scale::set::ScaleSet,
    scene::model::{Axis, Scene},
};

/// Handle of one started animation, reported back once through
/// [`StepRenderer::poll_completion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionId(pub u64);

/// Everything a renderer needs to build marks for one step.
#[derive(Clone, Copy, Debug)]
pub struct DrawCtx<'a> {
    /// Points of the step being shown.
    pub points: &'a [DataPoint],
    /// Scales for the current surface.
    pub scales: &'a ScaleSet,
    /// Surface size.
    pub canvas: Canvas,
    /// Plot padding.
    pub padding: &'a Padding,
    /// Variant style.
    pub style: &'a BubbleStyle,
    /// Background fill.
    pub background: Rgba8,
    /// Virtual time the draw happens at.
    pub now: Millis,
}

impl DrawCtx<'_> {
    /// Bottom and left axes for this context.
    pub fn axes(&self) -> Vec<Axis> {
        let h = self.canvas.h();
        vec![
            bottom_axis(
                &self.scales.x,
                h - (self.padding.top + self.padding.bottom),
                self.style.x_ticks,
            ),
            left_axis(&self.scales.y, self.padding.left, self.style.y_ticks),
        ]
    }
}

/// Builds and animates the bubble scene of a chart view.
///
/// `draw` starts from scratch; `show_step` moves to another step the way the variant does it.
/// Both return the id of the animation they started.
pub trait StepRenderer: Send {
    /// Discard everything and draw `ctx.points` fresh.
    fn draw(&mut self, ctx: &DrawCtx<'_>) -> TransitionId;

    /// Show another step.
    fn show_step(&mut self, ctx: &DrawCtx<'_>) -> TransitionId;

    /// Sampled scene at `now`, `None` before the first draw.
    fn scene(&self, now: Millis) -> Option<Scene>;

    /// Report the current animation once it has finished. Superseded animations are never
    /// reported.
    fn poll_completion(&mut self, now: Millis) -> Option<TransitionId>;

    /// End time of the animation still running, if any.
    fn busy_until(&self) -> Option<Millis>;

    /// Drop the scene.
    fn clear(&mut self);
}

/// Pending-completion bookkeeping shared by the renderers.
#[derive(Clone, Debug, Default)]
pub(crate) struct Completion {
    next_id: u64,
    pending: Option<(TransitionId, Millis)>,
}

impl Completion {
    /// Start a new animation ending at `end`, replacing any pending one.
    pub(crate) fn start(&mut self, end: Millis) -> TransitionId {
        let id = TransitionId(self.next_id);
        self.next_id += 1;
        if let Some((old, _)) = self.pending.replace((id, end)) {
            tracing::trace!(?old, ?id, "transition superseded");
        }
        id
    }

    pub(crate) fn poll(&mut self, now: Millis) -> Option<TransitionId> {
        match self.pending {
            Some((id, end)) if now >= end => {
                self.pending = None;
                Some(id)
            }
            _ => None,
        }
    }

    pub(crate) fn busy_until(&self) -> Option<Millis> {
        self.pending.map(|(_, end)| end)
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
