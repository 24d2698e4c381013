use std::collections::BTreeMap;

use crate::{
    foundation::{
        color::Rgba8,
        core::{Canvas, Millis},
    },
    render::{
        backend::{Completion, DrawCtx, StepRenderer, TransitionId},
        marks::{MarkAnim, target_mark},
    },
    scene::model::{Axis, Node, Scene},
};

/// Renderer that keeps its marks across steps and interpolates them.
///
/// Marks are bound to points by index. On a step change a mark with a counterpart moves from its
/// current (possibly mid-flight) values toward the new target, surplus points enter faded out,
/// and marks without a counterpart fade out and are dropped once gone.
#[derive(Debug, Default)]
pub struct TransitionRenderer {
    surface: Option<(Canvas, Rgba8)>,
    axes: Vec<Axis>,
    marks: BTreeMap<usize, MarkAnim>,
    completion: Completion,
}

impl TransitionRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of marks currently held, exiting ones included.
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    fn prune(&mut self, now: Millis) {
        let before = self.marks.len();
        self.marks.retain(|_, m| !m.is_gone(now));
        let removed = before - self.marks.len();
        if removed > 0 {
            tracing::trace!(removed, "pruned exited marks");
        }
    }
}

impl StepRenderer for TransitionRenderer {
    #[tracing::instrument(skip_all, fields(points = ctx.points.len()))]
    fn draw(&mut self, ctx: &DrawCtx<'_>) -> TransitionId {
        self.surface = Some((ctx.canvas, ctx.background));
        self.axes = ctx.axes();
        self.marks = ctx
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let target = target_mark(i, p, ctx.scales, ctx.style);
                (
                    i,
                    MarkAnim::entering(target, ctx.now, ctx.style.fade_in, ctx.style.ease),
                )
            })
            .collect();
        self.completion.start(ctx.now.saturating_add(ctx.style.fade_in))
    }

    #[tracing::instrument(skip_all, fields(points = ctx.points.len()))]
    fn show_step(&mut self, ctx: &DrawCtx<'_>) -> TransitionId {
        if self.surface.is_none() {
            return self.draw(ctx);
        }
        let (now, duration, ease) = (ctx.now, ctx.style.transition, ctx.style.ease);
        self.prune(now);
        self.surface = Some((ctx.canvas, ctx.background));
        self.axes = ctx.axes();

        for (i, p) in ctx.points.iter().enumerate() {
            let target = target_mark(i, p, ctx.scales, ctx.style);
            match self.marks.get_mut(&i) {
                Some(mark) => mark.update(target, now, duration, ease),
                None => {
                    self.marks.insert(i, MarkAnim::entering(target, now, duration, ease));
                }
            }
        }
        for mark in self.marks.range_mut(ctx.points.len()..).map(|(_, m)| m) {
            if !mark.exiting {
                mark.exit(now, duration, ease);
            }
        }
        self.completion.start(now.saturating_add(duration))
    }

    fn scene(&self, now: Millis) -> Option<Scene> {
        let (canvas, background) = self.surface?;
        let mut scene = Scene::new(canvas, background);
        scene.nodes.extend(self.axes.iter().cloned().map(Node::Axis));
        scene
            .nodes
            .extend(self.marks.values().map(|m| Node::Mark(m.sample(now))));
        Some(scene)
    }

    fn poll_completion(&mut self, now: Millis) -> Option<TransitionId> {
        let done = self.completion.poll(now)?;
        self.prune(now);
        Some(done)
    }

    fn busy_until(&self) -> Option<Millis> {
        self.completion.busy_until()
    }

    fn clear(&mut self) {
        self.surface = None;
        self.axes.clear();
        self.marks.clear();
        self.completion.cancel();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/transition.rs"]
mod tests;
