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

/// Renderer that rebuilds the whole scene on every step: axes plus freshly faded-in marks.
#[derive(Debug, Default)]
pub struct FullRedrawRenderer {
    surface: Option<(Canvas, Rgba8)>,
    axes: Vec<Axis>,
    marks: Vec<MarkAnim>,
    completion: Completion,
}

impl FullRedrawRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepRenderer for FullRedrawRenderer {
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
                MarkAnim::entering(target, ctx.now, ctx.style.fade_in, ctx.style.ease)
            })
            .collect();
        self.completion.start(ctx.now.saturating_add(ctx.style.fade_in))
    }

    fn show_step(&mut self, ctx: &DrawCtx<'_>) -> TransitionId {
        self.draw(ctx)
    }

    fn scene(&self, now: Millis) -> Option<Scene> {
        let (canvas, background) = self.surface?;
        let mut scene = Scene::new(canvas, background);
        scene.nodes.extend(self.axes.iter().cloned().map(Node::Axis));
        scene
            .nodes
            .extend(self.marks.iter().map(|m| Node::Mark(m.sample(now))));
        Some(scene)
    }

    fn poll_completion(&mut self, now: Millis) -> Option<TransitionId> {
        self.completion.poll(now)
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
#[path = "../../tests/unit/render/full_redraw.rs"]
mod tests;
