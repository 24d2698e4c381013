use std::sync::Arc;

use crate::{
    charts::tooltip::{Tooltip, hit_test},
    config::ChartConfig,
    data::{dataset::Dataset, date::display_date},
    foundation::{
        color::Rgba8,
        core::{Canvas, Millis, Padding, Point},
        error::{ChartError, ChartResult},
    },
    render::{
        backend::{DrawCtx, StepRenderer, TransitionId},
        full_redraw::FullRedrawRenderer,
        marks::BubbleStyle,
        transition::TransitionRenderer,
    },
    scale::set::{ScaleCache, ScaleSet},
    scene::model::{Node, Scene, TextAnchor, TextNode},
    timeline::{
        clock::{Scheduler, TimerId},
        controller::{TimelineController, TimelineState},
    },
};

/// How a bubble view moves between steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleVariant {
    /// Rebuild everything on each step.
    Animated,
    /// Interpolate marks between steps.
    Transition,
}

/// Icon shown on the play button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
}

/// Range input state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slider {
    pub min: usize,
    pub max: usize,
    pub value: usize,
}

/// Timeline controls below a bubble chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controls {
    pub icon: PlayIcon,
    pub slider: Slider,
    /// Current step's key as `M/D/YYYY`.
    pub date_label: String,
}

/// A bubble chart with its own timeline.
///
/// The view owns the controller (and so the playback timer), the scale cache and the renderer of
/// its variant. Draws requested while no surface is attached are deferred until [`attach`].
///
/// [`attach`]: BubbleChartView::attach
pub struct BubbleChartView {
    variant: BubbleVariant,
    dataset: Arc<Dataset>,
    style: BubbleStyle,
    padding: Padding,
    background: Rgba8,
    scales: ScaleCache,
    timeline: Option<TimelineController>,
    renderer: Box<dyn StepRenderer>,
    surface: Option<Canvas>,
    deferred: bool,
    tooltip: Option<Tooltip>,
}

impl BubbleChartView {
    /// Build a view over `dataset`. An empty dataset yields a view that only shows a placeholder.
    pub fn new(variant: BubbleVariant, dataset: Arc<Dataset>, config: &ChartConfig) -> Self {
        let style = match variant {
            BubbleVariant::Animated => config.animated.clone(),
            BubbleVariant::Transition => config.transition.clone(),
        };
        let renderer: Box<dyn StepRenderer> = match variant {
            BubbleVariant::Animated => Box::new(FullRedrawRenderer::new()),
            BubbleVariant::Transition => Box::new(TransitionRenderer::new()),
        };
        let timeline = match TimelineController::new(dataset.len(), config.playback_period) {
            Ok(t) => Some(t),
            Err(err) => {
                tracing::warn!(%err, ?variant, "bubble chart has nothing to play");
                None
            }
        };
        Self {
            variant,
            scales: ScaleCache::new(dataset.extent(), config.padding, style.palette),
            dataset,
            style,
            padding: config.padding,
            background: config.background,
            timeline,
            renderer,
            surface: None,
            deferred: false,
            tooltip: None,
        }
    }

    pub fn variant(&self) -> BubbleVariant {
        self.variant
    }

    /// Timeline state, `None` for an empty dataset.
    pub fn state(&self) -> Option<TimelineState> {
        self.timeline.as_ref().map(TimelineController::state)
    }

    /// Playback timer, if one is running.
    pub fn timer(&self) -> Option<TimerId> {
        self.timeline.as_ref().and_then(TimelineController::timer)
    }

    /// Currently attached surface.
    pub fn surface(&self) -> Option<Canvas> {
        self.surface
    }

    /// Scales for the attached surface.
    pub fn scales(&self) -> Option<ScaleSet> {
        self.scales.current()
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Attach (or resize) the surface and redraw the current step from scratch.
    ///
    /// An empty canvas detaches the surface; the next attach draws.
    pub fn attach(&mut self, canvas: Canvas, now: Millis) -> ChartResult<Option<TransitionId>> {
        if canvas.is_empty() {
            tracing::debug!(?canvas, "surface detached");
            self.surface = None;
            self.scales.invalidate();
            self.deferred = true;
            return Ok(None);
        }
        self.surface = Some(canvas);
        self.tooltip = None;
        self.redraw(now)
    }

    /// Draw the current step from scratch.
    pub fn redraw(&mut self, now: Millis) -> ChartResult<Option<TransitionId>> {
        let Some(step) = self.step() else {
            return Ok(None);
        };
        self.render(step, true, now)
    }

    /// Slider input.
    pub fn handle_slider(
        &mut self,
        index: usize,
        sched: &mut dyn Scheduler,
    ) -> ChartResult<Option<TransitionId>> {
        let now = sched.now();
        let Some(timeline) = self.timeline.as_mut() else {
            return Ok(None);
        };
        let step = timeline.scrub_to(index, sched);
        self.render(step, false, now)
    }

    /// Play/pause button.
    pub fn handle_play_button(
        &mut self,
        sched: &mut dyn Scheduler,
    ) -> ChartResult<Option<TransitionId>> {
        let now = sched.now();
        let Some(timeline) = self.timeline.as_mut() else {
            return Ok(None);
        };
        match timeline.toggle(sched) {
            Some(step) => self.render(step, false, now),
            None => Ok(None),
        }
    }

    /// Return `true` if `id` is this view's playback timer.
    pub fn owns_timer(&self, id: TimerId) -> bool {
        self.timer() == Some(id)
    }

    /// A fired playback timer.
    pub fn on_timer(
        &mut self,
        id: TimerId,
        sched: &mut dyn Scheduler,
    ) -> ChartResult<Option<TransitionId>> {
        let now = sched.now();
        let Some(timeline) = self.timeline.as_mut() else {
            return Ok(None);
        };
        match timeline.on_tick(id, sched) {
            Some(step) => self.render(step, false, now),
            None => Ok(None),
        }
    }

    /// Report a finished animation once.
    pub fn poll(&mut self, now: Millis) -> Option<TransitionId> {
        self.renderer.poll_completion(now)
    }

    /// End of the running animation, if any.
    pub fn busy_until(&self) -> Option<Millis> {
        self.renderer.busy_until()
    }

    /// Pointer moved over the surface.
    pub fn pointer_move(&mut self, pointer: Point, now: Millis) {
        if !self.style.tooltips {
            return;
        }
        let live = self
            .step()
            .and_then(|s| self.dataset.points(s).ok())
            .map_or(0, <[_]>::len);
        let hit = self
            .renderer
            .scene(now)
            .and_then(|scene| hit_test(&scene, pointer, live));
        self.tooltip = match (hit, self.step()) {
            (Some(key), Some(step)) => self
                .dataset
                .points(step)
                .ok()
                .and_then(|pts| pts.get(key))
                .map(|p| Tooltip::new(key, *p, pointer)),
            _ => None,
        };
    }

    /// Pointer left the surface or a mark.
    pub fn pointer_out(&mut self) {
        self.tooltip = None;
    }

    /// Tear down: stop playback (cancelling the timer) and drop the scene.
    pub fn unmount(&mut self, sched: &mut dyn Scheduler) {
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.stop(sched);
        }
        self.renderer.clear();
        self.tooltip = None;
        self.deferred = false;
        tracing::debug!(variant = ?self.variant, "bubble chart unmounted");
    }

    /// Control state, `None` for an empty dataset.
    pub fn controls(&self) -> Option<Controls> {
        let timeline = self.timeline.as_ref()?;
        let key = self.dataset.key(timeline.step_index()).ok()?;
        Some(Controls {
            icon: if timeline.is_playing() {
                PlayIcon::Pause
            } else {
                PlayIcon::Play
            },
            slider: Slider {
                min: 0,
                max: timeline.last_index(),
                value: timeline.step_index(),
            },
            date_label: display_date(key),
        })
    }

    /// Scene at `now`, with the tooltip on top.
    pub fn frame(&self, now: Millis) -> ChartResult<Scene> {
        let canvas = self.surface.ok_or(ChartError::SurfaceUnavailable)?;
        if self.timeline.is_none() {
            return Ok(placeholder_scene(canvas, self.background));
        }
        let mut scene = self
            .renderer
            .scene(now)
            .unwrap_or_else(|| Scene::new(canvas, self.background));
        if let Some(tooltip) = &self.tooltip {
            scene.nodes.extend(tooltip.nodes());
        }
        Ok(scene)
    }

    fn step(&self) -> Option<usize> {
        self.timeline.as_ref().map(TimelineController::step_index)
    }

    fn render(
        &mut self,
        step: usize,
        full: bool,
        now: Millis,
    ) -> ChartResult<Option<TransitionId>> {
        let Some(canvas) = self.surface else {
            tracing::debug!(step, "no surface attached, deferring draw");
            self.deferred = true;
            return Ok(None);
        };
        let points = self.dataset.points(step)?;
        let scales = self.scales.get(canvas);
        let ctx = DrawCtx {
            points,
            scales: &scales,
            canvas,
            padding: &self.padding,
            style: &self.style,
            background: self.background,
            now,
        };
        let id = if full || self.deferred {
            self.renderer.draw(&ctx)
        } else {
            self.renderer.show_step(&ctx)
        };
        self.deferred = false;
        tracing::debug!(step, ?id, full, "render step");
        Ok(Some(id))
    }
}

/// Scene shown when there is nothing to plot.
pub fn placeholder_scene(canvas: Canvas, background: Rgba8) -> Scene {
    let mut scene = Scene::new(canvas, background);
    scene.nodes.push(Node::Text(TextNode {
        pos: Point::new(canvas.w() / 2.0, canvas.h() / 2.0),
        text: "No data".to_owned(),
        anchor: TextAnchor::Middle,
        size: 16.0,
        fill: Rgba8::GRAY,
        opacity: 1.0,
    }));
    scene
}

#[cfg(test)]
#[path = "../../tests/unit/charts/bubble.rs"]
mod tests;
