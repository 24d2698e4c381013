use std::sync::Arc;

use crate::{
    charts::{
        bubble::{BubbleChartView, BubbleVariant, Controls},
        line::AnnotatedLineChart,
    },
    config::ChartConfig,
    data::{dataset::Dataset, series::LineSeries},
    foundation::{
        core::{Canvas, Millis, Point},
        error::ChartResult,
    },
    render::backend::{Completion, TransitionId},
    scene::model::Scene,
    shell::menu::{ChartKind, MenuState},
    timeline::{
        clock::{Scheduler, TimerId, VirtualClock},
        controller::TimelineState,
    },
};

/// Input events delivered to the shell.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// Menu button clicked: toggle the menu.
    MenuButton,
    /// Menu entry clicked, by entry id.
    MenuItem(String),
    /// Slider moved to a step.
    Slider(usize),
    /// Play/pause clicked.
    PlayButton,
    /// Window resized.
    Resize(Canvas),
    /// Pointer moved to a surface position.
    PointerMove(Point),
    /// Pointer left the marks.
    PointerOut,
}

/// The mounted chart.
pub enum ChartView {
    Line(AnnotatedLineChart),
    Bubble(BubbleChartView),
}

impl ChartView {
    fn attach(&mut self, canvas: Canvas, now: Millis) -> ChartResult<Option<TransitionId>> {
        match self {
            Self::Line(v) => Ok(v.attach(canvas, now)),
            Self::Bubble(v) => v.attach(canvas, now),
        }
    }

    fn unmount(&mut self, sched: &mut dyn Scheduler) {
        match self {
            Self::Line(v) => v.unmount(),
            Self::Bubble(v) => v.unmount(sched),
        }
    }

    /// Scene at `now`.
    pub fn frame(&self, now: Millis) -> ChartResult<Scene> {
        match self {
            Self::Line(v) => v.frame(now),
            Self::Bubble(v) => v.frame(now),
        }
    }

    /// Report the view's finished animation once.
    pub fn poll(&mut self, now: Millis) -> Option<TransitionId> {
        match self {
            Self::Line(v) => v.poll(now),
            Self::Bubble(v) => v.poll(now),
        }
    }

    /// End of the view's running animation.
    pub fn busy_until(&self) -> Option<Millis> {
        match self {
            Self::Line(v) => v.busy_until(),
            Self::Bubble(v) => v.busy_until(),
        }
    }

    pub fn as_bubble(&self) -> Option<&BubbleChartView> {
        match self {
            Self::Bubble(v) => Some(v),
            Self::Line(_) => None,
        }
    }

    fn as_bubble_mut(&mut self) -> Option<&mut BubbleChartView> {
        match self {
            Self::Bubble(v) => Some(v),
            Self::Line(_) => None,
        }
    }
}

/// The application shell: menu, mounted chart and the clock that drives both.
///
/// All timers live in one [`VirtualClock`]. [`App::advance`] fires them in order, each handled
/// completely before the next, and completes the menu layout transition when it is due.
pub struct App {
    clock: VirtualClock,
    config: ChartConfig,
    dataset: Arc<Dataset>,
    series: Arc<LineSeries>,
    selected: ChartKind,
    view: ChartView,
    viewport: Canvas,
    menu_open: bool,
    layout: Completion,
}

impl App {
    /// Shell with the default chart mounted.
    pub fn new(config: ChartConfig, dataset: Dataset, series: LineSeries) -> ChartResult<Self> {
        Self::with_view(config, dataset, series, ChartKind::default())
    }

    /// Shell with `kind` mounted.
    pub fn with_view(
        config: ChartConfig,
        dataset: Dataset,
        series: LineSeries,
        kind: ChartKind,
    ) -> ChartResult<Self> {
        config.validate()?;
        let dataset = Arc::new(dataset);
        let series = Arc::new(series);
        let view = build_view(kind, &config, &dataset, &series);
        let mut app = Self {
            clock: VirtualClock::new(),
            viewport: config.viewport,
            config,
            dataset,
            series,
            selected: kind,
            view,
            menu_open: false,
            layout: Completion::default(),
        };
        let canvas = app.content_canvas();
        app.view.attach(canvas, app.clock.now())?;
        tracing::debug!(?kind, ?canvas, "app mounted");
        Ok(app)
    }

    /// Current virtual time.
    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn selected(&self) -> ChartKind {
        self.selected
    }

    pub fn view(&self) -> &ChartView {
        &self.view
    }

    /// Menu panel state.
    pub fn menu(&self) -> MenuState {
        MenuState::new(self.menu_open, self.selected)
    }

    /// Controls of a mounted bubble chart.
    pub fn controls(&self) -> Option<Controls> {
        self.view.as_bubble()?.controls()
    }

    /// Timeline of a mounted bubble chart.
    pub fn timeline(&self) -> Option<TimelineState> {
        self.view.as_bubble()?.state()
    }

    /// Number of scheduled timers.
    pub fn active_timers(&self) -> usize {
        self.clock.active_timers()
    }

    /// Area available to the chart for the current menu state.
    pub fn content_canvas(&self) -> Canvas {
        self.config.content_canvas(self.viewport, self.menu_open)
    }

    /// Return `true` while the menu open/close transition runs.
    pub fn layout_in_progress(&self) -> bool {
        self.layout.busy_until().is_some()
    }

    /// Latest time anything is still animating: the layout, the chart, or both.
    pub fn busy_until(&self) -> Option<Millis> {
        match (self.layout.busy_until(), self.view.busy_until()) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    /// Scene of the mounted chart at the current time.
    pub fn frame(&self) -> ChartResult<Scene> {
        self.view.frame(self.clock.now())
    }

    /// Report the mounted chart's finished animation once.
    pub fn poll_view(&mut self) -> Option<TransitionId> {
        self.view.poll(self.clock.now())
    }

    /// Handle one input event at the current time.
    #[tracing::instrument(skip(self))]
    pub fn dispatch(&mut self, event: UiEvent) -> ChartResult<()> {
        let now = self.clock.now();
        match event {
            UiEvent::MenuButton => {
                self.menu_open = !self.menu_open;
                let id = self
                    .layout
                    .start(now.saturating_add(self.config.layout_transition));
                tracing::debug!(open = self.menu_open, ?id, "menu toggled");
            }
            UiEvent::MenuItem(id) => self.select(ChartKind::from_menu_id(&id))?,
            UiEvent::Slider(index) => {
                if let Some(v) = self.view.as_bubble_mut() {
                    v.handle_slider(index, &mut self.clock)?;
                }
            }
            UiEvent::PlayButton => {
                if let Some(v) = self.view.as_bubble_mut() {
                    v.handle_play_button(&mut self.clock)?;
                }
            }
            UiEvent::Resize(viewport) => {
                self.viewport = viewport;
                let canvas = self.content_canvas();
                self.view.attach(canvas, now)?;
            }
            UiEvent::PointerMove(p) => {
                if let Some(v) = self.view.as_bubble_mut() {
                    v.pointer_move(p, now);
                }
            }
            UiEvent::PointerOut => {
                if let Some(v) = self.view.as_bubble_mut() {
                    v.pointer_out();
                }
            }
        }
        Ok(())
    }

    /// Unmount the current chart (cancelling its timer) and mount `kind` fresh.
    ///
    /// Selecting the chart that is already mounted keeps it, with its step and playback.
    pub fn select(&mut self, kind: ChartKind) -> ChartResult<()> {
        if kind == self.selected {
            tracing::debug!(?kind, "chart already mounted");
            return Ok(());
        }
        self.view.unmount(&mut self.clock);
        self.view = build_view(kind, &self.config, &self.dataset, &self.series);
        self.selected = kind;
        let canvas = self.content_canvas();
        self.view.attach(canvas, self.clock.now())?;
        tracing::debug!(?kind, "chart selected");
        Ok(())
    }

    /// Move virtual time forward by `by`, firing due timers and completing the layout
    /// transition in chronological order.
    pub fn advance(&mut self, by: Millis) -> ChartResult<()> {
        let target = self.clock.now().saturating_add(by);
        loop {
            let layout_end = self.layout.busy_until().filter(|end| *end <= target);
            if let Some(id) = self.clock.next_due(layout_end.unwrap_or(target)) {
                self.on_timer(id)?;
                continue;
            }
            match layout_end {
                Some(end) => {
                    self.clock.advance_to(end);
                    self.finish_layout()?;
                }
                None => break,
            }
        }
        self.clock.advance_to(target);
        Ok(())
    }

    fn on_timer(&mut self, id: TimerId) -> ChartResult<()> {
        match self.view.as_bubble_mut() {
            Some(v) if v.owns_timer(id) => {
                v.on_timer(id, &mut self.clock)?;
            }
            _ => {
                tracing::warn!(?id, "timer without owner, cancelling");
                self.clock.clear_interval(id);
            }
        }
        Ok(())
    }

    fn finish_layout(&mut self) -> ChartResult<()> {
        let Some(id) = self.layout.poll(self.clock.now()) else {
            return Ok(());
        };
        let canvas = self.content_canvas();
        tracing::debug!(?id, ?canvas, "layout transition finished, redrawing");
        self.view.attach(canvas, self.clock.now())?;
        Ok(())
    }
}

fn build_view(
    kind: ChartKind,
    config: &ChartConfig,
    dataset: &Arc<Dataset>,
    series: &Arc<LineSeries>,
) -> ChartView {
    match kind {
        ChartKind::AnnotatedLine => ChartView::Line(AnnotatedLineChart::new(
            Arc::clone(series),
            config.line.clone(),
            config.padding,
            config.background,
        )),
        ChartKind::AnimatedScatter => ChartView::Bubble(BubbleChartView::new(
            BubbleVariant::Animated,
            Arc::clone(dataset),
            config,
        )),
        ChartKind::TransitionScatter => ChartView::Bubble(BubbleChartView::new(
            BubbleVariant::Transition,
            Arc::clone(dataset),
            config,
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/app.rs"]
mod tests;
