use std::sync::Arc;

use kurbo::ParamCurveArclen as _;

use crate::{
    animation::{ease::Ease, tween::Tween},
    charts::bubble::placeholder_scene,
    data::{
        date::{date_from_day_number, day_number, short_date},
        series::{LinePoint, LineSeries},
    },
    foundation::{
        color::Rgba8,
        core::{BezPath, Canvas, Millis, Padding, Point},
        error::{ChartError, ChartResult},
    },
    render::{
        axis::left_axis,
        backend::{Completion, TransitionId},
    },
    scale::{linear::LinearScale, set::DOMAIN_PADDING},
    scene::model::{
        Axis, AxisOrient, Dash, LineNode, Node, PathNode, Scene, TextAnchor, TextNode, Tick,
    },
};

const ARCLEN_ACCURACY: f64 = 1e-3;

/// Visual parameters of the annotated line chart.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineStyle {
    pub stroke: Rgba8,
    pub stroke_width: f64,
    /// Time the line takes to draw itself.
    pub reveal: Millis,
    /// Annotation fade-in, starting once the line is fully drawn.
    pub annotation_fade: Millis,
    pub ease: Ease,
    /// Horizontal label offset from its point.
    pub label_dx: f64,
    /// Vertical label offset from its point.
    pub label_dy: f64,
    pub label_size: f64,
    pub label_color: Rgba8,
    pub ticks: Option<usize>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            stroke: Rgba8::STEELBLUE,
            stroke_width: 1.5,
            reveal: Millis(500),
            annotation_fade: Millis(1000),
            ease: Ease::default(),
            label_dx: 10.0,
            label_dy: 30.0,
            label_size: 12.0,
            label_color: Rgba8::BLACK,
            ticks: Some(5),
        }
    }
}

impl LineStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::validation("line stroke_width must be > 0"));
        }
        if !self.label_dx.is_finite() || !self.label_dy.is_finite() {
            return Err(ChartError::validation("line label offsets must be finite"));
        }
        Ok(())
    }
}

/// Where an annotation label sits relative to its point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub dx: f64,
    pub dy: f64,
    pub anchor: TextAnchor,
}

/// Label placement for point `i`.
///
/// The last point is right-aligned to the left of its point; every other point is left-aligned to
/// the right. Labels go below (`+dy`) when the next value is higher and above otherwise.
pub fn label_placement(points: &[LinePoint], i: usize, style: &LineStyle) -> LabelPlacement {
    let last = i + 1 >= points.len();
    let (dx, anchor) = if last {
        (-style.label_dx, TextAnchor::End)
    } else {
        (style.label_dx, TextAnchor::Start)
    };
    let rising = match (points.get(i), points.get(i + 1)) {
        (Some(cur), Some(next)) => next.value > cur.value,
        _ => false,
    };
    LabelPlacement {
        dx,
        dy: if rising { style.label_dy } else { -style.label_dy },
        anchor,
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Annotation {
    point: Point,
    label: Point,
    text: String,
    anchor: TextAnchor,
}

/// Geometry of the chart for one surface size.
#[derive(Clone, Debug, PartialEq)]
struct LineLayout {
    canvas: Canvas,
    axes: Vec<Axis>,
    path: BezPath,
    length: f64,
    annotations: Vec<Annotation>,
}

impl LineLayout {
    fn build(series: &LineSeries, canvas: Canvas, padding: &Padding, style: &LineStyle) -> Self {
        let (w, h) = (canvas.w(), canvas.h());
        let days: Vec<f64> = series.dates().into_iter().map(day_number).collect();
        let first = days.first().copied().unwrap_or(0.0);
        let last = days.last().copied().unwrap_or(first);
        let max_value = series
            .points()
            .iter()
            .map(|p| p.value)
            .reduce(f64::max)
            .unwrap_or(0.0);

        let x = LinearScale::new(
            [first, last],
            [padding.left, w - (padding.left + padding.right)],
        );
        let y = LinearScale::new(
            [0.0, max_value * DOMAIN_PADDING],
            [h - (padding.bottom + padding.top), padding.top],
        );

        let positions: Vec<Point> = days
            .iter()
            .zip(series.points())
            .map(|(d, p)| Point::new(x.map(*d), y.map(p.value)))
            .collect();

        let mut path = BezPath::new();
        for (i, p) in positions.iter().enumerate() {
            if i == 0 {
                path.move_to(*p);
            } else {
                path.line_to(*p);
            }
        }
        let length: f64 = path.segments().map(|s| s.arclen(ARCLEN_ACCURACY)).sum();

        let annotations = series
            .points()
            .iter()
            .zip(&positions)
            .enumerate()
            .filter_map(|(i, (p, pos))| {
                let text = p.message.clone()?;
                let place = label_placement(series.points(), i, style);
                Some(Annotation {
                    point: *pos,
                    label: Point::new(pos.x + place.dx, pos.y + place.dy),
                    text,
                    anchor: place.anchor,
                })
            })
            .collect();

        Self {
            canvas,
            axes: vec![
                date_axis(&x, h - (padding.top + padding.bottom), style.ticks),
                left_axis(&y, padding.left, style.ticks),
            ],
            path,
            length,
            annotations,
        }
    }
}

/// Bottom axis over day numbers, labelled `M/D`. Only whole days get a tick.
fn date_axis(scale: &LinearScale, offset: f64, ticks: Option<usize>) -> Axis {
    let ticks = ticks
        .map(|count| {
            scale
                .ticks(count)
                .into_iter()
                .filter(|v| v.fract() == 0.0)
                .filter_map(|v| {
                    let date = date_from_day_number(v)?;
                    Some(Tick {
                        pos: scale.map(v),
                        label: short_date(date),
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    Axis {
        orient: AxisOrient::Bottom,
        offset,
        span: scale.range(),
        ticks,
    }
}

/// A single time series drawn progressively, then annotated.
///
/// Attaching a surface starts the animation: the line is revealed over `reveal`, after which
/// labels and connector lines of points carrying a message fade in over `annotation_fade`.
pub struct AnnotatedLineChart {
    series: Arc<LineSeries>,
    style: LineStyle,
    padding: Padding,
    background: Rgba8,
    layout: Option<LineLayout>,
    reveal: Tween<f64>,
    annotations: Tween<f64>,
    completion: Completion,
}

impl AnnotatedLineChart {
    pub fn new(
        series: Arc<LineSeries>,
        style: LineStyle,
        padding: Padding,
        background: Rgba8,
    ) -> Self {
        Self {
            series,
            style,
            padding,
            background,
            layout: None,
            reveal: Tween::hold(0.0),
            annotations: Tween::hold(0.0),
            completion: Completion::default(),
        }
    }

    /// Currently attached surface.
    pub fn surface(&self) -> Option<Canvas> {
        self.layout.as_ref().map(|l| l.canvas)
    }

    /// Total length of the line in pixels.
    pub fn path_length(&self) -> Option<f64> {
        self.layout.as_ref().map(|l| l.length)
    }

    /// Attach (or resize) the surface and replay the draw animation.
    pub fn attach(&mut self, canvas: Canvas, now: Millis) -> Option<TransitionId> {
        if canvas.is_empty() {
            self.layout = None;
            self.completion.cancel();
            return None;
        }
        self.layout = Some(LineLayout::build(
            &self.series,
            canvas,
            &self.padding,
            &self.style,
        ));
        let ease = self.style.ease;
        let fade_start = now.saturating_add(self.style.reveal);
        self.reveal = Tween::new(0.0, 1.0, now, self.style.reveal, ease);
        self.annotations = Tween::new(0.0, 1.0, fade_start, self.style.annotation_fade, ease);
        let id = self.completion.start(self.annotations.end());
        tracing::debug!(?canvas, ?id, points = self.series.len(), "line chart drawn");
        Some(id)
    }

    pub fn poll(&mut self, now: Millis) -> Option<TransitionId> {
        self.completion.poll(now)
    }

    pub fn busy_until(&self) -> Option<Millis> {
        self.completion.busy_until()
    }

    pub fn unmount(&mut self) {
        self.layout = None;
        self.completion.cancel();
    }

    /// Scene at `now`.
    pub fn frame(&self, now: Millis) -> ChartResult<Scene> {
        let layout = self.layout.as_ref().ok_or(ChartError::SurfaceUnavailable)?;
        if self.series.is_empty() {
            return Ok(placeholder_scene(layout.canvas, self.background));
        }
        let mut scene = Scene::new(layout.canvas, self.background);
        scene
            .nodes
            .extend(layout.axes.iter().cloned().map(Node::Axis));

        let shown = self.reveal.sample(now);
        scene.nodes.push(Node::Path(PathNode {
            path: layout.path.clone(),
            stroke: self.style.stroke,
            width: self.style.stroke_width,
            dash: Some(Dash {
                length: layout.length,
                offset: layout.length * (1.0 - shown),
            }),
        }));

        let opacity = self.annotations.sample(now);
        if opacity > 0.0 {
            for a in &layout.annotations {
                scene.nodes.push(Node::Line(LineNode {
                    from: a.point,
                    to: a.label,
                    stroke: self.style.label_color,
                    opacity,
                }));
                scene.nodes.push(Node::Text(TextNode {
                    pos: a.label,
                    text: a.text.clone(),
                    anchor: a.anchor,
                    size: self.style.label_size,
                    fill: self.style.label_color,
                    opacity,
                }));
            }
        }
        Ok(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/charts/line.rs"]
mod tests;
