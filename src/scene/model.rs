use crate::foundation::{
    color::Rgba8,
    core::{BezPath, Canvas, Point},
};

/// A fully resolved drawable frame: every animated value already sampled.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Surface size.
    pub canvas: Canvas,
    /// Background fill.
    pub background: Rgba8,
    /// Nodes in paint order.
    pub nodes: Vec<Node>,
}

impl Scene {
    /// An empty scene.
    pub fn new(canvas: Canvas, background: Rgba8) -> Self {
        Self {
            canvas,
            background,
            nodes: Vec::new(),
        }
    }

    /// Iterate over bubble marks in paint order.
    pub fn marks(&self) -> impl Iterator<Item = &Mark> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Mark(m) => Some(m),
            _ => None,
        })
    }

    /// Iterate over text nodes in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextNode> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Iterate over axes.
    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Axis(a) => Some(a),
            _ => None,
        })
    }
}

/// Scene node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Axis with ticks and labels.
    Axis(Axis),
    /// Bubble mark.
    Mark(Mark),
    /// Stroked path.
    Path(PathNode),
    /// Straight line segment.
    Line(LineNode),
    /// Text label.
    Text(TextNode),
}

/// One bubble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mark {
    /// Index of the data point this mark is bound to.
    pub key: usize,
    /// Center in surface coordinates.
    pub center: Point,
    /// Radius in pixels.
    pub radius: f64,
    /// Fill color.
    pub fill: Rgba8,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Mark {
    /// Return `true` if `p` lies inside the circle.
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius.abs()
    }
}

/// Which side of the plot an axis is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal axis, ticks pointing down.
    Bottom,
    /// Vertical axis, ticks pointing left.
    Left,
}

/// One axis tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis in surface units.
    pub pos: f64,
    /// Label text.
    pub label: String,
}

/// An axis line with ticks, positioned by `offset` across the axis direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Orientation.
    pub orient: AxisOrient,
    /// Translation perpendicular to the axis (y for bottom axes, x for left axes).
    pub offset: f64,
    /// Extent of the domain line along the axis.
    pub span: [f64; 2],
    /// Ticks; empty when ticks are suppressed.
    pub ticks: Vec<Tick>,
}

/// Stroke-dash state used to reveal a path progressively.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    /// Dash and gap length (the full path length).
    pub length: f64,
    /// Current dash offset; `length` hides the path, `0` shows it fully.
    pub offset: f64,
}

/// Stroked, unfilled path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    /// Geometry.
    pub path: BezPath,
    /// Stroke color.
    pub stroke: Rgba8,
    /// Stroke width.
    pub width: f64,
    /// Optional dash reveal.
    pub dash: Option<Dash>,
}

/// Straight connector line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineNode {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Stroke color.
    pub stroke: Rgba8,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Text label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    /// Anchor point (baseline).
    pub pos: Point,
    /// Content.
    pub text: String,
    /// Alignment.
    pub anchor: TextAnchor,
    /// Font size in pixels.
    pub size: f64,
    /// Fill color.
    pub fill: Rgba8,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
