use crate::{
    data::dataset::DataPoint,
    foundation::{color::Rgba8, core::Point},
    scene::model::{Node, Scene, TextAnchor, TextNode},
};

/// Horizontal gap between the pointer and the tooltip.
pub const TOOLTIP_OFFSET_X: f64 = 20.0;
const LINE_HEIGHT: f64 = 16.0;
const FONT_SIZE: f64 = 12.0;

/// Hover details for one mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tooltip {
    /// Index of the hovered mark.
    pub key: usize,
    /// Data behind the hovered mark.
    pub point: DataPoint,
    /// Top-left corner of the tooltip box.
    pub pos: Point,
}

impl Tooltip {
    /// Tooltip for `point`, placed next to `pointer`.
    pub fn new(key: usize, point: DataPoint, pointer: Point) -> Self {
        Self {
            key,
            point,
            pos: tooltip_location(pointer, Self::height()),
        }
    }

    /// Box height: one line per field.
    pub fn height() -> f64 {
        3.0 * LINE_HEIGHT
    }

    /// Text lines shown in the tooltip.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Intensity: {}", self.point.intensity),
            format!("X-Value: {}", self.point.xvalue),
            format!("Y-Value: {}", self.point.yvalue),
        ]
    }

    /// Scene nodes drawing the tooltip.
    pub fn nodes(&self) -> Vec<Node> {
        self.lines()
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                Node::Text(TextNode {
                    pos: Point::new(self.pos.x, self.pos.y + LINE_HEIGHT * (i as f64 + 1.0)),
                    text,
                    anchor: TextAnchor::Start,
                    size: FONT_SIZE,
                    fill: Rgba8::BLACK,
                    opacity: 1.0,
                })
            })
            .collect()
    }
}

/// Top-left corner of a tooltip of `height` shown for `pointer`: right of the pointer and
/// vertically centred on it.
pub fn tooltip_location(pointer: Point, height: f64) -> Point {
    Point::new(pointer.x + TOOLTIP_OFFSET_X, pointer.y - height / 2.0)
}

/// Key of the topmost mark under `pointer` among the first `live` keys.
pub fn hit_test(scene: &Scene, pointer: Point, live: usize) -> Option<usize> {
    scene
        .marks()
        .filter(|m| m.key < live && m.contains(pointer))
        .last()
        .map(|m| m.key)
}

#[cfg(test)]
#[path = "../../tests/unit/charts/tooltip.rs"]
mod tests;
