use crate::foundation::error::{ChartError, ChartResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Virtual-time instant or duration in whole milliseconds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Saturating addition.
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction, clamping at zero.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Value in seconds.
    pub fn as_secs_f64(self) -> f64 {
        (self.0 as f64) / 1000.0
    }
}

/// Rendering surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` when either side is zero; nothing can be drawn onto such a surface.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Reject empty surfaces with [`ChartError::SurfaceUnavailable`].
    pub fn require_drawable(self) -> ChartResult<Self> {
        if self.is_empty() {
            return Err(ChartError::SurfaceUnavailable);
        }
        Ok(self)
    }

    /// Width as `f64`.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
        }
    }
}

/// Inner chart padding in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Padding {
    /// Left padding; the y axis sits on this line.
    pub left: f64,
    /// Right padding.
    pub right: f64,
    /// Top padding.
    pub top: f64,
    /// Bottom padding.
    pub bottom: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            left: 30.0,
            right: 20.0,
            top: 50.0,
            bottom: 20.0,
        }
    }
}

impl Padding {
    /// Return an error if any side is negative or non-finite.
    pub fn validate(&self) -> ChartResult<()> {
        for (name, v) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ChartError::validation(format!(
                    "padding.{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
