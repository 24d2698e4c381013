use crate::{
    animation::{ease::Ease, tween::Tween},
    data::dataset::DataPoint,
    foundation::{
        color::Rgba8,
        core::{Millis, Point},
        error::{ChartError, ChartResult},
    },
    scale::{color::Palette, set::ScaleSet},
    scene::model::Mark,
};

/// Visual parameters of a bubble chart variant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BubbleStyle {
    /// Fill color endpoints for the intensity scale.
    pub palette: Palette,
    /// Fade-in length for freshly drawn marks.
    pub fade_in: Millis,
    /// Length of step-to-step mark transitions.
    pub transition: Millis,
    /// Easing for every mark animation.
    pub ease: Ease,
    /// Resting opacity of a mark.
    pub mark_opacity: f64,
    /// Radius per unit of intensity.
    pub radius_factor: f64,
    /// Bottom axis tick count.
    pub x_ticks: Option<usize>,
    /// Left axis tick count; `None` suppresses tick marks.
    pub y_ticks: Option<usize>,
    /// Show a tooltip for the mark under the pointer.
    pub tooltips: bool,
}

impl BubbleStyle {
    /// Full-redraw scatterplot: pink to red, 500 ms fade-in, tooltips on.
    pub fn animated() -> Self {
        Self {
            palette: Palette::PINK_RED,
            fade_in: Millis(500),
            transition: Millis(500),
            tooltips: true,
            ..Self::transition()
        }
    }

    /// Interpolated scatterplot: blue to red, 750 ms transitions.
    pub fn transition() -> Self {
        Self {
            palette: Palette::BLUE_RED,
            fade_in: Millis(750),
            transition: Millis(750),
            ease: Ease::default(),
            mark_opacity: 0.8,
            radius_factor: 5.0,
            x_ticks: Some(5),
            y_ticks: Some(5),
            tooltips: false,
        }
    }

    /// Marks must stay visible and radii finite.
    pub fn validate(&self) -> ChartResult<()> {
        if !(0.0..=1.0).contains(&self.mark_opacity) {
            return Err(ChartError::validation("mark_opacity must be in [0, 1]"));
        }
        if !self.radius_factor.is_finite() {
            return Err(ChartError::validation("radius_factor must be finite"));
        }
        Ok(())
    }
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self::transition()
    }
}

/// Resting mark for `point`: position from the position scales, radius `intensity * factor`
/// (unclamped) and fill from the color scale.
pub fn target_mark(key: usize, point: &DataPoint, scales: &ScaleSet, style: &BubbleStyle) -> Mark {
    Mark {
        key,
        center: Point::new(scales.x.map(point.xvalue), scales.y.map(point.yvalue)),
        radius: point.intensity * style.radius_factor,
        fill: scales.color.map(point.intensity),
        opacity: style.mark_opacity,
    }
}

/// A mark whose attributes are animated independently.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkAnim {
    /// Bound data index.
    pub key: usize,
    center: Tween<Point>,
    radius: Tween<f64>,
    fill: Tween<Rgba8>,
    opacity: Tween<f64>,
    /// Marked for removal once its fade-out finishes.
    pub exiting: bool,
}

impl MarkAnim {
    /// A mark placed at its target and fading in from transparent.
    pub fn entering(target: Mark, now: Millis, duration: Millis, ease: Ease) -> Self {
        Self {
            key: target.key,
            center: Tween::hold(target.center),
            radius: Tween::hold(target.radius),
            fill: Tween::hold(target.fill),
            opacity: Tween::new(0.0, target.opacity, now, duration, ease),
            exiting: false,
        }
    }

    /// Move every attribute from its current value toward `target`.
    pub fn update(&mut self, target: Mark, now: Millis, duration: Millis, ease: Ease) {
        self.center = self.center.retarget(target.center, now, duration, ease);
        self.radius = self.radius.retarget(target.radius, now, duration, ease);
        self.fill = self.fill.retarget(target.fill, now, duration, ease);
        self.opacity = self.opacity.retarget(target.opacity, now, duration, ease);
        self.exiting = false;
    }

    /// Freeze geometry where it is and fade out.
    pub fn exit(&mut self, now: Millis, duration: Millis, ease: Ease) {
        self.center = Tween::hold(self.center.sample(now));
        self.radius = Tween::hold(self.radius.sample(now));
        self.fill = Tween::hold(self.fill.sample(now));
        self.opacity = self.opacity.retarget(0.0, now, duration, ease);
        self.exiting = true;
    }

    /// Attribute values at `now`.
    pub fn sample(&self, now: Millis) -> Mark {
        Mark {
            key: self.key,
            center: self.center.sample(now),
            radius: self.radius.sample(now),
            fill: self.fill.sample(now),
            opacity: self.opacity.sample(now),
        }
    }

    /// Return `true` when an exiting mark has fully faded.
    pub fn is_gone(&self, now: Millis) -> bool {
        self.exiting && self.opacity.is_finished(now)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/marks.rs"]
mod tests;
