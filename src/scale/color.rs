use crate::{foundation::color::Rgba8, scale::linear::LinearScale};

/// Two endpoint colors a color scale interpolates between.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Color at the low end of the domain.
    pub low: Rgba8,
    /// Color at the high end of the domain.
    pub high: Rgba8,
}

impl Palette {
    /// `pink -> red`, used by the animated scatterplot.
    pub const PINK_RED: Self = Self {
        low: Rgba8::PINK,
        high: Rgba8::RED,
    };

    /// `blue -> red`, used by the transition scatterplot.
    pub const BLUE_RED: Self = Self {
        low: Rgba8::BLUE,
        high: Rgba8::RED,
    };
}

/// Linear domain mapped onto an RGB interpolation between two colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
    position: LinearScale,
    palette: Palette,
}

impl ColorScale {
    /// Build a color scale over `domain`.
    pub fn new(domain: [f64; 2], palette: Palette) -> Self {
        Self {
            position: LinearScale::new(domain, [0.0, 1.0]),
            palette,
        }
    }

    /// Data domain.
    pub fn domain(&self) -> [f64; 2] {
        self.position.domain()
    }

    /// Endpoint colors.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Color for `v`; values beyond the domain extrapolate and saturate per channel.
    pub fn map(&self, v: f64) -> Rgba8 {
        self.palette.low.mix(self.palette.high, self.position.map(v))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/color.rs"]
mod tests;
