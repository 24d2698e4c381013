use std::path::Path;

use anyhow::Context as _;

use crate::{
    charts::line::LineStyle,
    foundation::{
        color::Rgba8,
        core::{Canvas, Millis, Padding},
        error::{ChartError, ChartResult},
    },
    render::marks::BubbleStyle,
    timeline::controller::DEFAULT_PLAYBACK_PERIOD,
};

/// Application configuration.
///
/// Every field has a default, so a config file only needs the values it changes:
///
/// ```json
/// { "viewport": { "width": 1280, "height": 720 }, "playback_period": 500 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Window size; the mounted chart gets this minus the open menu.
    pub viewport: Canvas,
    /// Plot padding shared by every chart.
    pub padding: Padding,
    /// Surface background.
    pub background: Rgba8,
    /// Time between automatic steps while playing.
    pub playback_period: Millis,
    /// Style of the full-redraw scatterplot.
    pub animated: BubbleStyle,
    /// Style of the interpolated scatterplot.
    pub transition: BubbleStyle,
    /// Style of the annotated line chart.
    pub line: LineStyle,
    /// Width taken by the open menu.
    pub menu_width: u32,
    /// Length of the content resize when the menu opens or closes.
    pub layout_transition: Millis,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: Canvas::default(),
            padding: Padding::default(),
            background: Rgba8::WHITE,
            playback_period: DEFAULT_PLAYBACK_PERIOD,
            animated: BubbleStyle::animated(),
            transition: BubbleStyle::transition(),
            line: LineStyle::default(),
            menu_width: 200,
            layout_transition: Millis(500),
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: &Path) -> ChartResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.padding.validate()?;
        self.animated.validate()?;
        self.transition.validate()?;
        self.line.validate()?;
        if self.playback_period == Millis::ZERO {
            return Err(ChartError::validation("playback_period must be > 0"));
        }
        if self.menu_width >= self.viewport.width {
            return Err(ChartError::validation(format!(
                "menu_width ({}) must be smaller than the viewport width ({})",
                self.menu_width, self.viewport.width
            )));
        }
        Ok(())
    }

    /// Content area for the given menu state.
    pub fn content_canvas(&self, viewport: Canvas, menu_open: bool) -> Canvas {
        if menu_open {
            Canvas::new(viewport.width.saturating_sub(self.menu_width), viewport.height)
        } else {
            viewport
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
