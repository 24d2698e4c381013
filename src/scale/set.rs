use crate::{
    data::dataset::DatasetExtent,
    foundation::core::{Canvas, Padding},
    scale::{
        color::{ColorScale, Palette},
        linear::LinearScale,
    },
};

/// Headroom applied to the position domains so the largest bubbles stay inside the plot.
pub const DOMAIN_PADDING: f64 = 1.5;

/// Position and color scales for one dataset on one surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleSet {
    /// Horizontal position scale.
    pub x: LinearScale,
    /// Vertical position scale (inverted range, data grows upward).
    pub y: LinearScale,
    /// Intensity to fill color.
    pub color: ColorScale,
}

impl ScaleSet {
    /// Derive scales from the full-dataset extent and the surface size.
    pub fn derive(
        extent: &DatasetExtent,
        canvas: Canvas,
        padding: &Padding,
        palette: Palette,
    ) -> Self {
        let (w, h) = (canvas.w(), canvas.h());
        Self {
            x: LinearScale::new(
                [0.0, extent.max_x * DOMAIN_PADDING],
                [padding.left, w - (padding.left + padding.right)],
            ),
            y: LinearScale::new(
                [0.0, extent.max_y * DOMAIN_PADDING],
                [h - (padding.bottom + padding.top), padding.top],
            ),
            color: ColorScale::new([0.0, extent.max_intensity], palette),
        }
    }
}

/// Scales cached per surface size.
///
/// The extent is computed once from the dataset; scales are rebuilt only when the surface size
/// changes, never when the shown step changes.
#[derive(Clone, Debug)]
pub struct ScaleCache {
    extent: DatasetExtent,
    padding: Padding,
    palette: Palette,
    cached: Option<(Canvas, ScaleSet)>,
}

impl ScaleCache {
    /// Create an empty cache for a dataset extent.
    pub fn new(extent: DatasetExtent, padding: Padding, palette: Palette) -> Self {
        Self {
            extent,
            padding,
            palette,
            cached: None,
        }
    }

    /// Scales for `canvas`, rebuilding only on a size change.
    pub fn get(&mut self, canvas: Canvas) -> ScaleSet {
        match self.cached {
            Some((c, set)) if c == canvas => set,
            _ => {
                tracing::debug!(width = canvas.width, height = canvas.height, "derive scales");
                let set = ScaleSet::derive(&self.extent, canvas, &self.padding, self.palette);
                self.cached = Some((canvas, set));
                set
            }
        }
    }

    /// Scales from the last [`ScaleCache::get`], if any.
    pub fn current(&self) -> Option<ScaleSet> {
        self.cached.map(|(_, set)| set)
    }

    /// Drop cached scales (e.g. on surface detach).
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/set.rs"]
mod tests;
