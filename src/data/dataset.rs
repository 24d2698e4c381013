use std::path::Path;

use anyhow::Context as _;
use indexmap::IndexMap;

use crate::foundation::error::{ChartError, ChartResult};

/// One bubble: position plus an intensity that drives radius and color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataPoint {
    /// Horizontal data value.
    pub xvalue: f64,
    /// Vertical data value.
    pub yvalue: f64,
    /// Intensity; radius is `intensity * 5` and color is interpolated from it.
    pub intensity: f64,
}

impl DataPoint {
    /// Build a point.
    pub fn new(xvalue: f64, yvalue: f64, intensity: f64) -> Self {
        Self {
            xvalue,
            yvalue,
            intensity,
        }
    }
}

/// Ordered mapping from timestamp key to the points shown at that step.
///
/// Key order is insertion order (JSON object order when loaded from JSON) and is never re-sorted.
/// Every step holds at least one point.
/// Duplicate keys in JSON are rejected, the same as [`Dataset::push_step`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Dataset {
    steps: IndexMap<String, Vec<DataPoint>>,
}

/// Maxima over every point of every step, used to derive stable scales.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DatasetExtent {
    /// Largest `xvalue`.
    pub max_x: f64,
    /// Largest `yvalue`.
    pub max_y: f64,
    /// Largest `intensity`.
    pub max_intensity: f64,
}

impl Dataset {
    /// An empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Dataset::push_step`].
    pub fn with_step(
        mut self,
        key: impl Into<String>,
        points: impl IntoIterator<Item = DataPoint>,
    ) -> ChartResult<Self> {
        self.push_step(key, points)?;
        Ok(self)
    }

    /// Append a step at the end of the timeline.
    pub fn push_step(
        &mut self,
        key: impl Into<String>,
        points: impl IntoIterator<Item = DataPoint>,
    ) -> ChartResult<()> {
        let key = key.into();
        let points: Vec<DataPoint> = points.into_iter().collect();
        validate_step(&key, &points)?;
        if self.steps.contains_key(&key) {
            return Err(ChartError::validation(format!(
                "duplicate dataset key \"{key}\""
            )));
        }
        self.steps.insert(key, points);
        Ok(())
    }

    /// Parse and validate a dataset from JSON text.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let ds: Self = serde_json::from_str(json)?;
        ds.validate()?;
        Ok(ds)
    }

    /// Read, parse and validate a dataset JSON file.
    pub fn from_json_path(path: &Path) -> ChartResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read dataset '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Check the per-step invariants (non-empty steps, finite values).
    ///
    /// An empty dataset is valid here; views render a placeholder for it.
    pub fn validate(&self) -> ChartResult<()> {
        for (key, points) in &self.steps {
            validate_step(key, points)?;
        }
        Ok(())
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Return `true` when there are no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step, `None` for an empty dataset.
    pub fn last_index(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// Step keys in timeline order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.steps.keys().map(String::as_str)
    }

    /// Key of step `index`.
    pub fn key(&self, index: usize) -> ChartResult<&str> {
        self.steps
            .get_index(index)
            .map(|(k, _)| k.as_str())
            .ok_or(ChartError::InvalidStepIndex {
                index,
                len: self.len(),
            })
    }

    /// Points of step `index`.
    pub fn points(&self, index: usize) -> ChartResult<&[DataPoint]> {
        self.steps
            .get_index(index)
            .map(|(_, v)| v.as_slice())
            .ok_or(ChartError::InvalidStepIndex {
                index,
                len: self.len(),
            })
    }

    /// Every point of every step.
    pub fn all_points(&self) -> impl Iterator<Item = &DataPoint> {
        self.steps.values().flatten()
    }

    /// Maxima across the full dataset, independent of any step.
    ///
    /// Maxima may be negative; an empty dataset reports zeros.
    pub fn extent(&self) -> DatasetExtent {
        let mut points = self.all_points();
        let Some(first) = points.next() else {
            return DatasetExtent::default();
        };
        let seed = DatasetExtent {
            max_x: first.xvalue,
            max_y: first.yvalue,
            max_intensity: first.intensity,
        };
        points.fold(seed, |acc, p| DatasetExtent {
            max_x: acc.max_x.max(p.xvalue),
            max_y: acc.max_y.max(p.yvalue),
            max_intensity: acc.max_intensity.max(p.intensity),
        })
    }
}

impl<'de> serde::Deserialize<'de> for Dataset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct StepsVisitor;

        impl<'de> serde::de::Visitor<'de> for StepsVisitor {
            type Value = IndexMap<String, Vec<DataPoint>>;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map from timestamp key to an array of points")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut steps = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, points)) = map.next_entry::<String, Vec<DataPoint>>()? {
                    if steps.contains_key(&key) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate dataset key \"{key}\""
                        )));
                    }
                    steps.insert(key, points);
                }
                Ok(steps)
            }
        }

        let steps = deserializer.deserialize_map(StepsVisitor)?;
        Ok(Self { steps })
    }
}

fn validate_step(key: &str, points: &[DataPoint]) -> ChartResult<()> {
    if points.is_empty() {
        return Err(ChartError::validation(format!(
            "dataset step \"{key}\" has no points"
        )));
    }
    for (i, p) in points.iter().enumerate() {
        if !(p.xvalue.is_finite() && p.yvalue.is_finite() && p.intensity.is_finite()) {
            return Err(ChartError::validation(format!(
                "dataset step \"{key}\" point {i} has a non-finite value"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/data/dataset.rs"]
mod tests;
