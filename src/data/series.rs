use std::path::Path;

use anyhow::Context as _;
use chrono::NaiveDate;

use crate::{
    data::date::parse_date_key,
    foundation::error::{ChartError, ChartResult},
};

/// One point of the annotated line chart.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinePoint {
    /// Date key (`YYYY-MM-DD`).
    pub date: String,
    /// Series value.
    pub value: f64,
    /// Optional annotation text; only points with a message get a label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LinePoint {
    /// A point without annotation.
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
            message: None,
        }
    }

    /// Attach an annotation message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// A time-ordered single series.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LineSeries {
    points: Vec<LinePoint>,
}

impl LineSeries {
    /// Build and validate a series.
    pub fn new(points: Vec<LinePoint>) -> ChartResult<Self> {
        let s = Self { points };
        s.validate()?;
        Ok(s)
    }

    /// Parse and validate a JSON array of points.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let s: Self = serde_json::from_str(json)?;
        s.validate()?;
        Ok(s)
    }

    /// Read, parse and validate a series JSON file.
    pub fn from_json_path(path: &Path) -> ChartResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read series '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Dates must parse and be non-decreasing; values must be finite.
    pub fn validate(&self) -> ChartResult<()> {
        let mut prev: Option<NaiveDate> = None;
        for (i, p) in self.points.iter().enumerate() {
            let d = parse_date_key(&p.date).ok_or_else(|| {
                ChartError::validation(format!("series point {i} has invalid date \"{}\"", p.date))
            })?;
            if !p.value.is_finite() {
                return Err(ChartError::validation(format!(
                    "series point {i} has a non-finite value"
                )));
            }
            if prev.is_some_and(|prev| d < prev) {
                return Err(ChartError::validation(
                    "series points must be sorted by date",
                ));
            }
            prev = Some(d);
        }
        Ok(())
    }

    /// Points in time order.
    pub fn points(&self) -> &[LinePoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Return `true` when the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Parsed dates, in order. Callers rely on [`LineSeries::validate`] having passed.
    pub(crate) fn dates(&self) -> Vec<NaiveDate> {
        self.points
            .iter()
            .filter_map(|p| parse_date_key(&p.date))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/series.rs"]
mod tests;
