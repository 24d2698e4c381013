/// Convenience result type used across chartreel.
pub type ChartResult<T> = Result<T, ChartError>;

/// Top-level error taxonomy used by chart, timeline and render APIs.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    /// Invalid user-provided dataset, series or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A step index outside `[0, len - 1]` was requested from a dataset accessor.
    #[error("invalid step index {index} (dataset has {len} steps)")]
    InvalidStepIndex {
        /// Requested index.
        index: usize,
        /// Number of steps in the dataset.
        len: usize,
    },

    /// The dataset has no timestamps at all.
    #[error("dataset is empty")]
    EmptyDataset,

    /// A draw was requested before a non-empty rendering surface was attached.
    #[error("rendering surface is not attached")]
    SurfaceUnavailable,

    /// Errors while turning a scene into pixels.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChartError {
    /// Build a [`ChartError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChartError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ChartError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
