use crate::scale::ticks::{format_tick, tick_step, ticks};

/// Unclamped linear mapping from a data domain onto a drawing range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    /// Build a scale mapping `domain[0] -> range[0]` and `domain[1] -> range[1]`.
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Data domain.
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    /// Output range.
    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Map a domain value into the range. Values outside the domain extrapolate.
    ///
    /// A degenerate domain maps everything to the middle of the range.
    pub fn map(&self, v: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 || !span.is_finite() {
            0.5
        } else {
            (v - d0) / span
        };
        r0 + (r1 - r0) * t
    }

    /// Map a range value back into the domain.
    pub fn invert(&self, r: f64) -> f64 {
        Self::new(self.range, self.domain).map(r)
    }

    /// About `count` nice tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain[0], self.domain[1], count)
    }

    /// Tick values paired with their labels.
    pub fn labeled_ticks(&self, count: usize) -> Vec<(f64, String)> {
        let step = tick_step(self.domain[0], self.domain[1], count);
        self.ticks(count)
            .into_iter()
            .map(|v| (v, format_tick(v, step)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/linear.rs"]
mod tests;
