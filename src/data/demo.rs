//! Built-in sample data used when no dataset/series file is supplied.

use chrono::{Days, NaiveDate};

use crate::data::{
    dataset::{DataPoint, Dataset},
    series::{LinePoint, LineSeries},
};

const DEMO_STEPS: u64 = 12;
const DEMO_BUBBLES: usize = 8;

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn unit(seed: u64) -> f64 {
    (mix64(seed) >> 11) as f64 / (1u64 << 53) as f64
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}

/// Twelve weekly steps of eight drifting bubbles.
pub fn demo_dataset() -> Dataset {
    let mut ds = Dataset::new();
    for step in 0..DEMO_STEPS {
        let date = start_date()
            .checked_add_days(Days::new(step * 7))
            .unwrap_or_default();
        let t = step as f64 / (DEMO_STEPS - 1) as f64;
        let points = (0..DEMO_BUBBLES).map(|i| {
            let seed = (i as u64) << 8;
            let x0 = 1.0 + 8.0 * unit(seed);
            let y0 = 1.0 + 8.0 * unit(seed + 1);
            let dx = 2.0 * unit(seed + 2) - 1.0;
            let dy = 2.0 * unit(seed + 3) - 1.0;
            let wobble = unit(seed + 4 + step) * 0.6;
            DataPoint::new(
                (x0 + dx * 3.0 * t).max(0.0),
                (y0 + dy * 3.0 * t + wobble).max(0.0),
                0.5 + 4.5 * unit(seed + 100 + step),
            )
        });
        // Keys are unique dates and every step has points, so this cannot fail.
        if ds
            .push_step(date.format("%Y-%m-%d").to_string(), points)
            .is_err()
        {
            break;
        }
    }
    ds
}

/// A short daily series with a few annotated points.
pub fn demo_series() -> LineSeries {
    let values = [12.0, 15.0, 14.0, 22.0, 19.0, 25.0, 31.0, 28.0, 24.0, 33.0];
    let messages = [
        (3, "launch"),
        (6, "press coverage"),
        (8, "outage"),
        (9, "record day"),
    ];
    let points = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let date = start_date()
                .checked_add_days(Days::new(i as u64))
                .unwrap_or_default();
            let p = LinePoint::new(date.format("%Y-%m-%d").to_string(), *v);
            match messages.iter().find(|(at, _)| *at == i) {
                Some((_, msg)) => p.with_message(*msg),
                None => p,
            }
        })
        .collect();
    LineSeries::new(points).unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/data/demo.rs"]
mod tests;
