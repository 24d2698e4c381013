//! "Nice" tick generation for linear domains (steps of 1, 2 or 5 times a power of ten).

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Tick index range and increment. A negative increment means "divide by `-inc`".
#[derive(Clone, Copy, Debug, PartialEq)]
struct TickRange {
    i1: f64,
    i2: f64,
    inc: f64,
}

fn tick_range(start: f64, stop: f64, count: f64) -> TickRange {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round();
        i2 = (stop / step).round();
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        inc = step;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }
    TickRange { i1, i2, inc }
}

/// Roughly `count` evenly spaced, human-friendly values covering `[start, stop]`.
///
/// Reversed inputs produce descending ticks. A degenerate domain yields the single value.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let r = tick_range(lo, hi, count as f64);
    if r.i1.is_nan() || r.i2.is_nan() || r.i2 < r.i1 {
        return Vec::new();
    }

    let n = (r.i2 - r.i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = r.i1 + i as f64;
            if r.inc < 0.0 { k / -r.inc } else { k * r.inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Distance between consecutive ticks for the same arguments as [`ticks`].
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || start == stop || !start.is_finite() || !stop.is_finite() {
        return 0.0;
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let r = tick_range(lo, hi, count as f64);
    if r.inc < 0.0 { 1.0 / -r.inc } else { r.inc }
}

/// Format a tick value with just enough decimals for the tick step.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    let s = format!("{value:.decimals$}");
    // Avoid "-0".
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        return s.trim_start_matches('-').to_owned();
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/scale/ticks.rs"]
mod tests;
