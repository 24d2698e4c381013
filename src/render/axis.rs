use crate::{
    scale::{
        linear::LinearScale,
        ticks::{format_tick, tick_step},
    },
    scene::model::{Axis, AxisOrient, Tick},
};

/// Build an axis for `scale`.
///
/// `ticks: None` draws only the domain line. `label` formats a tick value given the tick step.
pub fn axis_with(
    orient: AxisOrient,
    scale: &LinearScale,
    offset: f64,
    ticks: Option<usize>,
    label: impl Fn(f64, f64) -> String,
) -> Axis {
    let ticks = match ticks {
        Some(count) => {
            let [d0, d1] = scale.domain();
            let step = tick_step(d0, d1, count);
            scale
                .ticks(count)
                .into_iter()
                .map(|v| Tick {
                    pos: scale.map(v),
                    label: label(v, step),
                })
                .collect()
        }
        None => Vec::new(),
    };
    Axis {
        orient,
        offset,
        span: scale.range(),
        ticks,
    }
}

/// Bottom axis with numeric labels, translated down by `offset`.
pub fn bottom_axis(scale: &LinearScale, offset: f64, ticks: Option<usize>) -> Axis {
    axis_with(AxisOrient::Bottom, scale, offset, ticks, format_tick)
}

/// Left axis with numeric labels, translated right by `offset`.
pub fn left_axis(scale: &LinearScale, offset: f64, ticks: Option<usize>) -> Axis {
    axis_with(AxisOrient::Left, scale, offset, ticks, format_tick)
}

#[cfg(test)]
#[path = "../../tests/unit/render/axis.rs"]
mod tests;
