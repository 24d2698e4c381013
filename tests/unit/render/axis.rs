use super::*;

#[test]
fn ticks_are_positioned_through_the_scale() {
    let x = LinearScale::new([0.0, 10.0], [30.0, 130.0]);
    let a = bottom_axis(&x, 230.0, Some(5));
    assert_eq!(a.orient, AxisOrient::Bottom);
    assert_eq!(a.offset, 230.0);
    assert_eq!(a.span, [30.0, 130.0]);
    let pos: Vec<f64> = a.ticks.iter().map(|t| t.pos).collect();
    assert_eq!(pos, [30.0, 50.0, 70.0, 90.0, 110.0, 130.0]);
    assert_eq!(a.ticks[1].label, "2");
}

#[test]
fn suppressed_ticks_keep_the_domain_line() {
    let y = LinearScale::new([0.0, 3.0], [230.0, 50.0]);
    let a = left_axis(&y, 30.0, None);
    assert!(a.ticks.is_empty());
    assert_eq!(a.span, [230.0, 50.0]);
}

#[test]
fn custom_labels() {
    let y = LinearScale::new([0.0, 1.0], [100.0, 0.0]);
    let a = axis_with(AxisOrient::Left, &y, 0.0, Some(2), |v, _| format!("{v}%"));
    let labels: Vec<&str> = a.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["0%", "0.5%", "1%"]);
}
