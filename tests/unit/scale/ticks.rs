use super::*;

#[test]
fn integer_domains_pick_round_steps() {
    assert_eq!(ticks(0.0, 15.0, 5), [0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0]);
    assert_eq!(ticks(0.0, 100.0, 5), [0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(tick_step(0.0, 100.0, 5), 20.0);
}

#[test]
fn fractional_domains_divide_instead_of_multiply() {
    assert_eq!(ticks(0.0, 1.0, 5), [0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(tick_step(0.0, 1.0, 5), 0.2);
}

#[test]
fn reversed_and_degenerate_domains() {
    assert_eq!(ticks(10.0, 0.0, 2), [10.0, 5.0, 0.0]);
    assert_eq!(ticks(3.0, 3.0, 5), [3.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
    assert!(ticks(f64::NAN, 1.0, 5).is_empty());
}

#[test]
fn labels_use_step_precision() {
    assert_eq!(format_tick(0.2, 0.2), "0.2");
    assert_eq!(format_tick(20.0, 20.0), "20");
    assert_eq!(format_tick(0.05, 0.05), "0.05");
    assert_eq!(format_tick(-0.0, 1.0), "0");
}
