use super::*;

#[test]
fn demo_dataset_is_valid_and_deterministic() {
    let a = demo_dataset();
    let b = demo_dataset();
    assert_eq!(a, b);
    assert_eq!(a.len(), DEMO_STEPS as usize);
    assert!(a.validate().is_ok());
    for i in 0..a.len() {
        assert_eq!(a.points(i).unwrap().len(), DEMO_BUBBLES);
    }
    assert_eq!(a.key(0).unwrap(), "2020-01-01");
    assert_eq!(a.key(1).unwrap(), "2020-01-08");
}

#[test]
fn demo_series_has_annotations() {
    let s = demo_series();
    assert_eq!(s.len(), 10);
    assert!(s.validate().is_ok());
    let annotated = s.points().iter().filter(|p| p.message.is_some()).count();
    assert_eq!(annotated, 4);
    assert!(s.points().last().unwrap().message.is_some());
}
