use super::*;

const TWO_STEPS: &str = r#"{
  "2020-01-02": [{"xvalue": 3, "yvalue": 4, "intensity": 2}],
  "2020-01-01": [{"xvalue": 1, "yvalue": 2, "intensity": 1},
                 {"xvalue": 5, "yvalue": 1, "intensity": 0.5}]
}"#;

#[test]
fn json_key_order_is_preserved() {
    let ds = Dataset::from_json_str(TWO_STEPS).unwrap();
    let keys: Vec<&str> = ds.keys().collect();
    assert_eq!(keys, ["2020-01-02", "2020-01-01"]);
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.last_index(), Some(1));
    assert_eq!(ds.points(1).unwrap().len(), 2);
    assert_eq!(ds.key(0).unwrap(), "2020-01-02");
}

#[test]
fn out_of_range_access_reports_bounds() {
    let ds = Dataset::from_json_str(TWO_STEPS).unwrap();
    assert!(matches!(
        ds.points(2),
        Err(ChartError::InvalidStepIndex { index: 2, len: 2 })
    ));
    assert!(ds.key(9).is_err());
}

#[test]
fn extent_spans_all_steps() {
    let ds = Dataset::from_json_str(TWO_STEPS).unwrap();
    assert_eq!(
        ds.extent(),
        DatasetExtent {
            max_x: 5.0,
            max_y: 4.0,
            max_intensity: 2.0,
        }
    );
}

#[test]
fn extent_of_negative_only_data_keeps_the_real_maxima() {
    let ds = Dataset::new()
        .with_step(
            "2020-01-01",
            [DataPoint::new(-2.0, -4.0, 1.0), DataPoint::new(-8.0, -1.0, 2.0)],
        )
        .unwrap();
    assert_eq!(
        ds.extent(),
        DatasetExtent {
            max_x: -2.0,
            max_y: -1.0,
            max_intensity: 2.0,
        }
    );

    let scales = crate::scale::set::ScaleSet::derive(
        &ds.extent(),
        crate::foundation::core::Canvas::new(400, 300),
        &crate::foundation::core::Padding::default(),
        crate::scale::color::Palette::BLUE_RED,
    );
    assert_eq!(scales.x.domain(), [0.0, -3.0]);
    assert_ne!(scales.x.map(-2.0), scales.x.map(-8.0));
    assert_ne!(scales.y.map(-4.0), scales.y.map(-1.0));
}

#[test]
fn duplicate_json_keys_are_rejected() {
    let err = Dataset::from_json_str(
        r#"{
  "2020-01-01": [{"xvalue": 1, "yvalue": 2, "intensity": 1}],
  "2020-01-01": [{"xvalue": 3, "yvalue": 4, "intensity": 2}]
}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("duplicate dataset key"), "{err}");
}

#[test]
fn empty_steps_and_duplicates_are_rejected() {
    assert!(Dataset::from_json_str(r#"{"a": []}"#).is_err());

    let mut ds = Dataset::new();
    ds.push_step("a", [DataPoint::new(1.0, 1.0, 1.0)]).unwrap();
    assert!(ds.push_step("a", [DataPoint::new(2.0, 2.0, 2.0)]).is_err());
    assert!(ds.push_step("b", Vec::<DataPoint>::new()).is_err());
    assert!(
        ds.push_step("c", [DataPoint::new(f64::NAN, 1.0, 1.0)])
            .is_err()
    );
    assert_eq!(ds.len(), 1);
}

#[test]
fn empty_dataset_is_valid_but_has_no_last_index() {
    let ds = Dataset::from_json_str("{}").unwrap();
    assert!(ds.is_empty());
    assert_eq!(ds.last_index(), None);
    assert_eq!(ds.extent(), DatasetExtent::default());
}

#[test]
fn serializes_as_plain_object() {
    let ds = Dataset::new()
        .with_step("k", [DataPoint::new(1.0, 2.0, 3.0)])
        .unwrap();
    let v = serde_json::to_value(&ds).unwrap();
    assert_eq!(v["k"][0]["intensity"], 3.0);
}
