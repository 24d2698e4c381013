use super::*;

fn extent() -> DatasetExtent {
    DatasetExtent {
        max_x: 4.0,
        max_y: 2.0,
        max_intensity: 3.0,
    }
}

#[test]
fn domains_are_padded_and_zero_based() {
    let s = ScaleSet::derive(
        &extent(),
        Canvas::new(400, 300),
        &Padding::default(),
        Palette::BLUE_RED,
    );
    assert_eq!(s.x.domain(), [0.0, 6.0]);
    assert_eq!(s.y.domain(), [0.0, 3.0]);
    assert_eq!(s.color.domain(), [0.0, 3.0]);
    assert_eq!(s.x.range(), [30.0, 350.0]);
    assert_eq!(s.y.range(), [230.0, 50.0]);
}

#[test]
fn cache_rebuilds_only_on_resize() {
    let mut cache = ScaleCache::new(extent(), Padding::default(), Palette::BLUE_RED);
    assert!(cache.current().is_none());

    let a = cache.get(Canvas::new(400, 300));
    let b = cache.get(Canvas::new(400, 300));
    assert_eq!(a, b);

    let c = cache.get(Canvas::new(800, 300));
    assert_ne!(a.x, c.x);
    assert_eq!(a.y, c.y);
    assert_eq!(cache.current(), Some(c));

    cache.invalidate();
    assert!(cache.current().is_none());
}
