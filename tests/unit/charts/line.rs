use super::*;
use crate::data::demo::demo_series;

fn series(values: &[f64]) -> Vec<LinePoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| LinePoint::new(format!("2020-01-{:02}", i + 1), *v))
        .collect()
}

fn chart(points: Vec<LinePoint>) -> AnnotatedLineChart {
    AnnotatedLineChart::new(
        Arc::new(LineSeries::new(points).unwrap()),
        LineStyle {
            ease: Ease::Linear,
            ..LineStyle::default()
        },
        Padding::default(),
        Rgba8::WHITE,
    )
}

#[test]
fn labels_follow_the_next_value() {
    let pts = series(&[1.0, 2.0, 1.0]);
    let style = LineStyle::default();
    assert_eq!(
        label_placement(&pts, 0, &style),
        LabelPlacement {
            dx: 10.0,
            dy: 30.0,
            anchor: TextAnchor::Start
        }
    );
    assert_eq!(label_placement(&pts, 1, &style).dy, -30.0);
    assert_eq!(
        label_placement(&pts, 2, &style),
        LabelPlacement {
            dx: -10.0,
            dy: -30.0,
            anchor: TextAnchor::End
        }
    );
}

#[test]
fn equal_next_value_counts_as_not_higher() {
    let pts = series(&[2.0, 2.0]);
    assert_eq!(label_placement(&pts, 0, &LineStyle::default()).dy, -30.0);
}

#[test]
fn nothing_to_show_before_attach() {
    let c = chart(series(&[1.0, 2.0]));
    assert!(matches!(
        c.frame(Millis(0)),
        Err(ChartError::SurfaceUnavailable)
    ));
}

#[test]
fn line_is_revealed_by_its_dash_offset() {
    let mut c = chart(series(&[0.0, 4.0]));
    c.attach(Canvas::new(400, 300), Millis(0));

    // x spans [30, 350], y maps 0 -> 230 and 4 -> 110.
    let length = c.path_length().unwrap();
    assert!((length - (320.0_f64.powi(2) + 120.0_f64.powi(2)).sqrt()).abs() < 1e-6);

    let dash_at = |now: u64| {
        c.frame(Millis(now))
            .unwrap()
            .nodes
            .iter()
            .find_map(|n| match n {
                Node::Path(p) => p.dash,
                _ => None,
            })
            .unwrap()
    };
    assert_eq!(dash_at(0).offset, length);
    assert!((dash_at(250).offset - length / 2.0).abs() < 1e-9);
    assert_eq!(dash_at(500).offset, 0.0);
}

#[test]
fn negative_values_keep_their_own_heights() {
    let series = LineSeries::new(series(&[-1.0, -4.0])).unwrap();
    let layout = LineLayout::build(
        &series,
        Canvas::new(400, 300),
        &Padding::default(),
        &LineStyle::default(),
    );

    // y maps 0 -> 230 and -6 -> 50, so -1 -> 200 and -4 -> 110.
    let expected = (320.0_f64.powi(2) + 90.0_f64.powi(2)).sqrt();
    assert!((layout.length - expected).abs() < 1e-6, "{}", layout.length);
}

#[test]
fn annotations_fade_in_after_the_reveal() {
    let mut pts = series(&[1.0, 3.0, 2.0]);
    pts[1] = pts[1].clone().with_message("peak");
    let mut c = chart(pts);
    let id = c.attach(Canvas::new(400, 300), Millis(100)).unwrap();

    assert_eq!(c.frame(Millis(600)).unwrap().texts().count(), 0);
    let mid = c.frame(Millis(1100)).unwrap();
    let label = mid.texts().next().unwrap();
    assert_eq!(label.text, "peak");
    assert!((label.opacity - 0.5).abs() < 1e-9);
    assert_eq!(label.anchor, TextAnchor::Start);

    assert_eq!(c.busy_until(), Some(Millis(1600)));
    assert_eq!(c.poll(Millis(1599)), None);
    assert_eq!(c.poll(Millis(1600)), Some(id));
    assert_eq!(c.poll(Millis(1700)), None);
}

#[test]
fn date_axis_uses_short_labels() {
    let mut c = chart(series(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    c.attach(Canvas::new(400, 300), Millis(0));
    let scene = c.frame(Millis(0)).unwrap();
    let bottom = scene
        .axes()
        .find(|a| a.orient == AxisOrient::Bottom)
        .unwrap();
    let first = bottom.ticks.first().unwrap();
    assert_eq!(first.label, "1/1");
    assert_eq!(first.pos, 30.0);
    assert_eq!(bottom.ticks.last().unwrap().label, "1/5");
}

#[test]
fn demo_series_annotates_its_messages() {
    let mut c = AnnotatedLineChart::new(
        Arc::new(demo_series()),
        LineStyle::default(),
        Padding::default(),
        Rgba8::WHITE,
    );
    c.attach(Canvas::new(960, 540), Millis(0));
    let scene = c.frame(Millis(5000)).unwrap();
    assert_eq!(scene.texts().count(), 4);
    let last = scene.texts().last().unwrap();
    assert_eq!(last.anchor, TextAnchor::End);
}

#[test]
fn empty_series_shows_a_placeholder() {
    let mut c = chart(Vec::new());
    c.attach(Canvas::new(200, 100), Millis(0));
    let scene = c.frame(Millis(0)).unwrap();
    assert_eq!(scene.texts().next().unwrap().text, "No data");
}
