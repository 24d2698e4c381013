use super::*;
use crate::{
    data::{dataset::DataPoint, demo::demo_series, series::LinePoint},
    scene::model::TextAnchor,
};

fn two_steps() -> Dataset {
    Dataset::from_json_str(
        r#"{ "2020-01-01": [{"xvalue":1,"yvalue":2,"intensity":1}],
             "2020-01-02": [{"xvalue":3,"yvalue":4,"intensity":2}] }"#,
    )
    .unwrap()
}

fn app(kind: ChartKind) -> App {
    App::with_view(ChartConfig::default(), two_steps(), demo_series(), kind).unwrap()
}

#[test]
fn starts_on_the_transition_scatterplot() {
    let a = App::new(ChartConfig::default(), two_steps(), demo_series()).unwrap();
    assert_eq!(a.selected(), ChartKind::TransitionScatter);
    assert!(!a.menu().open);
    assert_eq!(a.timeline().unwrap().step_index, 0);
    assert_eq!(a.frame().unwrap().marks().count(), 1);
}

#[test]
fn scrub_to_second_step_shows_its_single_mark() {
    let mut a = app(ChartKind::AnimatedScatter);
    a.dispatch(UiEvent::Slider(1)).unwrap();
    a.advance(Millis(600)).unwrap();

    let scales = a.view().as_bubble().unwrap().scales().unwrap();
    let scene = a.frame().unwrap();
    let marks: Vec<_> = scene.marks().collect();
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].center, Point::new(scales.x.map(3.0), scales.y.map(4.0)));
    assert_eq!(marks[0].radius, 10.0);
    assert_eq!(a.controls().unwrap().date_label, "1/2/2020");
}

#[test]
fn play_ticks_once_then_stops() {
    let mut a = app(ChartKind::TransitionScatter);
    a.dispatch(UiEvent::PlayButton).unwrap();
    assert!(a.timeline().unwrap().is_playing);

    a.advance(Millis(999)).unwrap();
    assert_eq!(a.timeline().unwrap().step_index, 0);
    a.advance(Millis(1)).unwrap();
    let state = a.timeline().unwrap();
    assert_eq!(state.step_index, 1);
    assert!(!state.is_playing);
    assert_eq!(a.active_timers(), 0);

    a.advance(Millis(5000)).unwrap();
    assert_eq!(a.timeline().unwrap().step_index, 1);
}

#[test]
fn switching_views_cancels_the_timer() {
    let mut a = app(ChartKind::AnimatedScatter);
    a.dispatch(UiEvent::PlayButton).unwrap();
    assert_eq!(a.active_timers(), 1);
    a.dispatch(UiEvent::MenuItem("Annotated Line Chart".into()))
        .unwrap();
    assert_eq!(a.selected(), ChartKind::AnnotatedLine);
    assert_eq!(a.active_timers(), 0);
    assert!(a.controls().is_none());

    a.dispatch(UiEvent::PlayButton).unwrap();
    a.dispatch(UiEvent::Slider(1)).unwrap();
    assert_eq!(a.active_timers(), 0);
}

#[test]
fn reselecting_keeps_the_mounted_view() {
    let mut a = app(ChartKind::TransitionScatter);
    a.dispatch(UiEvent::Slider(1)).unwrap();
    a.dispatch(UiEvent::MenuItem("Transition Scatterplot".into()))
        .unwrap();
    assert_eq!(a.timeline().unwrap().step_index, 1);

    a.dispatch(UiEvent::PlayButton).unwrap();
    assert_eq!(a.timeline().unwrap().step_index, 0);
    a.dispatch(UiEvent::MenuItem("Transition Scatterplot".into()))
        .unwrap();
    assert!(a.timeline().unwrap().is_playing);
    assert_eq!(a.active_timers(), 1);
}

#[test]
fn unknown_menu_id_falls_back_to_the_line_chart() {
    let mut a = app(ChartKind::TransitionScatter);
    a.dispatch(UiEvent::MenuItem("Bar Chart".into())).unwrap();
    assert_eq!(a.selected(), ChartKind::AnnotatedLine);
    assert!(a.frame().is_ok());
}

#[test]
fn menu_toggle_resizes_after_the_layout_transition() {
    let mut a = app(ChartKind::TransitionScatter);
    let full = a.content_canvas();
    a.dispatch(UiEvent::MenuButton).unwrap();
    assert!(a.menu().open);
    assert!(a.layout_in_progress());
    assert_eq!(a.frame().unwrap().canvas, full);

    a.advance(Millis(499)).unwrap();
    assert_eq!(a.frame().unwrap().canvas, full);
    a.advance(Millis(1)).unwrap();
    assert!(!a.layout_in_progress());
    assert_eq!(a.frame().unwrap().canvas, Canvas::new(760, 540));

    a.dispatch(UiEvent::MenuButton).unwrap();
    a.advance(Millis(500)).unwrap();
    assert_eq!(a.frame().unwrap().canvas, full);
}

#[test]
fn layout_redraw_keeps_the_current_step() {
    let mut a = app(ChartKind::AnimatedScatter);
    a.dispatch(UiEvent::PlayButton).unwrap();
    a.dispatch(UiEvent::MenuButton).unwrap();
    a.advance(Millis(2000)).unwrap();
    assert_eq!(a.timeline().unwrap().step_index, 1);
    assert_eq!(a.frame().unwrap().marks().count(), 1);
}

#[test]
fn window_resize_redraws() {
    let mut a = app(ChartKind::AnimatedScatter);
    a.dispatch(UiEvent::Resize(Canvas::new(640, 480))).unwrap();
    assert_eq!(a.frame().unwrap().canvas, Canvas::new(640, 480));
    assert_eq!(
        a.view().as_bubble().unwrap().scales().unwrap().x.range(),
        [30.0, 590.0]
    );
}

#[test]
fn pointer_events_drive_the_tooltip() {
    let mut a = app(ChartKind::AnimatedScatter);
    a.advance(Millis(600)).unwrap();
    let scales = a.view().as_bubble().unwrap().scales().unwrap();
    a.dispatch(UiEvent::PointerMove(Point::new(scales.x.map(1.0), scales.y.map(2.0))))
        .unwrap();
    let tip = *a.view().as_bubble().unwrap().tooltip().unwrap();
    assert_eq!(tip.point, DataPoint::new(1.0, 2.0, 1.0));
    a.dispatch(UiEvent::PointerOut).unwrap();
    assert!(a.view().as_bubble().unwrap().tooltip().is_none());
}

#[test]
fn last_line_label_is_right_aligned_above() {
    let series = LineSeries::new(vec![
        LinePoint::new("2020-01-01", 5.0),
        LinePoint::new("2020-01-02", 10.0).with_message("peak"),
    ])
    .unwrap();
    let mut a = App::with_view(
        ChartConfig::default(),
        two_steps(),
        series,
        ChartKind::AnnotatedLine,
    )
    .unwrap();
    a.advance(Millis(2000)).unwrap();
    let scene = a.frame().unwrap();
    let label = scene.texts().next().unwrap();
    assert_eq!(label.text, "peak");
    assert_eq!(label.anchor, TextAnchor::End);
    let line = scene
        .nodes
        .iter()
        .find_map(|n| match n {
            crate::scene::model::Node::Line(l) => Some(*l),
            _ => None,
        })
        .unwrap();
    assert!((line.to.x - line.from.x + 10.0).abs() < 1e-9);
    assert!((line.to.y - line.from.y + 30.0).abs() < 1e-9);
}

#[test]
fn busy_until_covers_view_and_layout() {
    let mut a = app(ChartKind::TransitionScatter);
    assert_eq!(a.busy_until(), Some(Millis(750)));
    a.dispatch(UiEvent::MenuButton).unwrap();
    assert_eq!(a.busy_until(), Some(Millis(750)));
    a.advance(Millis(600)).unwrap();
    assert_eq!(a.busy_until(), Some(Millis(1250)));
    assert!(a.poll_view().is_none());
    a.advance(Millis(700)).unwrap();
    assert!(a.poll_view().is_some());
    assert_eq!(a.busy_until(), None);
}
