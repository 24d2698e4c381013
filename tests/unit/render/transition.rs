use super::*;
use crate::{
    animation::ease::Ease,
    data::dataset::{DataPoint, DatasetExtent},
    foundation::core::{Padding, Point},
    render::marks::BubbleStyle,
    scale::{color::Palette, set::ScaleSet},
};

struct Fixture {
    scales: ScaleSet,
    padding: Padding,
    style: BubbleStyle,
}

impl Fixture {
    fn new() -> Self {
        let padding = Padding::default();
        Self {
            scales: ScaleSet::derive(
                &DatasetExtent {
                    max_x: 4.0,
                    max_y: 4.0,
                    max_intensity: 2.0,
                },
                Canvas::new(400, 300),
                &padding,
                Palette::BLUE_RED,
            ),
            padding,
            style: BubbleStyle {
                ease: Ease::Linear,
                ..BubbleStyle::transition()
            },
        }
    }

    fn ctx<'a>(&'a self, points: &'a [DataPoint], now: u64) -> DrawCtx<'a> {
        DrawCtx {
            points,
            scales: &self.scales,
            canvas: Canvas::new(400, 300),
            padding: &self.padding,
            style: &self.style,
            background: Rgba8::WHITE,
            now: Millis(now),
        }
    }
}

fn at(v: f64, n: usize) -> Vec<DataPoint> {
    (0..n).map(|_| DataPoint::new(v, v, 1.0)).collect()
}

fn centers(r: &TransitionRenderer, now: u64) -> Vec<Point> {
    r.scene(Millis(now))
        .unwrap()
        .marks()
        .map(|m| m.center)
        .collect()
}

#[test]
fn marks_move_between_steps() {
    let fx = Fixture::new();
    let mut r = TransitionRenderer::new();
    let (a, b) = (at(0.0, 2), at(4.0, 2));
    r.draw(&fx.ctx(&a, 0));
    r.show_step(&fx.ctx(&b, 1000));

    let start = fx.scales.x.map(0.0);
    let end = fx.scales.x.map(4.0);
    assert_eq!(centers(&r, 1000)[0].x, start);
    let mid = centers(&r, 1375)[0].x;
    assert!((mid - (start + end) / 2.0).abs() < 1e-9);
    assert_eq!(centers(&r, 1750)[1].x, end);
    assert_eq!(r.mark_count(), 2);
}

#[test]
fn interrupted_transition_continues_from_current_position() {
    let fx = Fixture::new();
    let mut r = TransitionRenderer::new();
    let (a, b, c) = (at(0.0, 1), at(4.0, 1), at(2.0, 1));
    r.draw(&fx.ctx(&a, 0));
    r.show_step(&fx.ctx(&b, 1000));
    let mid = centers(&r, 1375)[0];
    r.show_step(&fx.ctx(&c, 1375));
    assert!(centers(&r, 1375)[0].distance(mid) < 1e-9);
    assert_eq!(centers(&r, 2125)[0].x, fx.scales.x.map(2.0));
}

#[test]
fn surplus_points_enter_and_missing_ones_exit() {
    let fx = Fixture::new();
    let mut r = TransitionRenderer::new();
    let (three, one) = (at(1.0, 3), at(2.0, 1));
    r.draw(&fx.ctx(&three, 0));
    r.poll_completion(Millis(750));

    let id = r.show_step(&fx.ctx(&one, 1000));
    assert_eq!(r.mark_count(), 3);
    let fading: Vec<f64> = r
        .scene(Millis(1375))
        .unwrap()
        .marks()
        .map(|m| m.opacity)
        .collect();
    assert!((fading[1] - 0.4).abs() < 1e-9);
    assert_eq!(r.poll_completion(Millis(1750)), Some(id));
    assert_eq!(r.mark_count(), 1);

    let four = at(1.0, 4);
    r.show_step(&fx.ctx(&four, 2000));
    let scene = r.scene(Millis(2000)).unwrap();
    let marks: Vec<_> = scene.marks().collect();
    assert_eq!(marks.len(), 4);
    assert_eq!(marks[3].opacity, 0.0);
    assert_eq!(marks[3].center.x, fx.scales.x.map(1.0));
    assert_eq!(r.scene(Millis(2750)).unwrap().marks().nth(3).unwrap().opacity, 0.8);
}

#[test]
fn exiting_mark_can_come_back() {
    let fx = Fixture::new();
    let mut r = TransitionRenderer::new();
    let (two, one) = (at(1.0, 2), at(1.0, 1));
    r.draw(&fx.ctx(&two, 0));
    r.show_step(&fx.ctx(&one, 1000));
    r.show_step(&fx.ctx(&two, 1375));
    assert!(r.poll_completion(Millis(2125)).is_some());
    assert_eq!(r.mark_count(), 2);
    let last = r.scene(Millis(2125)).unwrap().marks().nth(1).copied().unwrap();
    assert!((last.opacity - 0.8).abs() < 1e-9);
}

#[test]
fn only_the_latest_transition_completes() {
    let fx = Fixture::new();
    let mut r = TransitionRenderer::new();
    let (a, b) = (at(0.0, 1), at(4.0, 1));
    let first = r.draw(&fx.ctx(&a, 0));
    let second = r.show_step(&fx.ctx(&b, 100));
    assert_ne!(first, second);
    assert_eq!(r.poll_completion(Millis(750)), None);
    assert_eq!(r.poll_completion(Millis(850)), Some(second));
}

#[test]
fn show_step_before_draw_draws() {
    let fx = Fixture::new();
    let mut r = TransitionRenderer::new();
    let pts = at(1.0, 2);
    r.show_step(&fx.ctx(&pts, 0));
    assert_eq!(r.scene(Millis(0)).unwrap().marks().count(), 2);
}
