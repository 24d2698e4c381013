use super::*;
use crate::timeline::clock::VirtualClock;

/// Drive the clock to `until`, feeding ticks to the controller and recording redraw requests.
fn run(ctl: &mut TimelineController, clock: &mut VirtualClock, until: Millis) -> Vec<usize> {
    let mut shown = Vec::new();
    while let Some(id) = clock.next_due(until) {
        if let Some(step) = ctl.on_tick(id, clock) {
            shown.push(step);
        }
        assert!(ctl.step_index() <= ctl.last_index());
    }
    clock.advance_to(until);
    shown
}

#[test]
fn empty_timeline_is_rejected() {
    assert!(matches!(
        TimelineController::new(0, DEFAULT_PLAYBACK_PERIOD),
        Err(ChartError::EmptyDataset)
    ));
}

#[test]
fn scrub_sets_step_without_touching_playback() {
    let mut clock = VirtualClock::new();
    let mut ctl = TimelineController::new(5, DEFAULT_PLAYBACK_PERIOD).unwrap();
    assert_eq!(ctl.scrub_to(3, &mut clock), 3);
    assert!(!ctl.is_playing());

    ctl.scrub_to(0, &mut clock);
    ctl.play(&mut clock);
    assert_eq!(ctl.scrub_to(2, &mut clock), 2);
    assert!(ctl.is_playing());
}

#[test]
fn scrub_clamps_out_of_range_input() {
    let mut clock = VirtualClock::new();
    let mut ctl = TimelineController::new(3, DEFAULT_PLAYBACK_PERIOD).unwrap();
    assert_eq!(ctl.scrub_to(99, &mut clock), 2);
    assert_eq!(ctl.step_index(), 2);
}

#[test]
fn two_step_playback_ticks_once_then_auto_stops() {
    let mut clock = VirtualClock::new();
    let mut ctl = TimelineController::new(2, DEFAULT_PLAYBACK_PERIOD).unwrap();
    assert_eq!(ctl.play(&mut clock), None);
    assert!(ctl.is_playing());
    assert_eq!(clock.active_timers(), 1);

    let shown = run(&mut ctl, &mut clock, Millis(5000));
    assert_eq!(shown, [1]);
    assert_eq!(
        ctl.state(),
        TimelineState {
            step_index: 1,
            is_playing: false
        }
    );
    assert_eq!(clock.active_timers(), 0);
    assert_eq!(ctl.timer(), None);
}

#[test]
fn play_from_last_step_rewinds_and_stays_in_bounds() {
    let mut clock = VirtualClock::new();
    let mut ctl = TimelineController::new(4, DEFAULT_PLAYBACK_PERIOD).unwrap();
    ctl.scrub_to(3, &mut clock);

    assert_eq!(ctl.play(&mut clock), Some(0));
    assert_eq!(ctl.step_index(), 0);

    let shown = run(&mut ctl, &mut clock, Millis(10_000));
    assert_eq!(shown, [1, 2, 3]);
    assert!(!ctl.is_playing());
    assert_eq!(clock.active_timers(), 0);
}

#[test]
fn single_step_play_stops_without_scheduling() {
    let mut clock = VirtualClock::new();
    let mut ctl = TimelineController::new(1, DEFAULT_PLAYBACK_PERIOD).unwrap();
    assert_eq!(ctl.play(&mut clock), Some(0));
    assert!(!ctl.is_playing());
    assert_eq!(clock.active_timers(), 0);
    assert!(run(&mut ctl, &mut clock, Millis(5000)).is_empty());
}

#[test]
fn scrubbing_onto_last_step_while_playing_stops() {
    let mut clock = VirtualClock::new();
    let mut ctl = TimelineController::new(6, DEFAULT_PLAYBACK_PERIOD).unwrap();
    ctl.play(&mut clock);
    ctl.scrub_to(5, &mut clock);
    assert!(!ctl.is_playing());
    assert_eq!(clock.active_timers(), 0);
}

#[test]
fn toggle_twice_restores_flag_with_at_most_one_timer() {
    let mut clock = VirtualClock::new();
    let mut ctl = TimelineController::new(5, DEFAULT_PLAYBACK_PERIOD).unwrap();

    ctl.toggle(&mut clock);
    assert!(ctl.is_playing());
    assert!(clock.active_timers() <= 1);
    ctl.toggle(&mut clock);
    assert!(!ctl.is_playing());
    assert_eq!(clock.active_timers(), 0);

    ctl.play(&mut clock);
    ctl.play(&mut clock);
    assert_eq!(clock.active_timers(), 1);
    ctl.toggle(&mut clock);
    ctl.toggle(&mut clock);
    assert!(ctl.is_playing());
    assert_eq!(clock.active_timers(), 1);
}

#[test]
fn stop_is_idempotent() {
    let mut clock = VirtualClock::new();
    let mut ctl = TimelineController::new(3, DEFAULT_PLAYBACK_PERIOD).unwrap();
    ctl.stop(&mut clock);
    ctl.stop(&mut clock);
    assert!(!ctl.is_playing());
    assert_eq!(clock.active_timers(), 0);
}

#[test]
fn stale_timer_ticks_are_ignored() {
    let mut clock = VirtualClock::new();
    let mut ctl = TimelineController::new(5, DEFAULT_PLAYBACK_PERIOD).unwrap();
    ctl.play(&mut clock);
    let old = ctl.timer().unwrap();
    ctl.stop(&mut clock);
    ctl.play(&mut clock);
    assert_eq!(ctl.on_tick(old, &mut clock), None);
    assert_eq!(ctl.step_index(), 0);
}

#[test]
fn ticks_follow_the_configured_period() {
    let mut clock = VirtualClock::new();
    let mut ctl = TimelineController::new(10, Millis(250)).unwrap();
    ctl.play(&mut clock);
    let shown = run(&mut ctl, &mut clock, Millis(1000));
    assert_eq!(shown, [1, 2, 3, 4]);
    assert!(ctl.is_playing());
}
