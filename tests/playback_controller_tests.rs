use lifelines::playback::{DEFAULT_TICK_PERIOD_SECONDS, PlaybackController, PlaybackPhase};

#[test]
fn new_controller_starts_idle_at_zero() {
    let controller = PlaybackController::new(5);
    assert_eq!(controller.phase(), PlaybackPhase::Idle);
    assert_eq!(controller.current_index(), 0);
    assert!(!controller.is_playing());
    assert!(!controller.timer_active());
    assert_eq!(
        controller.tick_period_seconds(),
        DEFAULT_TICK_PERIOD_SECONDS
    );
}

#[test]
fn start_with_fewer_than_two_events_is_a_no_op() {
    let mut empty = PlaybackController::new(0);
    assert!(!empty.start());
    assert_eq!(empty.phase(), PlaybackPhase::Idle);
    assert!(!empty.timer_active());

    let mut single = PlaybackController::new(1);
    assert!(!single.start());
    assert_eq!(single.phase(), PlaybackPhase::Idle);
}

#[test]
fn run_of_n_events_finishes_after_n_minus_one_ticks() {
    let event_count = 6;
    let mut controller = PlaybackController::with_period(event_count, 1.0);
    assert!(controller.start());

    for expected_index in 1..event_count - 1 {
        assert!(!controller.advance(1.0));
        assert_eq!(controller.current_index(), expected_index);
        assert_eq!(controller.phase(), PlaybackPhase::Playing);
        assert!(controller.timer_active());
    }

    assert!(controller.advance(1.0));
    assert_eq!(controller.current_index(), event_count - 1);
    assert_eq!(controller.phase(), PlaybackPhase::Finished);
    assert!(!controller.timer_active());

    // Additional elapsed time never moves the cursor again.
    assert!(!controller.advance(100.0));
    assert_eq!(controller.current_index(), event_count - 1);
}

#[test]
fn advance_fires_multiple_ticks_for_large_deltas() {
    let mut controller = PlaybackController::with_period(10, 2.5);
    assert!(controller.start());

    controller.advance(7.6);
    assert_eq!(controller.current_index(), 3);
    assert_eq!(controller.phase(), PlaybackPhase::Playing);
}

#[test]
fn advance_carries_sub_period_remainders() {
    let mut controller = PlaybackController::with_period(4, 2.5);
    assert!(controller.start());

    controller.advance(2.0);
    assert_eq!(controller.current_index(), 0);
    controller.advance(0.5);
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn large_delta_stops_cleanly_at_finished() {
    let mut controller = PlaybackController::with_period(3, 1.0);
    assert!(controller.start());

    assert!(controller.advance(50.0));
    assert_eq!(controller.current_index(), 2);
    assert_eq!(controller.phase(), PlaybackPhase::Finished);
    assert!(!controller.timer_active());
}

#[test]
fn start_while_playing_is_a_no_op_and_preserves_elapsed_time() {
    let mut controller = PlaybackController::with_period(5, 2.5);
    assert!(controller.start());
    controller.advance(2.0);

    // Second start must not cancel-and-recreate the running timer.
    assert!(!controller.start());
    controller.advance(0.6);
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn pause_cancels_the_pending_tick() {
    let mut controller = PlaybackController::with_period(5, 1.0);
    assert!(controller.start());
    controller.advance(1.0);
    assert_eq!(controller.current_index(), 1);

    controller.pause();
    assert_eq!(controller.phase(), PlaybackPhase::Paused);
    assert!(!controller.timer_active());

    controller.advance(10.0);
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn resume_after_pause_uses_a_fresh_timer() {
    let mut controller = PlaybackController::with_period(5, 1.0);
    assert!(controller.start());
    controller.advance(0.9);
    controller.pause();

    assert!(controller.start());
    controller.advance(0.9);
    // The pre-pause 0.9s must not leak into the new timer.
    assert_eq!(controller.current_index(), 0);
    controller.advance(0.1);
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn skip_next_clamps_at_last_index() {
    let mut controller = PlaybackController::new(3);
    controller.skip_next();
    controller.skip_next();
    assert_eq!(controller.current_index(), 2);

    controller.skip_next();
    assert_eq!(controller.current_index(), 2);
}

#[test]
fn skip_next_does_not_change_play_status() {
    let mut paused = PlaybackController::with_period(4, 1.0);
    assert!(paused.start());
    paused.pause();
    paused.skip_next();
    assert_eq!(paused.phase(), PlaybackPhase::Paused);

    let mut playing = PlaybackController::with_period(4, 1.0);
    assert!(playing.start());
    playing.skip_next();
    assert_eq!(playing.phase(), PlaybackPhase::Playing);
    assert!(playing.timer_active());
}

#[test]
fn skip_on_empty_sequence_stays_at_zero() {
    let mut controller = PlaybackController::new(0);
    controller.skip_next();
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn jump_to_clamps_out_of_range_indices() {
    let mut controller = PlaybackController::new(4);
    controller.jump_to(2);
    assert_eq!(controller.current_index(), 2);

    controller.jump_to(99);
    assert_eq!(controller.current_index(), 3);
}

#[test]
fn jump_while_playing_keeps_playing() {
    let mut controller = PlaybackController::with_period(6, 1.0);
    assert!(controller.start());
    controller.jump_to(3);
    assert_eq!(controller.phase(), PlaybackPhase::Playing);
    assert!(controller.timer_active());
}

#[test]
fn tick_while_parked_at_last_index_finishes_without_moving() {
    let mut controller = PlaybackController::with_period(4, 1.0);
    assert!(controller.start());
    controller.jump_to(3);

    assert!(controller.advance(1.0));
    assert_eq!(controller.current_index(), 3);
    assert_eq!(controller.phase(), PlaybackPhase::Finished);
}

#[test]
fn completion_fires_at_most_once_per_run() {
    let mut controller = PlaybackController::with_period(2, 1.0);
    assert!(controller.start());
    assert!(controller.advance(1.0));
    assert!(!controller.advance(1.0));

    // Start is gated while finished; only reset re-arms the run.
    assert!(!controller.start());
    assert_eq!(controller.phase(), PlaybackPhase::Finished);
}

#[test]
fn reset_returns_to_idle_and_rearms_completion() {
    let mut controller = PlaybackController::with_period(2, 1.0);
    assert!(controller.start());
    assert!(controller.advance(1.0));

    controller.reset();
    assert_eq!(controller.phase(), PlaybackPhase::Idle);
    assert_eq!(controller.current_index(), 0);
    assert!(!controller.timer_active());

    assert!(controller.start());
    assert!(controller.advance(1.0));
}

#[test]
fn reset_cancels_a_running_timer() {
    let mut controller = PlaybackController::with_period(5, 1.0);
    assert!(controller.start());
    controller.advance(1.0);

    controller.reset();
    controller.advance(10.0);
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.phase(), PlaybackPhase::Idle);
}

#[test]
fn non_positive_and_non_finite_deltas_are_ignored() {
    let mut controller = PlaybackController::with_period(3, 1.0);
    assert!(controller.start());

    controller.advance(0.0);
    controller.advance(-5.0);
    controller.advance(f64::NAN);
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.phase(), PlaybackPhase::Playing);
}

#[test]
fn state_snapshot_reflects_phase() {
    let mut controller = PlaybackController::with_period(3, 1.0);
    let idle = controller.state();
    assert_eq!(idle.current_index, 0);
    assert!(!idle.is_playing);

    assert!(controller.start());
    assert!(controller.state().is_playing);

    controller.pause();
    assert!(!controller.state().is_playing);
}
