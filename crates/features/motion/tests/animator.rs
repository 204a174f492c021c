use std::time::Duration;

use folio_motion::{Cadence, StepAnimator, StepSequencer};

const FAST: Cadence = Cadence {
    step: Duration::from_millis(10),
    hold: Duration::from_millis(30),
    reset: Duration::from_millis(5),
};

#[tokio::test(start_paused = true)]
async fn frames_advance_one_step_at_a_time() {
    let animator = StepAnimator::spawn(StepSequencer::with_cadence(4, FAST));
    let mut rx = animator.frames();

    assert_eq!(animator.current().visible, 0);
    for expected in 1..=4 {
        rx.changed().await.unwrap();
        let frame = *rx.borrow_and_update();
        assert_eq!(frame.visible, expected);
        assert_eq!(frame.head, Some(expected - 1));
        assert!(!frame.resetting);
    }
}

#[tokio::test(start_paused = true)]
async fn cycle_signals_reset_then_restarts() {
    let animator = StepAnimator::spawn(StepSequencer::with_cadence(2, FAST));
    let mut rx = animator.frames();

    // Two reveals, then the hold expires into the reset signal with the
    // full path still on screen.
    for _ in 0..3 {
        rx.changed().await.unwrap();
    }
    let signalled = *rx.borrow_and_update();
    assert!(signalled.resetting);
    assert_eq!(signalled.visible, 2);
    assert_eq!(signalled.head, Some(1));

    // Reset expires: the path clears and the next round begins.
    rx.changed().await.unwrap();
    let restarted = *rx.borrow_and_update();
    assert!(!restarted.resetting);
    assert_eq!(restarted.visible, 0);
    assert_eq!(restarted.head, None);

    rx.changed().await.unwrap();
    let frame = *rx.borrow_and_update();
    assert_eq!(frame.visible, 1);
    assert!(!frame.resetting);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_animator_stops_the_feed() {
    let animator = StepAnimator::spawn(StepSequencer::with_cadence(3, FAST));
    let mut rx = animator.frames();
    rx.changed().await.unwrap();

    drop(animator);
    tokio::time::sleep(Duration::from_secs(1)).await;

    // The publishing task is gone; waiting for another frame fails instead
    // of hanging.
    assert!(rx.changed().await.is_err());
}
