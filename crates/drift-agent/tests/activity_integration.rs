//! Integration tests for the activity scheduler against the simulated desktop.
//!
//! These run whole scheduled actions end to end on paused Tokio time: the
//! scheduler reads the cursor from the simulated desktop, plays a generated
//! motion into it, taps the routine keys, and waits for the next interval.

use std::sync::Arc;
use std::time::Duration;

use drift_agent::application::{
    activity::{ActivityRoutine, ActivityService},
    inject_input::InjectionError,
    shutdown::ShutdownSignal,
};
use drift_agent::infrastructure::{
    input_injection::mock::MockInputInjector, simulated::SimulatedDesktop,
};
use drift_core::{ActivityKey, InputAction, MotionEngine, Point, ScheduleConfig, ScreenBounds};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const BOUNDS: ScreenBounds = ScreenBounds::new(1920, 1080);
const START: Point = Point::new(960, 540);

fn service_on(
    desktop: &SimulatedDesktop,
    seed: u64,
) -> ActivityService<ChaCha8Rng> {
    ActivityService::new(
        Box::new(desktop.clone()),
        Box::new(desktop.clone()),
        BOUNDS,
        MotionEngine::default(),
        ActivityRoutine::default(),
        ScheduleConfig::default(),
        ChaCha8Rng::seed_from_u64(seed),
    )
}

/// Splits a history into `(moves, keys)` per action.
fn split_actions(history: &[InputAction]) -> Vec<(Vec<Point>, Vec<ActivityKey>)> {
    let mut actions = Vec::new();
    let mut moves = Vec::new();
    let mut keys = Vec::new();
    for action in history {
        match action {
            InputAction::MoveTo(p) => {
                if !keys.is_empty() {
                    actions.push((std::mem::take(&mut moves), std::mem::take(&mut keys)));
                }
                moves.push(*p);
            }
            InputAction::KeyTap(k) => keys.push(*k),
        }
    }
    if !moves.is_empty() || !keys.is_empty() {
        actions.push((moves, keys));
    }
    actions
}

#[tokio::test(start_paused = true)]
async fn test_consecutive_actions_chain_from_the_previous_cursor() {
    // Arrange
    let desktop = SimulatedDesktop::new(BOUNDS, START);
    let mut service = service_on(&desktop, 7);

    // Act
    let performed = service.run(&ShutdownSignal::new(), Some(3)).await;

    // Assert
    assert_eq!(performed, 3);
    let actions = split_actions(&desktop.history());
    assert_eq!(actions.len(), 3);

    let mut cursor = START;
    for (moves, keys) in &actions {
        assert_eq!(moves.first(), Some(&cursor), "motion must start at the cursor");
        let target = *moves.last().expect("non-empty motion");
        assert!(BOUNDS.contains(target), "target {target:?} off screen");
        assert_eq!(keys, &vec![ActivityKey::Escape, ActivityKey::NumLock]);
        cursor = target;
    }
    assert_eq!(desktop.cursor(), cursor);
}

#[tokio::test(start_paused = true)]
async fn test_every_motion_has_a_step_count_that_is_a_multiple_of_fifty() {
    let desktop = SimulatedDesktop::new(BOUNDS, START);
    let mut service = service_on(&desktop, 99);

    service.run(&ShutdownSignal::new(), Some(4)).await;

    for (moves, _) in split_actions(&desktop.history()) {
        let steps = moves.len() - 1;
        assert_eq!(steps % 50, 0, "steps = {steps}");
        assert!((150..=350).contains(&steps), "steps = {steps}");
    }
}

#[tokio::test(start_paused = true)]
async fn test_same_seed_replays_the_same_run() {
    // Arrange
    let first = SimulatedDesktop::new(BOUNDS, START);
    let second = SimulatedDesktop::new(BOUNDS, START);

    // Act
    service_on(&first, 1234).run(&ShutdownSignal::new(), Some(2)).await;
    service_on(&second, 1234).run(&ShutdownSignal::new(), Some(2)).await;

    // Assert
    assert_eq!(first.history(), second.history());
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_during_the_first_wait_performs_nothing() {
    // Arrange
    let desktop = SimulatedDesktop::new(BOUNDS, START);
    let mut service = service_on(&desktop, 5);
    let shutdown = Arc::new(ShutdownSignal::new());
    let trigger = Arc::clone(&shutdown);
    tokio::spawn(async move {
        // Shorter than the minimum interval of 10 s.
        tokio::time::sleep(Duration::from_secs(5)).await;
        trigger.trigger();
    });

    // Act
    let performed = service.run(&shutdown, None).await;

    // Assert
    assert_eq!(performed, 0);
    assert!(desktop.history().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_injection_failures_are_not_fatal() {
    // Arrange: the injector accepts ten cursor moves, then refuses everything.
    let desktop = SimulatedDesktop::new(BOUNDS, START);
    let injector = Arc::new(MockInputInjector::failing_after(
        10,
        InjectionError::Rejected("desktop locked".into()),
    ));
    let mut service = ActivityService::new(
        Box::new(Arc::clone(&injector)),
        Box::new(desktop.clone()),
        BOUNDS,
        MotionEngine::default(),
        ActivityRoutine::default(),
        ScheduleConfig::default(),
        ChaCha8Rng::seed_from_u64(3),
    );

    // Act
    let report = service.perform_action(&ShutdownSignal::new()).await;
    let performed = service.run(&ShutdownSignal::new(), Some(2)).await;

    // Assert: the motion stopped at the first failure, both key taps failed,
    // and the scheduler still ran its next actions.
    assert_eq!(injector.recorded().len(), 10);
    assert_eq!(report.failures, 3);
    assert_eq!(report.keys_tapped, 0);
    assert_eq!(performed, 2);
}
