//! Tests for stopping criteria

use solver_core_rs::{MaxIterations, MaxRuntime, StoppingCriterion};
use std::thread;
use std::time::Duration;

#[test]
fn test_max_iterations_counts_calls() {
    let mut stop = MaxIterations::new(3);

    assert!(!stop.should_stop(100));
    assert!(!stop.should_stop(90));
    assert!(!stop.should_stop(80));
    assert!(stop.should_stop(70));
    assert!(stop.should_stop(60), "Criterion should stay stopped");
}

#[test]
fn test_max_iterations_single_iteration() {
    let mut stop = MaxIterations::new(1);

    assert!(!stop.should_stop(0));
    assert!(stop.should_stop(0));
}

#[test]
fn test_max_iterations_ignores_cost() {
    let mut improving = MaxIterations::new(2);
    let mut worsening = MaxIterations::new(2);

    for (down, up) in [(100u64, 10u64), (50, 20), (10, 100)] {
        assert_eq!(improving.should_stop(down), worsening.should_stop(up));
    }
}

#[test]
fn test_max_runtime_not_elapsed() {
    let mut stop = MaxRuntime::new(60.0);
    assert!(
        !stop.should_stop(0),
        "A 60s budget should not stop immediately"
    );
}

#[test]
fn test_max_runtime_counts_from_construction() {
    let mut stop = MaxRuntime::new(0.01);
    thread::sleep(Duration::from_millis(25));

    // First call is already past budget: the clock started at construction.
    assert!(stop.should_stop(0));
}

#[test]
fn test_criteria_usable_as_trait_objects() {
    let mut criteria: Vec<Box<dyn StoppingCriterion>> = vec![
        Box::new(MaxIterations::new(5)),
        Box::new(MaxRuntime::new(60.0)),
    ];

    for criterion in criteria.iter_mut() {
        assert!(!criterion.should_stop(42));
    }
}
