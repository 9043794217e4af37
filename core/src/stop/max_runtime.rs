//! Wall-clock stopping criterion

use std::time::{Duration, Instant};

use super::StoppingCriterion;

/// Stops the search after a given wall-clock runtime (in seconds)
///
/// The counter starts from the moment the criterion is constructed, not
/// from the first iteration.
///
/// # Example
/// ```
/// use solver_core_rs::{MaxRuntime, StoppingCriterion};
///
/// let mut stop = MaxRuntime::new(60.0);
/// assert!(!stop.should_stop(0));
/// ```
#[derive(Debug, Clone)]
pub struct MaxRuntime {
    max_runtime: Duration,
    start: Instant,
}

impl MaxRuntime {
    /// Create a criterion with a maximum runtime in seconds
    ///
    /// # Panics
    /// Panics if `max_runtime` is not positive.
    pub fn new(max_runtime: f64) -> Self {
        assert!(max_runtime > 0.0, "max_runtime must be positive");
        Self {
            max_runtime: Duration::from_secs_f64(max_runtime),
            start: Instant::now(),
        }
    }
}

impl StoppingCriterion for MaxRuntime {
    fn should_stop(&mut self, _best_cost: u64) -> bool {
        self.start.elapsed() >= self.max_runtime
    }
}
