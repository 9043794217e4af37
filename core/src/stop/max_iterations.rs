//! Iteration-budget stopping criterion

use super::StoppingCriterion;

/// Stops the search after a given number of iterations
///
/// # Example
/// ```
/// use solver_core_rs::{MaxIterations, StoppingCriterion};
///
/// let mut stop = MaxIterations::new(2);
/// assert!(!stop.should_stop(0));
/// assert!(!stop.should_stop(0));
/// assert!(stop.should_stop(0));
/// ```
#[derive(Debug, Clone)]
pub struct MaxIterations {
    max_iterations: usize,
    current_iteration: usize,
}

impl MaxIterations {
    /// Create a criterion with a maximum iteration count
    ///
    /// # Panics
    /// Panics if `max_iterations` is zero.
    pub fn new(max_iterations: usize) -> Self {
        assert!(max_iterations > 0, "max_iterations must be positive");
        Self {
            max_iterations,
            current_iteration: 0,
        }
    }
}

impl StoppingCriterion for MaxIterations {
    fn should_stop(&mut self, _best_cost: u64) -> bool {
        let stop = self.current_iteration >= self.max_iterations;
        self.current_iteration += 1;
        stop
    }
}
