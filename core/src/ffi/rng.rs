//! PyO3 wrapper for RandomNumberGenerator
//!
//! This module provides the Python interface to the Rust generator.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rng::RandomNumberGenerator as RustRng;

/// Python wrapper for the Rust RandomNumberGenerator
///
/// # Example (from Python)
///
/// ```python
/// from solver_core_rs import RandomNumberGenerator
///
/// rng = RandomNumberGenerator(seed=42)
/// assert rng() == 2386648076
/// assert rng.randint(99) == 84  # second draw, mod 100
///
/// rng = RandomNumberGenerator(state=[1, 2, 3, 4])
/// assert rng.state() == [1, 2, 3, 4]
/// ```
#[pyclass(name = "RandomNumberGenerator")]
pub struct PyRandomNumberGenerator {
    inner: RustRng,
}

#[pymethods]
impl PyRandomNumberGenerator {
    /// Create a generator from a seed or an explicit four-word state
    ///
    /// # Arguments
    ///
    /// * `seed` - 32-bit unsigned seed, expanded into the initial state
    /// * `state` - Explicit state: exactly 4 integers in [0, 2^32 - 1]
    ///
    /// Exactly one of the two must be given.
    ///
    /// # Errors
    ///
    /// Raises ValueError if:
    /// - Both or neither of `seed` and `state` are given
    /// - `state` does not contain exactly 4 words
    ///
    /// Raises OverflowError if a value does not fit in 32 bits.
    #[new]
    #[pyo3(signature = (seed=None, state=None))]
    fn new(seed: Option<u32>, state: Option<Vec<u32>>) -> PyResult<Self> {
        let inner = match (seed, state) {
            (Some(seed), None) => RustRng::new(seed),
            (None, Some(words)) => {
                RustRng::from_state(&words).map_err(|e| PyValueError::new_err(e.to_string()))?
            }
            _ => {
                return Err(PyValueError::new_err(
                    "provide exactly one of 'seed' and 'state'",
                ))
            }
        };

        Ok(PyRandomNumberGenerator { inner })
    }

    /// Draw the next raw 32-bit value
    ///
    /// Calling the generator as a function advances its state by one step.
    fn __call__(&mut self) -> u32 {
        self.inner.next()
    }

    /// Smallest value the generator can produce
    #[staticmethod]
    fn min() -> u32 {
        RustRng::min()
    }

    /// Largest value the generator can produce
    #[staticmethod]
    fn max() -> u32 {
        RustRng::max()
    }

    /// Draw a random integer in [0, high]
    fn randint(&mut self, high: u32) -> u32 {
        self.inner.randint(high)
    }

    /// Draw a uniform random float in [0, 1)
    fn rand(&mut self) -> f64 {
        self.inner.rand()
    }

    /// Current four-word state (for checkpoint/restore)
    fn state(&self) -> Vec<u32> {
        self.inner.state().to_vec()
    }
}
