//! Solver Core - Deterministic Search Primitives
//!
//! Reproducible building blocks for a metaheuristic search engine: the
//! random number generator that is the sole source of randomness, state
//! checkpointing for pause/resume, and stopping criteria that bound a run.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random number generation
//! - **checkpoint**: Save/restore of generator state
//! - **stop**: Stopping criteria (runtime, iteration budgets)
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG)
//! 2. Externally supplied state is validated eagerly at the boundary
//! 3. FFI boundary is minimal and safe

// Module declarations
pub mod checkpoint;
pub mod rng;
pub mod stop;

// Re-exports for convenience
pub use checkpoint::{validate_snapshot, CheckpointError, RngSnapshot};
pub use rng::{RandomNumberGenerator, RngError};
pub use stop::{MaxIterations, MaxRuntime, StoppingCriterion};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn solver_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::rng::PyRandomNumberGenerator>()?;
    Ok(())
}
