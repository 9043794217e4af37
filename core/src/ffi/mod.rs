//! Python interface (PyO3)
//!
//! Converts between Rust types and Python at the boundary. Kept minimal and
//! safe: validation failures surface as Python exceptions, never as
//! corrupted generator state.

pub mod rng;

pub use rng::PyRandomNumberGenerator;
