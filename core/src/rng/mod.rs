//! Deterministic random number generation
//!
//! Uses the 128-bit xorshift algorithm for fast, deterministic random number
//! generation. CRITICAL: All randomness in the search MUST go through this
//! module.

mod xorshift;

pub use xorshift::{RandomNumberGenerator, RngError};
