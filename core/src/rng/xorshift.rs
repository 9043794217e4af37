//! xorshift128 random number generator
//!
//! This is a fast, deterministic PRNG over four 32-bit words, suitable as
//! the sole source of randomness for reproducible search runs.
//!
//! # Algorithm
//!
//! Classic 128-bit xorshift (Marsaglia): each draw combines the first and
//! last state words through a fixed sequence of shifts and XORs, stores the
//! result in the first slot, and shifts the remaining words up. The period
//! is close to 2^128 - 1 for nonzero states.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact search runs)
//! - Testing (verify behavior against fixed sequences)
//! - Research (validate results)
//!
//! The seed expansion and recurrence are frozen: changing either silently
//! breaks reproducibility of every downstream computation that consumes
//! random draws.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when assigning generator state
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RngError {
    #[error("RNG state must contain exactly 4 words, got {got}")]
    InvalidStateLength { got: usize },
}

/// Deterministic random number generator using xorshift128
///
/// # Example
/// ```
/// use solver_core_rs::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::new(42);
/// assert_eq!(rng.next(), 2386648076);
/// assert_eq!(rng.next(), 1236469084);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomNumberGenerator {
    /// Internal state (four 32-bit words)
    state: [u32; 4],
}

impl RandomNumberGenerator {
    /// Create a new RNG with given seed
    ///
    /// The seed becomes the first state word; the remaining three words are
    /// the classic xorshift128 initializers. Nearby seeds therefore produce
    /// nearby first draws and diverge over subsequent draws.
    ///
    /// # Example
    /// ```
    /// use solver_core_rs::RandomNumberGenerator;
    ///
    /// let rng = RandomNumberGenerator::new(42);
    /// assert_eq!(rng.state(), [42, 123456789, 362436069, 521288629]);
    /// ```
    pub fn new(seed: u32) -> Self {
        Self {
            state: [seed, 123456789, 362436069, 521288629],
        }
    }

    /// Create an RNG with the given four-word state
    ///
    /// Used to resume a generator from a snapshot taken with `state()`.
    /// Validation is eager: a malformed state is rejected here and can never
    /// surface later as corrupted output.
    ///
    /// # Errors
    /// Returns `RngError::InvalidStateLength` if `words` does not contain
    /// exactly 4 elements.
    ///
    /// # Example
    /// ```
    /// use solver_core_rs::RandomNumberGenerator;
    ///
    /// let rng = RandomNumberGenerator::from_state(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(rng.state(), [1, 2, 3, 4]);
    ///
    /// assert!(RandomNumberGenerator::from_state(&[1, 2, 3]).is_err());
    /// ```
    pub fn from_state(words: &[u32]) -> Result<Self, RngError> {
        let state: [u32; 4] = words
            .try_into()
            .map_err(|_| RngError::InvalidStateLength { got: words.len() })?;
        Ok(Self { state })
    }

    /// Minimum value `next()` can produce
    pub const fn min() -> u32 {
        0
    }

    /// Maximum value `next()` can produce
    pub const fn max() -> u32 {
        u32::MAX
    }

    /// Generate next random u32 value
    ///
    /// This is the sole mutator: the state advances by exactly one step per
    /// call, and every derived draw is defined in terms of it.
    ///
    /// # Example
    /// ```
    /// use solver_core_rs::RandomNumberGenerator;
    ///
    /// let mut rng = RandomNumberGenerator::new(12345);
    /// let value = rng.next();
    /// ```
    pub fn next(&mut self) -> u32 {
        // xorshift128 algorithm
        let mut t = self.state[3];
        let s = self.state[0];
        self.state[3] = self.state[2];
        self.state[2] = self.state[1];
        self.state[1] = s;

        t ^= t << 11;
        t ^= t >> 8;
        self.state[0] = t ^ s ^ (s >> 19);
        self.state[0]
    }

    /// Generate random value in range [0, high]
    ///
    /// Defined as `next() % (high + 1)`. The slight modulo bias toward lower
    /// values when `high + 1` does not divide 2^32 is accepted, documented
    /// behavior; callers depending on exact sequences rely on it.
    ///
    /// # Example
    /// ```
    /// use solver_core_rs::RandomNumberGenerator;
    ///
    /// let mut rng = RandomNumberGenerator::new(42);
    /// assert_eq!(rng.randint(99), 76); // 2386648076 % 100
    /// ```
    pub fn randint(&mut self, high: u32) -> u32 {
        // 64-bit modulus keeps high == u32::MAX well-defined.
        (u64::from(self.next()) % (u64::from(high) + 1)) as u32
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Useful for sampling from probability distributions.
    ///
    /// # Example
    /// ```
    /// use solver_core_rs::RandomNumberGenerator;
    ///
    /// let mut rng = RandomNumberGenerator::new(12345);
    /// let probability = rng.rand();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn rand(&mut self) -> f64 {
        // Convert to [0.0, 1.0) by dividing by 2^32
        f64::from(self.next()) / (1u64 << 32) as f64
    }

    /// Get current RNG state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use solver_core_rs::RandomNumberGenerator;
    ///
    /// let rng = RandomNumberGenerator::new(12345);
    /// let state = rng.state();
    ///
    /// // Later, can recreate the RNG from this state
    /// let rng2 = RandomNumberGenerator::from_state(&state).unwrap();
    /// assert_eq!(rng2.state(), state);
    /// ```
    pub fn state(&self) -> [u32; 4] {
        self.state
    }
}
