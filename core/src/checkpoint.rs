//! Checkpoint - Save/Restore Generator State
//!
//! Enables serialization and deserialization of the generator state so a
//! long-running search can be paused and resumed from an arbitrary point.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored generator resumes the identical sequence
//! - **Eager validation**: Malformed state is rejected at restore time,
//!   never surfaced later as corrupted output

use crate::rng::{RandomNumberGenerator, RngError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when saving or restoring a checkpoint
#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    /// Snapshot state failed validation
    #[error(transparent)]
    InvalidState(#[from] RngError),

    /// JSON (de)serialization failed
    #[error("checkpoint serialization failed: {0}")]
    Serialization(String),
}

/// Generator state snapshot
///
/// Captures the four state words in caller-serializable form. The contract
/// with external formats is "4 integers in [0, 2^32 - 1], order-preserving";
/// the words are held as a `Vec` because a deserialized payload may carry
/// any length, and `restore()` validates eagerly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngSnapshot {
    /// State words, order-preserving
    pub words: Vec<u32>,
}

impl From<&RandomNumberGenerator> for RngSnapshot {
    fn from(rng: &RandomNumberGenerator) -> Self {
        RngSnapshot {
            words: rng.state().to_vec(),
        }
    }
}

impl RngSnapshot {
    /// Rebuild a generator from this snapshot
    ///
    /// # Errors
    /// Returns `RngError::InvalidStateLength` if the snapshot does not
    /// contain exactly 4 words.
    ///
    /// # Example
    /// ```
    /// use solver_core_rs::{RandomNumberGenerator, RngSnapshot};
    ///
    /// let mut rng = RandomNumberGenerator::new(42);
    /// rng.next();
    ///
    /// let snapshot = RngSnapshot::from(&rng);
    /// let mut resumed = snapshot.restore().unwrap();
    /// assert_eq!(resumed.next(), rng.next());
    /// ```
    pub fn restore(&self) -> Result<RandomNumberGenerator, RngError> {
        RandomNumberGenerator::from_state(&self.words)
    }

    /// Serialize this snapshot to a JSON payload
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    /// Deserialize and validate a snapshot from a JSON payload
    ///
    /// # Errors
    /// Returns `CheckpointError::Serialization` for malformed JSON and
    /// `CheckpointError::InvalidState` for a payload whose word count is
    /// not exactly 4.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let snapshot: RngSnapshot =
            serde_json::from_str(json).map_err(|e| CheckpointError::Serialization(e.to_string()))?;
        validate_snapshot(&snapshot)?;
        Ok(snapshot)
    }
}

/// Validate snapshot integrity
///
/// For callers that stage snapshots before restoring them.
pub fn validate_snapshot(snapshot: &RngSnapshot) -> Result<(), RngError> {
    if snapshot.words.len() != 4 {
        return Err(RngError::InvalidStateLength {
            got: snapshot.words.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_captures_current_state() {
        let mut rng = RandomNumberGenerator::new(12345);
        rng.next();
        rng.next();

        let snapshot = RngSnapshot::from(&rng);
        assert_eq!(snapshot.words, rng.state().to_vec());
    }

    #[test]
    fn test_validate_snapshot_accepts_four_words() {
        let snapshot = RngSnapshot {
            words: vec![1, 2, 3, 4],
        };
        assert!(validate_snapshot(&snapshot).is_ok());
    }

    #[test]
    fn test_validate_snapshot_rejects_wrong_length() {
        let snapshot = RngSnapshot {
            words: vec![1, 2, 3],
        };
        assert_eq!(
            validate_snapshot(&snapshot).unwrap_err(),
            RngError::InvalidStateLength { got: 3 }
        );
    }

    #[test]
    fn test_json_payload_shape() {
        let snapshot = RngSnapshot {
            words: vec![1, 2, 3, 4],
        };
        assert_eq!(snapshot.to_json().unwrap(), r#"{"words":[1,2,3,4]}"#);
    }
}
