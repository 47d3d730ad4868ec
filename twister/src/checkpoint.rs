//! Checkpoint - Save/Load Generator State
//!
//! Captures the full state vector and cursor so a sequence can be paused and
//! resumed exactly where it left off.
//!
//! # Critical Invariants
//!
//! - **Continuity**: A restored generator yields the same words the original
//!   would have yielded next
//! - **Shape**: The state vector holds exactly `N` words and the cursor is
//!   at most `N`
//! - **Integrity**: The stored SHA256 hash matches the state and cursor

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, warn};

use crate::rng::{MersenneTwister, N};

/// Errors raised while saving or restoring a snapshot
#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    #[error("Snapshot serialization failed: {0}")]
    SerializationError(String),

    #[error("State vector has {actual} words, expected {expected}")]
    InvalidStateLength { expected: usize, actual: usize },

    #[error("Cursor {index} out of range (max {max})")]
    CursorOutOfRange { index: usize, max: usize },

    #[error("State hash mismatch: stored {stored}, computed {computed}")]
    HashMismatch { stored: String, computed: String },

    #[error("State vector is all zeros")]
    ZeroState,
}

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Serializable generator state
///
/// # Example
/// ```
/// use twister_core::MersenneTwister;
///
/// let mut rng = MersenneTwister::new(12345);
/// rng.next_u32();
///
/// let snapshot = rng.snapshot();
/// let mut resumed = MersenneTwister::restore(&snapshot).unwrap();
/// assert_eq!(rng.next_u32(), resumed.next_u32());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Raw (untempered) state words
    pub state: Vec<u32>,

    /// Cursor at time of snapshot
    pub index: usize,

    /// SHA256 of state + cursor (for validation)
    pub state_hash: String,
}

impl GeneratorSnapshot {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationError(e.to_string()))
    }

    /// Deserialize from a JSON string
    ///
    /// Only parses; call [`validate_snapshot`] or [`MersenneTwister::restore`]
    /// to check integrity.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::SerializationError(e.to_string()))
    }
}

// ============================================================================
// State Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of a state vector and cursor
///
/// Hashes each word as little-endian bytes, then the cursor as a
/// little-endian u64. Returns lowercase hex.
pub fn compute_state_hash(state: &[u32], index: usize) -> String {
    let mut hasher = Sha256::new();
    for word in state {
        hasher.update(word.to_le_bytes());
    }
    hasher.update((index as u64).to_le_bytes());
    let result = hasher.finalize();

    format!("{:x}", result)
}

// ============================================================================
// Validation
// ============================================================================

/// Validate snapshot integrity
///
/// Checks, in order:
/// - State length is exactly `N`
/// - Cursor is at most `N`
/// - Stored hash matches
/// - State is not all zeros (the recurrence can never leave that state)
pub fn validate_snapshot(snapshot: &GeneratorSnapshot) -> Result<(), CheckpointError> {
    if snapshot.state.len() != N {
        return Err(CheckpointError::InvalidStateLength {
            expected: N,
            actual: snapshot.state.len(),
        });
    }

    if snapshot.index > N {
        return Err(CheckpointError::CursorOutOfRange {
            index: snapshot.index,
            max: N,
        });
    }

    let computed = compute_state_hash(&snapshot.state, snapshot.index);
    if computed != snapshot.state_hash {
        return Err(CheckpointError::HashMismatch {
            stored: snapshot.state_hash.clone(),
            computed,
        });
    }

    if snapshot.state.iter().all(|&word| word == 0) {
        return Err(CheckpointError::ZeroState);
    }

    Ok(())
}

impl MersenneTwister {
    /// Capture the current state for later [`restore`](Self::restore)
    pub fn snapshot(&self) -> GeneratorSnapshot {
        let state = self.state().to_vec();
        let index = self.cursor();
        let state_hash = compute_state_hash(&state, index);

        GeneratorSnapshot {
            state,
            index,
            state_hash,
        }
    }

    /// Rebuild a generator from a snapshot
    ///
    /// # Errors
    /// Returns [`CheckpointError`] if the snapshot fails validation.
    pub fn restore(snapshot: &GeneratorSnapshot) -> Result<Self, CheckpointError> {
        if let Err(e) = validate_snapshot(snapshot) {
            warn!(error = %e, "rejected generator snapshot");
            return Err(e);
        }

        let state: [u32; N] = snapshot.state.as_slice().try_into().map_err(|_| {
            CheckpointError::InvalidStateLength {
                expected: N,
                actual: snapshot.state.len(),
            }
        })?;

        debug!(index = snapshot.index, "restored generator from snapshot");
        Ok(Self::from_parts(state, snapshot.index))
    }
}
