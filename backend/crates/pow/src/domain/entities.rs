//! Domain Entities
//!
//! Core business entities for the PoW domain.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::domain::value_objects::{CandidatePayload, Difficulty, HexDigest, Label, Nonce};

/// Solution entity - the first candidate that met the difficulty target
#[derive(Debug, Clone)]
pub struct Solution {
    pub nonce: Nonce,
    pub digest: HexDigest,
    pub difficulty: Difficulty,
    /// Attempts made, including the winning one
    pub attempts: u64,
    /// Wall-clock time since the loop started
    pub elapsed: Duration,
    pub found_at: DateTime<Utc>,
}

impl Solution {
    pub fn new(
        nonce: Nonce,
        digest: HexDigest,
        difficulty: Difficulty,
        attempts: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            nonce,
            digest,
            difficulty,
            attempts,
            elapsed,
            found_at: Utc::now(),
        }
    }

    /// Rebuild the exact bytes that were hashed, for signing
    pub fn payload(&self, label: &Label) -> CandidatePayload {
        CandidatePayload::new(label, &self.nonce)
    }

    /// `(nonce, digest, elapsed)` triple
    pub fn into_parts(self) -> (Nonce, HexDigest, Duration) {
        (self.nonce, self.digest, self.elapsed)
    }
}
