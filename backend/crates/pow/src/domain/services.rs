//! Domain Services
//!
//! Pure domain logic for the difficulty search.

use sha2::{Digest, Sha256};

use crate::domain::value_objects::{
    CandidatePayload, Difficulty, HexDigest, Label, NONCE_TEXT_LEN, Nonce,
};

/// Compute the SHA-256 hex digest of an arbitrary payload
pub fn compute_digest(payload: &[u8]) -> HexDigest {
    HexDigest::from_hash(Sha256::digest(payload).into())
}

/// Compute SHA-256 of `label ∥ nonce-text` without building the payload
///
/// Byte-identical to `compute_digest(CandidatePayload::new(label, nonce))`.
pub fn compute_candidate_digest(label: &Label, nonce: &Nonce) -> HexDigest {
    let mut buf = [0u8; NONCE_TEXT_LEN];
    let mut hasher = Sha256::new();
    hasher.update(label.as_bytes());
    hasher.update(nonce.encode(&mut buf).as_bytes());
    HexDigest::from_hash(hasher.finalize().into())
}

/// Count leading `'0'` characters of a hex digest
pub fn count_leading_zero_nibbles(digest: &HexDigest) -> usize {
    digest.leading_zeros()
}

/// Verify that a digest meets the difficulty requirement
pub fn meets_difficulty(digest: &HexDigest, difficulty: Difficulty) -> bool {
    let k = difficulty.leading_zeros();
    digest.as_str().as_bytes()[..k].iter().all(|&b| b == b'0')
}

/// Verify a claimed solution by recomputing its digest
pub fn verify_solution(label: &Label, nonce: &Nonce, difficulty: Difficulty) -> bool {
    meets_difficulty(&compute_candidate_digest(label, nonce), difficulty)
}

/// Digest of a payload that has already been assembled
pub fn digest_payload(payload: &CandidatePayload) -> HexDigest {
    compute_digest(payload.as_bytes())
}
