//! PoW (Proof of Work) Difficulty Search
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects, the hash/difficulty rules, the nonce source seam
//! - `application/` - The search use case (blocking and task-based)
//! - `presentation/` - Report DTOs for the driver
//!
//! ## Search Model
//! - Each attempt draws a fresh random nonce and hashes `label ∥ nonce`
//! - A digest meets difficulty `k` when its hex form starts with `k` `'0'` characters
//! - The loop has no attempt cap; success (or an explicit cancel) is the only exit
//! - The payload that was hashed is the payload that gets signed downstream

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::PowConfig;
pub use application::search::{CancelFlag, DifficultySearch};
pub use application::search_task::{SearchHandle, spawn_search, spawn_search_with};
pub use domain::entities::Solution;
pub use domain::nonce_source::{NonceSource, RngNonceSource};
pub use domain::value_objects::{CandidatePayload, Difficulty, HexDigest, Label, Nonce};
pub use error::{PowError, PowResult};
pub use presentation::dto::SolutionReport;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// One-shot search with the OS-seeded nonce source and default config
pub fn search(label: &Label, difficulty: Difficulty) -> Solution {
    DifficultySearch::new(PowConfig::default()).search(label, difficulty)
}

#[cfg(test)]
mod tests;
