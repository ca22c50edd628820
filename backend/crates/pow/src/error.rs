//! PoW Error Types
//!
//! This module provides PoW-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// PoW-specific result type alias
pub type PowResult<T> = Result<T, PowError>;

/// PoW-specific error variants
///
/// The plain blocking search has no error paths. These cover
/// construction of inputs and the cancellable/task-based variants.
#[derive(Debug, Error)]
pub enum PowError {
    /// Difficulty longer than the digest itself (can never be met)
    #[error("Invalid difficulty: {requested} leading zeros exceeds the {max}-character digest")]
    InvalidDifficulty { requested: usize, max: usize },

    /// Nonce text is not a canonical UUID
    #[error("Malformed nonce: {0}")]
    MalformedNonce(#[from] uuid::Error),

    /// Caller cancelled the search
    #[error("Search cancelled after {attempts} attempts")]
    Cancelled { attempts: u64 },

    /// Blocking search task panicked or was aborted
    #[error("Search task failed: {0}")]
    TaskFailed(String),
}

impl PowError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PowError::InvalidDifficulty { .. } => ErrorKind::InvalidInput,
            PowError::MalformedNonce(_) => ErrorKind::MalformedInput,
            PowError::Cancelled { .. } => ErrorKind::Cancelled,
            PowError::TaskFailed(_) => ErrorKind::Internal,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            PowError::TaskFailed(msg) => {
                tracing::error!(message = %msg, "PoW search task failed");
            }
            PowError::InvalidDifficulty { requested, max } => {
                tracing::warn!(requested, max, "PoW difficulty rejected");
            }
            PowError::MalformedNonce(e) => {
                tracing::warn!(error = %e, "PoW malformed nonce");
            }
            PowError::Cancelled { attempts } => {
                tracing::debug!(attempts, "PoW search cancelled");
            }
        }
    }
}

impl From<PowError> for AppError {
    fn from(err: PowError) -> Self {
        err.log();
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message).with_source(err)
    }
}
