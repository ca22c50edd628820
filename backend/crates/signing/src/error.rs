//! Signing Error Types
//!
//! This module provides signing-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! A signature that simply does not match is *not* an error; it comes back
//! as `Verification::Invalid`. Only inputs that cannot be checked at all
//! land here.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Signing-specific result type alias
pub type SigningResult<T> = Result<T, SigningError>;

/// Signing-specific error variants
#[derive(Debug, Error)]
pub enum SigningError {
    /// Rejected configuration (e.g. key too small)
    #[error("Invalid signing config: {0}")]
    InvalidConfig(String),

    /// RNG or prime search failure while generating a key
    #[error("Key generation failed: {0}")]
    KeyGeneration(#[source] rsa::Error),

    /// Padding/encoding failure while signing
    #[error("Signing failed: {0}")]
    Signing(#[source] rsa::Error),

    /// Public key bytes/PEM could not be decoded
    #[error("Malformed public key: {0}")]
    MalformedKey(String),

    /// Public key could not be encoded
    #[error("Public key encoding failed: {0}")]
    KeyEncoding(String),

    /// Signature length does not match the key's modulus
    #[error("Malformed signature: expected {expected} bytes, got {actual}")]
    MalformedSignature { expected: usize, actual: usize },

    /// Signature text is not valid base64
    #[error("Malformed signature encoding: {0}")]
    MalformedSignatureEncoding(String),

    /// Verification failed for a reason other than a mismatch
    #[error("Verification could not be performed: {0}")]
    Verification(#[source] rsa::Error),
}

impl SigningError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SigningError::InvalidConfig(_) => ErrorKind::Config,
            SigningError::MalformedKey(_)
            | SigningError::MalformedSignature { .. }
            | SigningError::MalformedSignatureEncoding(_) => ErrorKind::MalformedInput,
            SigningError::KeyGeneration(_)
            | SigningError::Signing(_)
            | SigningError::KeyEncoding(_)
            | SigningError::Verification(_) => ErrorKind::Internal,
        }
    }

    /// Whether the caller supplied bytes that could not be interpreted
    pub fn is_malformed_input(&self) -> bool {
        self.kind() == ErrorKind::MalformedInput
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self.kind() {
            ErrorKind::Internal => {
                tracing::error!(error = %self, "Signing internal error");
            }
            ErrorKind::MalformedInput => {
                tracing::warn!(error = %self, "Signing rejected malformed input");
            }
            _ => {
                tracing::debug!(error = %self, "Signing error");
            }
        }
    }
}

impl From<SigningError> for AppError {
    fn from(err: SigningError) -> Self {
        err.log();
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message).with_source(err)
    }
}
