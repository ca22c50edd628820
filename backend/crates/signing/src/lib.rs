//! RSA-PSS Signature Service
//!
//! Clean Architecture structure:
//! - `domain/` - Key and signature value objects, the verification outcome
//! - `application/` - Key generation, sign, verify and the session typestate
//! - `presentation/` - Report DTOs for the driver
//!
//! ## Verification Model
//! - `Ok(Verification::Valid)` - signature matches payload and key
//! - `Ok(Verification::Invalid)` - legitimate mismatch (wrong key, altered bytes)
//! - `Err(SigningError)` - input could not be checked at all (malformed key or
//!   signature length) or the library failed internally

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SignatureConfig;
pub use application::service::SignatureService;
pub use application::session::{SigningSession, Verified};
pub use domain::keys::{KeyPair, PrivateKey, PublicKey};
pub use domain::signature::{SaltLength, Signature, Verification};
pub use error::{SigningError, SigningResult};
pub use presentation::dto::SignatureReport;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Generate an RSA-2048 key pair with the default config
pub fn generate_keys() -> SigningResult<KeyPair> {
    SignatureService::default().generate_keys()
}

/// Sign with the default config (max-length PSS salt)
pub fn sign(private_key: &PrivateKey, payload: &[u8]) -> SigningResult<Signature> {
    SignatureService::default().sign(private_key, payload)
}

/// Verify with the default config
pub fn verify(
    public_key: &PublicKey,
    payload: &[u8],
    signature: &Signature,
) -> SigningResult<Verification> {
    SignatureService::default().verify(public_key, payload, signature)
}
