//! Signature Value Objects

use std::fmt;

use platform::crypto::{from_base64, to_base64};
use sha2::{Digest, Sha256};

use crate::error::{SigningError, SigningResult};

/// Output length of the message digest (SHA-256)
pub const DIGEST_LEN: usize = 32;

/// PSS salt length policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaltLength {
    /// Largest salt the modulus allows: `em_len - DIGEST_LEN - 2`
    #[default]
    Max,
    /// Same length as the digest (32 bytes)
    Digest,
}

impl SaltLength {
    /// Resolve to a byte count for a key of `modulus_bits`
    pub fn resolve(&self, modulus_bits: usize) -> usize {
        match self {
            SaltLength::Max => {
                let em_len = (modulus_bits - 1).div_ceil(8);
                em_len.saturating_sub(DIGEST_LEN + 2)
            }
            SaltLength::Digest => DIGEST_LEN,
        }
    }
}

/// Raw signature bytes
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_base64(&self) -> String {
        to_base64(&self.0)
    }

    pub fn from_base64(s: &str) -> SigningResult<Self> {
        from_base64(s)
            .map(Self)
            .map_err(|e| SigningError::MalformedSignatureEncoding(e.to_string()))
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signature").field(&self.to_base64()).finish()
    }
}

/// Outcome of a verification that could be carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Valid,
    /// Wrong key, altered payload, altered signature or different scheme
    Invalid,
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid)
    }
}

impl From<Verification> for bool {
    fn from(v: Verification) -> Self {
        v.is_valid()
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verification::Valid => write!(f, "valid"),
            Verification::Invalid => write!(f, "invalid"),
        }
    }
}

/// SHA-256 of the payload; this is what PSS encodes
pub(crate) fn message_digest(payload: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::digest(payload).into()
}
