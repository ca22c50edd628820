//! Report DTOs (Data Transfer Objects)

use std::fmt;

use serde::Serialize;

use crate::application::session::Verified;
use crate::error::SigningResult;

/// Sign/verify outcome, as printed or emitted as JSON
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureReport {
    pub key_bits: usize,
    pub public_key_fingerprint: String,
    pub signature_b64: String,
    pub verified: bool,
}

impl SignatureReport {
    pub fn from_verified(verified: &Verified) -> SigningResult<Self> {
        Ok(Self {
            key_bits: verified.public_key.modulus_bits(),
            public_key_fingerprint: verified.public_key.fingerprint()?,
            signature_b64: verified.signature.to_base64(),
            verified: verified.is_valid(),
        })
    }
}

impl fmt::Display for SignatureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RSA-{} PSS signature", self.key_bits)?;
        writeln!(f, "Public key SHA-256: {}", self.public_key_fingerprint)?;
        writeln!(f, "Signature: {}", self.signature_b64)?;
        write!(f, "Verified: {}", self.verified)
    }
}
