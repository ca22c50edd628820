//! Signature Service
//!
//! RSA with PSS padding (MGF1-SHA-256) over the SHA-256 digest of the
//! payload. Signing is randomized, so two signatures over the same payload
//! differ byte-for-byte and both verify.

use std::time::Instant;

use rand::rngs::OsRng;
use rsa::{BigUint, Pss, RsaPrivateKey};
use sha2::Sha256;

use crate::application::config::SignatureConfig;
use crate::domain::keys::{KeyPair, PrivateKey, PublicKey};
use crate::domain::signature::{Signature, Verification, message_digest};
use crate::error::{SigningError, SigningResult};

/// Signature Service
#[derive(Debug, Clone, Default)]
pub struct SignatureService {
    config: SignatureConfig,
}

impl SignatureService {
    pub fn new(config: SignatureConfig) -> SigningResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SignatureConfig {
        &self.config
    }

    /// Generate a fresh key pair (public exponent 65537)
    pub fn generate_keys(&self) -> SigningResult<KeyPair> {
        let start = Instant::now();
        let private = RsaPrivateKey::new(&mut OsRng, self.config.key_bits)
            .map_err(SigningError::KeyGeneration)?;
        let pair = KeyPair::new(PrivateKey::new(private));

        tracing::info!(
            key_bits = self.config.key_bits,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Generated RSA key pair"
        );
        Ok(pair)
    }

    /// Sign `payload` with PSS
    pub fn sign(&self, key: &PrivateKey, payload: &[u8]) -> SigningResult<Signature> {
        let salt_len = self.config.salt_length.resolve(key.modulus_bits());
        let digest = message_digest(payload);

        let bytes = key
            .inner()
            .sign_with_rng(
                &mut OsRng,
                Pss::new_blinded_with_salt::<Sha256>(salt_len),
                &digest,
            )
            .map_err(SigningError::Signing)?;

        tracing::debug!(
            payload_len = payload.len(),
            salt_len,
            signature_len = bytes.len(),
            "Signed payload"
        );
        Ok(Signature::from_bytes(bytes))
    }

    /// Check `signature` against `payload` under `key`
    ///
    /// A mismatch is `Ok(Verification::Invalid)`. A signature whose length
    /// cannot belong to this key is an error.
    pub fn verify(
        &self,
        key: &PublicKey,
        payload: &[u8],
        signature: &Signature,
    ) -> SigningResult<Verification> {
        if signature.len() != key.size() {
            return Err(SigningError::MalformedSignature {
                expected: key.size(),
                actual: signature.len(),
            });
        }

        // A value at or above the modulus can't come from this key
        if BigUint::from_bytes_be(signature.as_bytes()) >= *key.modulus() {
            tracing::debug!("Signature representative out of range for key");
            return Ok(Verification::Invalid);
        }

        let salt_len = self.config.salt_length.resolve(key.modulus_bits());
        let digest = message_digest(payload);

        let outcome = match key.inner().verify(
            Pss::new_with_salt::<Sha256>(salt_len),
            &digest,
            signature.as_bytes(),
        ) {
            Ok(()) => Verification::Valid,
            Err(rsa::Error::Verification) => Verification::Invalid,
            Err(e) => return Err(SigningError::Verification(e)),
        };

        tracing::debug!(
            payload_len = payload.len(),
            outcome = %outcome,
            "Verified signature"
        );
        Ok(outcome)
    }
}
