//! RSA Key Value Objects
//!
//! The private half never leaves the process: no serialization, no `Clone`,
//! redacted `Debug`. The public half can be exported as SPKI PEM/DER.

use std::fmt;

use platform::crypto::sha256_hex;
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};

use crate::error::{SigningError, SigningResult};

/// RSA private key
pub struct PrivateKey(RsaPrivateKey);

impl PrivateKey {
    pub(crate) fn new(inner: RsaPrivateKey) -> Self {
        Self(inner)
    }

    pub(crate) fn inner(&self) -> &RsaPrivateKey {
        &self.0
    }

    /// Derive the matching public key
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.to_public_key())
    }

    pub fn modulus_bits(&self) -> usize {
        self.0.n().bits()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"[REDACTED]").finish()
    }
}

/// RSA public key
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(RsaPublicKey);

impl PublicKey {
    pub(crate) fn inner(&self) -> &RsaPublicKey {
        &self.0
    }

    /// Modulus length in bytes; every valid signature has exactly this length
    pub fn size(&self) -> usize {
        self.0.size()
    }

    pub fn modulus_bits(&self) -> usize {
        self.0.n().bits()
    }

    pub(crate) fn modulus(&self) -> &BigUint {
        self.0.n()
    }

    /// SPKI DER bytes
    pub fn to_der(&self) -> SigningResult<Vec<u8>> {
        self.0
            .to_public_key_der()
            .map(|doc| doc.as_bytes().to_vec())
            .map_err(|e| SigningError::KeyEncoding(e.to_string()))
    }

    /// SPKI PEM (`-----BEGIN PUBLIC KEY-----`)
    pub fn to_pem(&self) -> SigningResult<String> {
        self.0
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| SigningError::KeyEncoding(e.to_string()))
    }

    pub fn from_der(der: &[u8]) -> SigningResult<Self> {
        RsaPublicKey::from_public_key_der(der)
            .map(Self)
            .map_err(|e| SigningError::MalformedKey(e.to_string()))
    }

    pub fn from_pem(pem: &str) -> SigningResult<Self> {
        RsaPublicKey::from_public_key_pem(pem)
            .map(Self)
            .map_err(|e| SigningError::MalformedKey(e.to_string()))
    }

    /// SHA-256 of the DER encoding, lowercase hex
    pub fn fingerprint(&self) -> SigningResult<String> {
        Ok(sha256_hex(&self.to_der()?))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("modulus_bits", &self.modulus_bits())
            .finish_non_exhaustive()
    }
}

/// Freshly generated private key plus its derived public key
#[derive(Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    pub fn new(private: PrivateKey) -> Self {
        let public = private.public_key();
        Self { private, public }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private, self.public)
    }
}
