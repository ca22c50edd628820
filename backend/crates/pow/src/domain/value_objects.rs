//! Domain Value Objects
//!
//! Immutable value types for the PoW domain.

use std::fmt;
use std::str::FromStr;

use platform::crypto::{SHA256_HEX_LEN, is_sha256_hex};
use uuid::Uuid;

use crate::error::{PowError, PowResult};

/// Length of a nonce in its canonical hyphenated form
pub const NONCE_TEXT_LEN: usize = uuid::fmt::Hyphenated::LENGTH;

/// Caller-chosen label prefixed to every candidate (e.g. a nickname)
///
/// Opaque bytes once constructed. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Label(Vec<u8>);

impl Label {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
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
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&[u8]> for Label {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Label {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Single-use random token (128 bits, UUID v4 layout)
///
/// Rendered as the canonical lowercase hyphenated UUID. That text, not the
/// raw bytes, is what goes into the candidate payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce(Uuid);

impl Nonce {
    /// Build a v4 nonce from 16 random bytes (version/variant bits are overwritten)
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Encode into a caller buffer without allocating
    pub fn encode<'a>(&self, buf: &'a mut [u8; NONCE_TEXT_LEN]) -> &'a str {
        self.0.hyphenated().encode_lower(buf)
    }

    pub fn to_text(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for Nonce {
    type Err = PowError;

    fn from_str(s: &str) -> PowResult<Self> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Difficulty target: required count of leading `'0'` hex characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Every hex character of the digest is a zero
    pub const MAX: usize = SHA256_HEX_LEN;
    /// Beyond this a single machine will not finish in practical time
    pub const PRACTICAL_MAX: usize = 8;

    pub const ZERO: Difficulty = Difficulty(0);

    pub fn new(leading_zeros: usize) -> PowResult<Self> {
        if leading_zeros > Self::MAX {
            return Err(PowError::InvalidDifficulty {
                requested: leading_zeros,
                max: Self::MAX,
            });
        }
        Ok(Self(leading_zeros as u8))
    }

    pub fn leading_zeros(&self) -> usize {
        self.0 as usize
    }

    pub fn is_practical(&self) -> bool {
        self.leading_zeros() <= Self::PRACTICAL_MAX
    }

    /// Mean number of attempts (16^k)
    pub fn expected_attempts(&self) -> f64 {
        16f64.powi(self.0 as i32)
    }
}

impl TryFrom<usize> for Difficulty {
    type Error = PowError;

    fn try_from(value: usize) -> PowResult<Self> {
        Self::new(value)
    }
}

impl From<Difficulty> for usize {
    fn from(d: Difficulty) -> Self {
        d.leading_zeros()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// SHA-256 digest as 64 lowercase hex characters
///
/// Only constructed from a raw hash or from text that already has that shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexDigest(String);

impl HexDigest {
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hex::encode(hash))
    }

    /// Accept text only if it is exactly `[0-9a-f]{64}`
    pub fn parse(s: &str) -> Option<Self> {
        is_sha256_hex(s).then(|| Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Count of leading `'0'` characters
    pub fn leading_zeros(&self) -> usize {
        self.0.bytes().take_while(|&b| b == b'0').count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// `label ∥ nonce-text`, UTF-8 encoded
///
/// The exact bytes that are hashed during the search and signed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePayload(Vec<u8>);

impl CandidatePayload {
    pub fn new(label: &Label, nonce: &Nonce) -> Self {
        let mut buf = [0u8; NONCE_TEXT_LEN];
        let nonce_text = nonce.encode(&mut buf);
        let mut bytes = Vec::with_capacity(label.len() + NONCE_TEXT_LEN);
        bytes.extend_from_slice(label.as_bytes());
        bytes.extend_from_slice(nonce_text.as_bytes());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for CandidatePayload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
