//! Application Configuration
//!
//! Configuration for the signing application layer.

use crate::domain::signature::SaltLength;
use crate::error::{SigningError, SigningResult};

/// Smallest modulus accepted for new keys
pub const MIN_KEY_BITS: usize = 2048;

/// Largest modulus accepted for new keys
///
/// SPKI import in `rsa` refuses anything above 4096 bits, so a larger key
/// could sign but never be re-imported from its own PEM/DER export.
pub const MAX_KEY_BITS: usize = 4096;

/// Signing configuration
#[derive(Debug, Clone)]
pub struct SignatureConfig {
    /// RSA modulus size in bits
    pub key_bits: usize,
    /// PSS salt length policy
    pub salt_length: SaltLength,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            key_bits: MIN_KEY_BITS,
            salt_length: SaltLength::Max,
        }
    }
}

impl SignatureConfig {
    pub fn with_key_bits(mut self, key_bits: usize) -> Self {
        self.key_bits = key_bits;
        self
    }

    pub fn with_salt_length(mut self, salt_length: SaltLength) -> Self {
        self.salt_length = salt_length;
        self
    }

    pub fn validate(&self) -> SigningResult<()> {
        if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&self.key_bits) {
            return Err(SigningError::InvalidConfig(format!(
                "key_bits must be between {MIN_KEY_BITS} and {MAX_KEY_BITS}, got {}",
                self.key_bits
            )));
        }
        if self.key_bits % 8 != 0 {
            return Err(SigningError::InvalidConfig(format!(
                "key_bits must be a multiple of 8, got {}",
                self.key_bits
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SignatureConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_small_and_odd_keys() {
        let small = SignatureConfig::default().with_key_bits(1024);
        assert!(matches!(small.validate(), Err(SigningError::InvalidConfig(_))));

        let odd = SignatureConfig::default().with_key_bits(2049);
        assert!(matches!(odd.validate(), Err(SigningError::InvalidConfig(_))));
    }

    #[test]
    fn test_key_bits_capped_at_importable_size() {
        let largest = SignatureConfig::default().with_key_bits(MAX_KEY_BITS);
        assert!(largest.validate().is_ok());

        let too_large = SignatureConfig::default().with_key_bits(4104);
        assert!(matches!(
            too_large.validate(),
            Err(SigningError::InvalidConfig(_))
        ));
    }
}
