//! Signing Session
//!
//! One use of the service as a typestate:
//! `Uninitialized → KeysGenerated → Signed → Verified`.
//! Each step consumes the previous state, so a session can't be pointed at a
//! second payload without generating new keys. The private key is dropped as
//! soon as the signature exists.

use crate::application::service::SignatureService;
use crate::domain::keys::{KeyPair, PublicKey};
use crate::domain::signature::{Signature, Verification};
use crate::error::SigningResult;

pub struct Uninitialized;

pub struct KeysGenerated {
    keys: KeyPair,
}

pub struct Signed {
    public_key: PublicKey,
    payload: Vec<u8>,
    signature: Signature,
}

/// Terminal state
#[derive(Debug)]
pub struct Verified {
    pub public_key: PublicKey,
    pub payload: Vec<u8>,
    pub signature: Signature,
    pub verification: Verification,
}

impl Verified {
    pub fn is_valid(&self) -> bool {
        self.verification.is_valid()
    }
}

/// Signing Session
pub struct SigningSession<S> {
    service: SignatureService,
    state: S,
}

impl SigningSession<Uninitialized> {
    pub fn new(service: SignatureService) -> Self {
        Self {
            service,
            state: Uninitialized,
        }
    }

    pub fn generate_keys(self) -> SigningResult<SigningSession<KeysGenerated>> {
        let keys = self.service.generate_keys()?;
        Ok(SigningSession {
            service: self.service,
            state: KeysGenerated { keys },
        })
    }
}

impl SigningSession<KeysGenerated> {
    pub fn public_key(&self) -> &PublicKey {
        self.state.keys.public_key()
    }

    pub fn sign(self, payload: impl Into<Vec<u8>>) -> SigningResult<SigningSession<Signed>> {
        let payload = payload.into();
        let (private_key, public_key) = self.state.keys.into_parts();
        let signature = self.service.sign(&private_key, &payload)?;
        Ok(SigningSession {
            service: self.service,
            state: Signed {
                public_key,
                payload,
                signature,
            },
        })
    }
}

impl SigningSession<Signed> {
    pub fn public_key(&self) -> &PublicKey {
        &self.state.public_key
    }

    pub fn signature(&self) -> &Signature {
        &self.state.signature
    }

    pub fn verify(self) -> SigningResult<Verified> {
        let Signed {
            public_key,
            payload,
            signature,
        } = self.state;
        let verification = self.service.verify(&public_key, &payload, &signature)?;
        Ok(Verified {
            public_key,
            payload,
            signature,
            verification,
        })
    }
}
