//! Domain Layer - Search rules and value types
//!
//! This layer contains:
//! - Domain entities (Solution)
//! - Domain value objects (Label, Nonce, Difficulty, HexDigest, CandidatePayload)
//! - Domain services (digest computation, difficulty check)
//! - The nonce source trait (injectable randomness)

pub mod entities;
pub mod nonce_source;
pub mod services;
pub mod value_objects;
