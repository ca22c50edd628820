//! Domain Layer - Keys, signatures and the verification outcome

pub mod keys;
pub mod signature;
