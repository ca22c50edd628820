//! Application Layer - Use Cases
//!
//! Key generation, signing and verification, plus the per-use session flow.

pub mod config;
pub mod service;
pub mod session;
