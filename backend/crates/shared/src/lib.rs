//! Shared Kernel - Crate-crossing minimal core
//!
//! This crate contains the "smallest core" shared by the search and
//! signing crates:
//! - Common error type and result alias
//! - Error classification with process exit codes
//! - Conversions from common library errors
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
