//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic into runnable searches.

pub mod config;
pub mod search;
pub mod search_task;
