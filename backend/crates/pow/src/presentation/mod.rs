//! Presentation Layer - Report DTOs
//!
//! Serializable views of search results for the driver.

pub mod dto;
