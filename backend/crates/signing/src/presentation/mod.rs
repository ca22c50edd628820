//! Presentation Layer - Report DTOs

pub mod dto;
