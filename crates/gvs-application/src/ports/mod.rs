//! Application Port Interfaces
//!
//! Contracts the outer layers (tool registration, transports) consume.

/// Service port interfaces
pub mod services;

pub use services::{SearchOptions, ValidatedSearchInterface};
