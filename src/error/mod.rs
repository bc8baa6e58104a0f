//! Error handling
//!
//! Defines the error taxonomy surfaced to application code.

pub mod types;

pub use types::*;
