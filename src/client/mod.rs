//! Client module
//!
//! Application-facing database operations. Every logical path is resolved
//! under the storage root before exactly one call is forwarded to the
//! native engine.

mod operations;

// Re-export public types
pub use operations::FlexonDb;
