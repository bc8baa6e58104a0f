//! Path resolution
//!
//! Turns caller-supplied logical paths into canonical absolute paths
//! inside the application's private document directory.

pub mod resolver;
pub mod validation;

// Re-export commonly used resolution items
pub use resolver::{ResolvedPath, resolve};
pub use validation::{is_separator, validate_segments};
