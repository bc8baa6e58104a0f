//! FlexonDB mobile client
//!
//! Resolves logical database paths inside the application's private
//! document directory and forwards each operation to the native engine.

pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod path;
pub mod platform;

pub use client::FlexonDb;
pub use crate::config::ClientConfig;
pub use engine::{BlockingEngine, Document, NativeBindings, NativeEngine, RecordSet, Schema};
pub use error::{FlexonError, InvalidPathError, NativeEngineError};
pub use path::ResolvedPath;
pub use platform::{DocumentDirectory, StorageRoot};
