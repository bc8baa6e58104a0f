//! Native storage engine interface
//!
//! The engine owns schema handling, record encoding, query execution and
//! CSV parsing. This crate only hands it resolved paths and payloads.
//!
//! [`BlockingEngine`] adapts the synchronous native bindings to the async
//! [`NativeEngine`] trait.

pub mod blocking;
pub mod types;

use async_trait::async_trait;

use crate::error::NativeEngineError;
use crate::path::ResolvedPath;

pub use blocking::{BlockingEngine, NativeBindings};
pub use types::{Document, RecordSet, Schema};

/// Asynchronous view of the native engine, one call per operation
#[async_trait]
pub trait NativeEngine: Send + Sync {
    async fn create(&self, path: &ResolvedPath, schema: &Schema) -> Result<(), NativeEngineError>;

    async fn insert(
        &self,
        path: &ResolvedPath,
        document: &Document,
    ) -> Result<(), NativeEngineError>;

    async fn read(&self, path: &ResolvedPath) -> Result<RecordSet, NativeEngineError>;

    async fn delete(&self, path: &ResolvedPath) -> Result<(), NativeEngineError>;

    async fn update(
        &self,
        path: &ResolvedPath,
        document: &Document,
    ) -> Result<(), NativeEngineError>;

    async fn import_csv(
        &self,
        csv_path: &ResolvedPath,
        db_path: &ResolvedPath,
    ) -> Result<(), NativeEngineError>;
}
