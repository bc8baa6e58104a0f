//! Operation forwarding
//!
//! No operation holds state across calls, so a `FlexonDb` can be cloned
//! and used from any number of tasks at once. Concurrent operations on the
//! same database are not ordered here; serializing writes is left to the
//! engine or the caller.

use log::{debug, info};
use std::fmt;
use std::sync::Arc;

use crate::engine::{Document, NativeEngine, RecordSet, Schema};
use crate::error::{FlexonError, InvalidPathError};
use crate::path::{ResolvedPath, resolve};
use crate::platform::{DocumentDirectory, StorageRoot};

/// Database client bound to a storage root and a native engine
pub struct FlexonDb<E> {
    root: StorageRoot,
    engine: Arc<E>,
}

impl<E> Clone for FlexonDb<E> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<E> fmt::Debug for FlexonDb<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlexonDb").field("root", &self.root).finish()
    }
}

impl<E: NativeEngine> FlexonDb<E> {
    pub fn new(root: StorageRoot, engine: E) -> Self {
        Self::with_arc(root, Arc::new(engine))
    }

    /// Share an engine that is already reference counted
    pub fn with_arc(root: StorageRoot, engine: Arc<E>) -> Self {
        info!("FlexonDB client rooted at {}", root.as_str());
        Self { root, engine }
    }

    /// Bind to the document directory reported by the platform
    pub fn from_platform<P: DocumentDirectory + ?Sized>(
        platform: &P,
        engine: E,
    ) -> Result<Self, InvalidPathError> {
        Ok(Self::new(StorageRoot::from_platform(platform)?, engine))
    }

    pub fn root(&self) -> &StorageRoot {
        &self.root
    }

    pub fn engine(&self) -> &Arc<E> {
        &self.engine
    }

    /// Resolve a logical path without calling the engine
    pub fn resolve(&self, logical_path: &str) -> Result<ResolvedPath, InvalidPathError> {
        resolve(&self.root, logical_path)
    }

    pub async fn create_database(&self, path: &str, schema: &Schema) -> Result<(), FlexonError> {
        let resolved = self.resolve(path)?;
        debug!("createDatabase {} -> {}", path, resolved);
        Ok(self.engine.create(&resolved, schema).await?)
    }

    pub async fn insert_data(&self, path: &str, json: &Document) -> Result<(), FlexonError> {
        let resolved = self.resolve(path)?;
        debug!("insertData {} -> {}", path, resolved);
        Ok(self.engine.insert(&resolved, json).await?)
    }

    pub async fn read_data(&self, path: &str) -> Result<RecordSet, FlexonError> {
        let resolved = self.resolve(path)?;
        debug!("readData {} -> {}", path, resolved);
        Ok(self.engine.read(&resolved).await?)
    }

    pub async fn delete_database(&self, path: &str) -> Result<(), FlexonError> {
        let resolved = self.resolve(path)?;
        debug!("deleteDatabase {} -> {}", path, resolved);
        Ok(self.engine.delete(&resolved).await?)
    }

    pub async fn update_database(&self, path: &str, json: &Document) -> Result<(), FlexonError> {
        let resolved = self.resolve(path)?;
        debug!("updateDatabase {} -> {}", path, resolved);
        Ok(self.engine.update(&resolved, json).await?)
    }

    /// Import a CSV file into a database.
    ///
    /// Both paths are resolved before the engine is called; if either is
    /// invalid nothing is forwarded.
    pub async fn csv_to_flexondb(&self, csv_path: &str, db_path: &str) -> Result<(), FlexonError> {
        let resolved_csv = self.resolve(csv_path)?;
        let resolved_db = self.resolve(db_path)?;
        debug!(
            "csvToFlexonDB {} -> {}, {} -> {}",
            csv_path, resolved_csv, db_path, resolved_db
        );
        Ok(self.engine.import_csv(&resolved_csv, &resolved_db).await?)
    }
}
