//! Adapter over the synchronous native bindings
//!
//! The native library exposes blocking calls returning integer status codes
//! (`0` on success). Each call runs on tokio's blocking pool so no async
//! worker is held while the engine works. Dropping the returned future does
//! not stop a call that has already started.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::engine::{Document, NativeEngine, RecordSet, Schema};
use crate::error::NativeEngineError;
use crate::path::ResolvedPath;

/// Status code reported by the native library on success
pub const STATUS_OK: i32 = 0;

/// Synchronous native library calls
pub trait NativeBindings: Send + Sync + 'static {
    fn create_database(&self, path: &str, schema: &str) -> i32;
    fn insert_data(&self, path: &str, json: &str) -> i32;
    /// `None` when the library returns no data
    fn read_data(&self, path: &str) -> Option<String>;
    fn delete_database(&self, path: &str) -> i32;
    fn update_database(&self, path: &str, json: &str) -> i32;
    fn csv_to_flexondb(&self, csv_path: &str, db_path: &str) -> i32;
}

/// [`NativeEngine`] backed by blocking [`NativeBindings`]
#[derive(Debug)]
pub struct BlockingEngine<B> {
    bindings: Arc<B>,
}

impl<B> Clone for BlockingEngine<B> {
    fn clone(&self) -> Self {
        Self {
            bindings: Arc::clone(&self.bindings),
        }
    }
}

impl<B: NativeBindings> BlockingEngine<B> {
    pub fn new(bindings: B) -> Self {
        Self {
            bindings: Arc::new(bindings),
        }
    }

    pub fn bindings(&self) -> &B {
        &self.bindings
    }

    async fn run<T, F>(&self, operation: &'static str, call: F) -> Result<T, NativeEngineError>
    where
        T: Send + 'static,
        F: FnOnce(&B) -> Result<T, NativeEngineError> + Send + 'static,
    {
        let bindings = Arc::clone(&self.bindings);
        debug!("Dispatching {} to blocking pool", operation);
        tokio::task::spawn_blocking(move || call(&*bindings))
            .await
            .map_err(|_| NativeEngineError::Aborted(operation))?
    }
}

fn check_status(operation: &'static str, code: i32) -> Result<(), NativeEngineError> {
    if code == STATUS_OK {
        Ok(())
    } else {
        Err(NativeEngineError::Status { operation, code })
    }
}

#[async_trait]
impl<B: NativeBindings> NativeEngine for BlockingEngine<B> {
    async fn create(&self, path: &ResolvedPath, schema: &Schema) -> Result<(), NativeEngineError> {
        let path = path.as_str().to_owned();
        let schema = schema.as_str().to_owned();
        self.run("createDatabase", move |b| {
            check_status("createDatabase", b.create_database(&path, &schema))
        })
        .await
    }

    async fn insert(
        &self,
        path: &ResolvedPath,
        document: &Document,
    ) -> Result<(), NativeEngineError> {
        let path = path.as_str().to_owned();
        let json = document.as_str().to_owned();
        self.run("insertData", move |b| {
            check_status("insertData", b.insert_data(&path, &json))
        })
        .await
    }

    async fn read(&self, path: &ResolvedPath) -> Result<RecordSet, NativeEngineError> {
        let path = path.as_str().to_owned();
        self.run("readData", move |b| {
            b.read_data(&path)
                .map(RecordSet::from)
                .ok_or(NativeEngineError::NoData("readData"))
        })
        .await
    }

    async fn delete(&self, path: &ResolvedPath) -> Result<(), NativeEngineError> {
        let path = path.as_str().to_owned();
        self.run("deleteDatabase", move |b| {
            check_status("deleteDatabase", b.delete_database(&path))
        })
        .await
    }

    async fn update(
        &self,
        path: &ResolvedPath,
        document: &Document,
    ) -> Result<(), NativeEngineError> {
        let path = path.as_str().to_owned();
        let json = document.as_str().to_owned();
        self.run("updateDatabase", move |b| {
            check_status("updateDatabase", b.update_database(&path, &json))
        })
        .await
    }

    async fn import_csv(
        &self,
        csv_path: &ResolvedPath,
        db_path: &ResolvedPath,
    ) -> Result<(), NativeEngineError> {
        let csv_path = csv_path.as_str().to_owned();
        let db_path = db_path.as_str().to_owned();
        self.run("csvToFlexonDB", move |b| {
            check_status("csvToFlexonDB", b.csv_to_flexondb(&csv_path, &db_path))
        })
        .await
    }
}
