//! # Storage Backends
//!
//! A backend is the flat file (or stand-in) behind a store. The contract is
//! coarse: [`Backend::load`] reads the entire collection and [`Backend::save`] overwrites the
//! entire collection. There are no partial updates and no locking; the owning
//! [`RecordStore`](crate::RecordStore) is the only thing that ever touches a backend.
//!
//! - [`JsonFileBackend`] - a JSON array in a file on disk, pretty-printed with four spaces.
//! - [`InMemoryBackend`] - a shared vector, handy in tests because the test keeps a clone
//!   and can inspect what the store persisted.

use crate::error::StoreError;
use crate::record::StoreRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Whole-collection persistence for one record type.
pub trait Backend<R>: Send + 'static {
    /// Read every record.
    fn load(&self) -> Result<Vec<R>, StoreError>;

    /// Overwrite every record.
    fn save(&self, records: &[R]) -> Result<(), StoreError>;

    /// Human-readable location used in logs.
    fn location(&self) -> String;
}

/// A JSON array of flat records stored in a single file.
///
/// A missing file is an error on [`load`](Backend::load); call
/// [`ensure_exists`](JsonFileBackend::ensure_exists) first when the file may not have been
/// seeded yet.
#[derive(Debug, Clone)]
pub struct JsonFileBackend<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: StoreRecord> JsonFileBackend<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `seed` if the file does not exist yet.
    ///
    /// Returns `true` when the file was created.
    pub fn ensure_exists(&self, seed: &[R]) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
            }
        }
        self.save(seed)?;
        Ok(true)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn serialization_error(&self, source: serde_json::Error) -> StoreError {
        StoreError::Serialization {
            path: self.path.clone(),
            source,
        }
    }
}

impl<R: StoreRecord> Backend<R> for JsonFileBackend<R> {
    fn load(&self) -> Result<Vec<R>, StoreError> {
        let contents = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&contents).map_err(|e| self.serialization_error(e))
    }

    fn save(&self, records: &[R]) -> Result<(), StoreError> {
        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        records
            .serialize(&mut serializer)
            .map_err(|e| self.serialization_error(e))?;
        fs::write(&self.path, buffer).map_err(|e| self.io_error(e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// A vector shared between the store and whoever cloned the backend.
#[derive(Debug)]
pub struct InMemoryBackend<R> {
    records: Arc<Mutex<Vec<R>>>,
}

impl<R> Clone for InMemoryBackend<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R: StoreRecord> Default for InMemoryBackend<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StoreRecord> InMemoryBackend<R> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    /// A copy of whatever was saved last.
    pub fn snapshot(&self) -> Result<Vec<R>, StoreError> {
        self.load()
    }
}

impl<R: StoreRecord> Backend<R> for InMemoryBackend<R> {
    fn load(&self) -> Result<Vec<R>, StoreError> {
        let records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }

    fn save(&self, records: &[R]) -> Result<(), StoreError> {
        let mut stored = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        *stored = records.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
