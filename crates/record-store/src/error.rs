//! # Store Errors
//!
//! This module defines the common error type used throughout the record store layer.
//! Domain clients map it into their own error enums.

use std::path::PathBuf;

/// Errors that can occur within the record store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed records in {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("In-memory backend lock poisoned")]
    Poisoned,
    #[error("Record error: {0}")]
    Record(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// True when the store task is gone, as opposed to the backing file failing.
    pub fn is_communication(&self) -> bool {
        matches!(self, StoreError::ActorClosed | StoreError::ActorDropped)
    }
}
