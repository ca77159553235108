//! # Worker Factory
//!
//! Turns a worker-type string into a ready worker. Callers only ever see `Box<dyn Worker>`.

use crate::worker::{Role, Worker};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum WorkerError {
    #[error("Invalid Worker Type: {0}")]
    InvalidWorkerType(String),
}

/// A worker known only by its role; its name is the role title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Developer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tester;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analyst;

macro_rules! role_worker {
    ($ty:ident) => {
        impl Worker for $ty {
            fn name(&self) -> &str {
                Role::$ty.title()
            }

            fn work(&self) -> &'static str {
                Role::$ty.work()
            }

            fn skills(&self) -> &'static [&'static str] {
                Role::$ty.skills()
            }
        }
    };
}

role_worker!(Developer);
role_worker!(Tester);
role_worker!(Analyst);

#[derive(Debug, Default, Clone, Copy)]
pub struct WorkerFactory;

impl WorkerFactory {
    pub fn new() -> Self {
        Self
    }

    /// Accepts exactly `developer`, `tester` or `analyst` (lowercase).
    pub fn create_worker(&self, worker_type: &str) -> Result<Box<dyn Worker>, WorkerError> {
        let worker: Box<dyn Worker> = match worker_type {
            "developer" => Box::new(Developer),
            "tester" => Box::new(Tester),
            "analyst" => Box::new(Analyst),
            other => return Err(WorkerError::InvalidWorkerType(other.to_string())),
        };
        debug!(worker_type, name = worker.name(), "Worker created");
        Ok(worker)
    }
}
