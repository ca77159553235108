//! # Pattern Recipes
//!
//! Small, runnable renditions of classic design patterns.
//!
//! - **[factory]**: [`WorkerFactory`](factory::WorkerFactory) picks a concrete
//!   [`Worker`](worker::Worker) from a type string.
//! - **[abstract_factory]**: [`TeamFactory`](abstract_factory::TeamFactory) builds a family of
//!   named workers, one per [`Role`](worker::Role).
//! - **[adapter]**: [`TeloletAdapter`](adapter::TeloletAdapter) adds a capability to a
//!   [`Vehicle`](adapter::Vehicle) that lacks it.
//!
//! The facade pattern lives in the `checkout` workspace member, on top of the
//! `record-store` crate.
//!
//! Each pattern has a demo under `src/bin/`:
//!
//! ```bash
//! cargo run --bin factory
//! cargo run --bin abstract_factory
//! cargo run --bin adapter
//! ```

pub mod abstract_factory;
pub mod adapter;
pub mod factory;
pub mod runtime;
pub mod worker;
