//! Process-level setup shared by the demo binaries.

pub mod tracing;

pub use self::tracing::setup_tracing;
