//! # Checkout Lifecycle & Orchestration
//!
//! Starts the three record stores, wires their clients into the [`CheckoutFacade`] and
//! shuts them down again.
//!
//! Shutdown follows the usual channel-closure sequence: dropping every client closes each
//! store's queue, the store loop sees `None` from `recv()` and returns, and the facade awaits
//! the finished tasks. Requests already queued are handled first.
//!
//! Logging is set up by the binary through
//! [`record_store::tracing::setup_tracing`]; use `RUST_LOG=debug` to see every store request.

pub mod checkout_facade;
pub mod config;
pub mod error;

pub use checkout_facade::*;
pub use config::*;
pub use error::*;
