//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for every executable in the workspace.
//!
//! The store loop logs with a `record_type` field instead of a module path, so the subscriber
//! hides targets (`with_target(false)`) and uses the compact format that shows spans inline.
//!
//! ```bash
//! # Store lifecycle and writes
//! RUST_LOG=info cargo run -p checkout
//!
//! # Every load, query and full request payload
//! RUST_LOG=debug cargo run -p checkout
//! ```
//!
//! With `RUST_LOG=info` a single checkout reads:
//!
//! ```text
//! INFO Store started record_type="InventoryItem" location=inventory.json
//! INFO place_order: Created record_type="Order" id=order_1 size=1
//! INFO place_order: Created record_type="Payment" id=payment_1 size=1
//! INFO place_order: Action ok record_type="InventoryItem"
//! ```

/// Initializes the global subscriber, filtered by `RUST_LOG`.
///
/// Calling it twice panics, so only executables call it, never libraries or tests.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
