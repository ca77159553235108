//! # Checkout Demo
//!
//! Places one order through the [`CheckoutFacade`] and cancels it again, printing both
//! results. Record files default to the working directory:
//!
//! ```bash
//! cargo run -p checkout
//! cargo run -p checkout -- --data-dir /tmp/shop
//! RUST_LOG=debug cargo run -p checkout
//! ```
//!
//! A missing inventory file is seeded with two products; existing files are reused, so
//! repeated runs keep appending orders and drawing stock down.

use checkout::lifecycle::{CheckoutConfig, CheckoutError, CheckoutFacade};
use checkout::model::{CustomerId, InventoryItem, ProductId};
use record_store::tracing::setup_tracing;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), CheckoutError> {
    setup_tracing();

    let config = CheckoutConfig::from_args(std::env::args().skip(1))?;
    config.prepare_files(&[
        InventoryItem::new(1, 10, 100.0),
        InventoryItem::new(2, 5, 50.0),
    ])?;

    let facade = CheckoutFacade::start(&config);

    let span = tracing::info_span!("place_order");
    let placed = async {
        info!("Placing order");
        facade
            .place_order(CustomerId(101), vec![ProductId(1), ProductId(2)])
            .await
    }
    .instrument(span)
    .await?;
    println!("\nOrder Result: {}", to_json(&placed));

    let span = tracing::info_span!("cancel_order");
    let canceled = facade
        .cancel_order(placed.order.order_id)
        .instrument(span)
        .await?;
    println!("\nCancel Result: {}", to_json(&canceled));

    facade.shutdown().await?;
    info!("Checkout demo completed");
    Ok(())
}

fn to_json(value: &impl serde::Serialize) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unprintable: {e}>"))
}
