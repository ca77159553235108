//! # Checkout Facade
//!
//! One entry point for placing and canceling orders. Behind it sit three independent
//! record stores; callers never talk to them directly.
//!
//! ## Placing an Order
//!
//! ```text
//! total_price(ids) -> create_order(customer, ids, total) -> process_payment(order, total)
//!                  -> decrement(ids)
//! ```
//!
//! Each step is awaited before the next starts. The sequence is **not transactional**: if
//! payment or the stock decrement fails, the order (and payment) written by the earlier
//! steps stay on disk.

use super::config::CheckoutConfig;
use super::error::CheckoutError;
use crate::clients::{InventoryClient, OrderClient, PaymentClient};
use crate::model::{CustomerId, InventoryItem, Order, OrderId, Payment, ProductId};
use crate::{inventory_store, order_store, payment_store};
use record_store::{Backend, JsonFileBackend};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// What [`CheckoutFacade::place_order`] hands back: the created order and its payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedOrder {
    pub order: Order,
    pub payment: Payment,
}

/// Checkout orchestrator over the order, payment and inventory stores.
///
/// The accessors reach store operations the facade does not wrap, such as seeding the
/// inventory or reading back an order.
pub struct CheckoutFacade {
    order_client: OrderClient,
    payment_client: PaymentClient,
    inventory_client: InventoryClient,
    handles: Vec<JoinHandle<()>>,
}

impl CheckoutFacade {
    /// Spawns the three stores over the JSON files named in `config`.
    ///
    /// The files must already exist; see [`CheckoutConfig::prepare_files`].
    pub fn start(config: &CheckoutConfig) -> Self {
        info!(
            orders = %config.orders_path.display(),
            payments = %config.payments_path.display(),
            inventory = %config.inventory_path.display(),
            "Starting checkout stores"
        );
        Self::with_backends(
            config.buffer_size,
            JsonFileBackend::<Order>::new(&config.orders_path),
            JsonFileBackend::<Payment>::new(&config.payments_path),
            JsonFileBackend::<InventoryItem>::new(&config.inventory_path),
        )
    }

    /// Spawns the three stores over arbitrary backends.
    pub fn with_backends(
        buffer_size: usize,
        orders: impl Backend<Order>,
        payments: impl Backend<Payment>,
        inventory: impl Backend<InventoryItem>,
    ) -> Self {
        let (order_store, order_client) = order_store::new(buffer_size, orders);
        let (payment_store, payment_client) = payment_store::new(buffer_size, payments);
        let (inventory_store, inventory_client) = inventory_store::new(buffer_size, inventory);

        let handles = vec![
            tokio::spawn(order_store.run()),
            tokio::spawn(payment_store.run()),
            tokio::spawn(inventory_store.run()),
        ];

        Self {
            order_client,
            payment_client,
            inventory_client,
            handles,
        }
    }

    /// Builds a facade over clients whose stores are owned elsewhere (or mocked).
    /// [`shutdown`](Self::shutdown) then has no tasks to await.
    pub fn from_clients(
        order_client: OrderClient,
        payment_client: PaymentClient,
        inventory_client: InventoryClient,
    ) -> Self {
        Self {
            order_client,
            payment_client,
            inventory_client,
            handles: Vec::new(),
        }
    }

    pub fn orders(&self) -> &OrderClient {
        &self.order_client
    }

    pub fn payments(&self) -> &PaymentClient {
        &self.payment_client
    }

    pub fn inventory(&self) -> &InventoryClient {
        &self.inventory_client
    }

    /// Prices the products, records the order, takes payment and reduces stock.
    ///
    /// `product_ids` lists one entry per unit; unknown ids cost nothing and are not decremented.
    #[instrument(skip(self, product_ids), fields(items = product_ids.len()))]
    pub async fn place_order(
        &self,
        customer_id: CustomerId,
        product_ids: Vec<ProductId>,
    ) -> Result<PlacedOrder, CheckoutError> {
        let total_amount = self.inventory_client.total_price(product_ids.clone()).await?;

        let order = self
            .order_client
            .create_order(customer_id, product_ids.clone(), total_amount)
            .await?;

        let payment = self
            .payment_client
            .process_payment(order.order_id, total_amount)
            .await
            .inspect_err(|e| {
                error!(order_id = %order.order_id, error = %e, "Payment failed after order was recorded")
            })?;

        self.inventory_client
            .decrement(product_ids)
            .await
            .inspect_err(|e| {
                error!(order_id = %order.order_id, error = %e, "Stock update failed after payment")
            })?;

        info!(order_id = %order.order_id, total_amount, "Order placed");
        Ok(PlacedOrder { order, payment })
    }

    /// Marks the order canceled. Payment and stock are left as they are.
    ///
    /// Returns `None` when no order has this id.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: OrderId) -> Result<Option<Order>, CheckoutError> {
        Ok(self.order_client.cancel_order(order_id).await?)
    }

    /// Drops the clients and waits for every store task to finish.
    ///
    /// A store only stops once every clone of its client is gone, so clones taken through
    /// [`orders`](Self::orders), [`payments`](Self::payments) or [`inventory`](Self::inventory)
    /// must be dropped before calling this, or it never returns.
    pub async fn shutdown(self) -> Result<(), CheckoutError> {
        info!("Shutting down checkout stores");
        drop(self.order_client);
        drop(self.payment_client);
        drop(self.inventory_client);

        for handle in self.handles {
            handle
                .await
                .map_err(|e| CheckoutError::StoreTask(e.to_string()))?;
        }
        Ok(())
    }
}
