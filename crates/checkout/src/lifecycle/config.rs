//! # Checkout Configuration
//!
//! Where the three record files live and how deep each store's request queue is.
//! Nothing else about checkout is configurable.

use crate::model::{InventoryItem, Order, Payment};
use record_store::{JsonFileBackend, StoreError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown flag: {0}")]
    UnknownFlag(String),
}

/// File locations for the order, payment and inventory stores.
///
/// The default points at `orders.json`, `payments.json` and `inventory.json` in the
/// working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutConfig {
    pub orders_path: PathBuf,
    pub payments_path: PathBuf,
    pub inventory_path: PathBuf,
    pub buffer_size: usize,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            orders_path: PathBuf::from("orders.json"),
            payments_path: PathBuf::from("payments.json"),
            inventory_path: PathBuf::from("inventory.json"),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl CheckoutConfig {
    /// All three files under `dir`, with their default names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            orders_path: dir.join("orders.json"),
            payments_path: dir.join("payments.json"),
            inventory_path: dir.join("inventory.json"),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    pub fn with_orders_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.orders_path = path.into();
        self
    }

    pub fn with_payments_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.payments_path = path.into();
        self
    }

    pub fn with_inventory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.inventory_path = path.into();
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Parses `--data-dir`, `--orders`, `--payments` and `--inventory`, each followed by a path.
    ///
    /// `--data-dir` resets all three paths, so per-file flags should come after it.
    /// The iterator must not include the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(flag) = args.next() {
            let value = args
                .next()
                .ok_or_else(|| ConfigError::MissingValue(flag.clone()));
            config = match flag.as_str() {
                "--data-dir" => Self::in_dir(value?).with_buffer_size(config.buffer_size),
                "--orders" => config.with_orders_path(value?),
                "--payments" => config.with_payments_path(value?),
                "--inventory" => config.with_inventory_path(value?),
                _ => return Err(ConfigError::UnknownFlag(flag)),
            };
        }

        Ok(config)
    }

    /// Creates any missing record file: empty collections for orders and payments,
    /// `inventory_seed` for the inventory. Existing files are left untouched.
    pub fn prepare_files(&self, inventory_seed: &[InventoryItem]) -> Result<(), StoreError> {
        let created_orders = JsonFileBackend::<Order>::new(&self.orders_path).ensure_exists(&[])?;
        let created_payments =
            JsonFileBackend::<Payment>::new(&self.payments_path).ensure_exists(&[])?;
        let created_inventory = JsonFileBackend::<InventoryItem>::new(&self.inventory_path)
            .ensure_exists(inventory_seed)?;

        info!(
            created_orders,
            created_payments, created_inventory, "Record files ready"
        );
        Ok(())
    }
}
