use crate::clients::{OrderClient, ProductClient};
use crate::config::StorefrontConfig;
use crate::model::{Category, Product, ProductId, SizeStock};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::reporting::{DashboardSummary, OrderNotifications};
use crate::settings::{SettingsError, SettingsStore};
use actor_framework::{ActorClient, BlobStore, JsonFileStore, MemoryStore, StoreError};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Snapshot keys. The suffix is the schema version of the stored JSON.
pub const PRODUCTS_KEY: &str = "ss_fashion_products_v4";
pub const ORDERS_KEY: &str = "ss_fashion_orders_v4";
pub const SETTINGS_KEY: &str = "ss_fashion_settings_v4";

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}

/// The product a fresh catalog starts with.
pub fn starter_product() -> Product {
    Product {
        id: ProductId::generate(),
        name: "Signature Gold T-Shirt".to_string(),
        image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?auto=format&fit=crop&q=80&w=600".to_string(),
        gallery: Vec::new(),
        price: 2500,
        description: "Premium heavy cotton with gold-thread embroidery.".to_string(),
        category: Category::TShirt,
        size_stock: SizeStock {
            s: 10,
            m: 15,
            l: 20,
            xl: 5,
            xxl: 5,
        },
        is_featured: true,
        created_at: Utc::now(),
    }
}

/// Runs the catalog and the order ledger and owns the admin settings.
///
/// # Architecture
///
/// - **Product Actor**: the catalog, started with the configured stock policy
/// - **Order Actor**: the ledger, started with a `ProductClient` so it can take stock
/// - **Settings**: a lock-guarded value next to the actors
///
/// All three restore from and write to the same [`BlobStore`].
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::start(&StorefrontConfig::from_env()?)?;
///
/// let order = system.order_client.place_order(checkout).await?;
/// let summary = system.dashboard().await?;
///
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    pub settings: SettingsStore,

    notifications: OrderNotifications,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Opens the configured store (JSON files under `data_dir`, or memory) and starts.
    pub fn start(config: &StorefrontConfig) -> Result<Self, SystemError> {
        let store: Arc<dyn BlobStore> = match &config.data_dir {
            Some(dir) => Arc::new(JsonFileStore::open(dir)?),
            None => Arc::new(MemoryStore::new()),
        };
        Self::start_with_store(config, store)
    }

    /// Restores every collection from `store`, seeds an empty catalog if configured, and
    /// spawns the actors. Must be called inside a Tokio runtime.
    pub fn start_with_store(
        config: &StorefrontConfig,
        store: Arc<dyn BlobStore>,
    ) -> Result<Self, SystemError> {
        let (mut product_actor, product_client) =
            crate::product_actor::new(config.channel_capacity);
        let (mut order_actor, order_client) = crate::order_actor::new(config.channel_capacity);

        let had_catalog = product_actor.restore(store.clone(), PRODUCTS_KEY)?;
        if !had_catalog && config.seed_catalog {
            product_actor.seed([starter_product()]);
        }
        order_actor.restore(store.clone(), ORDERS_KEY)?;
        let notifications = OrderNotifications::new(order_actor.len());
        let settings = SettingsStore::open(store, SETTINGS_KEY)?;

        let product_handle = tokio::spawn(product_actor.run(config.stock_policy));
        let order_handle = tokio::spawn(order_actor.run(product_client.clone()));

        info!(stock_policy = ?config.stock_policy, "Storefront started");
        Ok(Self {
            product_client,
            order_client,
            settings,
            notifications,
            // The order actor holds a product client, so it has to stop first.
            handles: vec![order_handle, product_handle],
        })
    }

    /// Reads both collections and builds the admin dashboard figures.
    pub async fn dashboard(&self) -> Result<DashboardSummary, SystemError> {
        let products = self.product_client.list().await?;
        let orders = self.order_client.list().await?;
        Ok(DashboardSummary::compute(
            &products,
            &orders,
            &self.notifications,
        ))
    }

    /// Orders placed since startup or since the last [`clear_notifications`](Self::clear_notifications).
    pub async fn unseen_orders(&self) -> Result<usize, SystemError> {
        let orders = self.order_client.list().await?;
        Ok(self.notifications.unseen(orders.len()))
    }

    /// Marks every order currently in the ledger as seen.
    pub async fn clear_notifications(&self) -> Result<(), SystemError> {
        let orders = self.order_client.list().await?;
        self.notifications.clear(orders.len());
        debug!(seen = orders.len(), "Notifications cleared");
        Ok(())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the channels; each actor finishes the requests it
    /// already has and exits. Clones of the clients held elsewhere keep their actor alive,
    /// so drop those before calling this.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down storefront...");

        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTaskFailed(e.to_string()));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
