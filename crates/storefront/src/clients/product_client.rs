//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes the catalog operations.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, Size};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => other
                .into_entity_error::<ProductError>()
                .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl ProductClient {
    /// Adds a product and returns it with its generated id and timestamp.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(Self::map_error)
    }

    /// Removes a product. Removing an id that is not in the catalog succeeds.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        match self.delete(id).await {
            Err(ProductError::NotFound(id)) => {
                debug!(%id, "Delete of unknown product ignored");
                Ok(())
            }
            other => other,
        }
    }

    /// Check the current stock level of one size.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId, size: Size) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock(size))
            .await
        {
            Ok(ProductActionResult::CheckStock(level)) => Ok(level),
            Ok(_) => unreachable!("CheckStock action must return CheckStock result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Takes `quantity` units of `size` and returns the product after the decrement.
    #[instrument(skip(self))]
    pub async fn decrement_stock(
        &self,
        id: ProductId,
        size: Size,
        quantity: u32,
    ) -> Result<Product, ProductError> {
        debug!("Decrementing stock");
        match self
            .inner
            .perform_action(id, ProductAction::DecrementStock { size, quantity })
            .await
        {
            Ok(ProductActionResult::DecrementStock(product)) => Ok(*product),
            Ok(_) => unreachable!("DecrementStock action must return DecrementStock result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
