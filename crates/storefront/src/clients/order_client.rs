//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`; stock handling for new orders happens inside the
//! actor's `on_create` hook.
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::{find_by_id_or_phone, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order. The catalog stock is taken before the order is recorded.
    #[instrument(skip(self, params), fields(product_id = %params.product_id, quantity = params.quantity))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, total = order.total_price, "Order placed");
        Ok(order)
    }

    /// Sets any status. The delivery charge, when given, replaces the stored one.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        delivery_charge: Option<u64>,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(
                id,
                OrderUpdate {
                    status,
                    delivery_charge,
                },
            )
            .await
            .map_err(Self::map_error)
    }

    /// Confirms a pending order with its delivery charge.
    pub async fn confirm(&self, id: OrderId, delivery_charge: u64) -> Result<Order, OrderError> {
        self.update_status(id, OrderStatus::Confirmed, Some(delivery_charge))
            .await
    }

    /// Order tracking: match on id (any case) or customer phone.
    #[instrument(skip(self))]
    pub async fn find_by_id_or_phone(&self, query: &str) -> Result<Option<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(find_by_id_or_phone(&orders, query).cloned())
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .into_entity_error::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}
