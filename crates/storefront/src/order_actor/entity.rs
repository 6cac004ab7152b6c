//! ActorEntity implementation for the Order domain type.
//!
//! The Order actor runs with a [`ProductClient`] as its context. Placing an order
//! validates the checkout first, then takes the stock from the catalog, and only then is
//! the order stored. A rejected checkout never touches stock.

use super::error::OrderError;
use crate::clients::ProductClient;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

fn required(field: &str, value: String) -> Result<String, OrderError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(OrderError::ValidationError(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ProductClient;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Validates the checkout. The product snapshot is filled in by `on_create`.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.product_id.as_str().trim().is_empty() {
            return Err(OrderError::ValidationError(
                "no product selected".to_string(),
            ));
        }
        let size = params
            .size
            .ok_or_else(|| OrderError::ValidationError("size is required".to_string()))?;
        if params.quantity == 0 {
            return Err(OrderError::ValidationError(
                "quantity must be at least 1".to_string(),
            ));
        }
        let customer_name = required("customer name", params.customer.name)?;
        let customer_phone = required("customer phone", params.customer.phone)?;
        let customer_address = required("customer address", params.customer.address)?;

        Ok(Self {
            id,
            product_id: params.product_id,
            product_name: String::new(),
            product_image: String::new(),
            unit_price: 0,
            quantity: params.quantity,
            size,
            total_price: 0,
            delivery_charge: None,
            customer_name,
            customer_phone,
            customer_address,
            status: OrderStatus::Pending,
            timestamp: Utc::now(),
        })
    }

    /// Takes the stock and copies name, image and price from the product as it stands
    /// right after the decrement.
    async fn on_create(&mut self, catalog: &ProductClient) -> Result<(), OrderError> {
        let product = catalog
            .decrement_stock(self.product_id.clone(), self.size, self.quantity)
            .await?;
        debug!(order_id = %self.id, product_id = %product.id, "Stock taken for order");

        self.product_name = product.name;
        self.product_image = product.image;
        self.unit_price = product.price;
        self.recompute_total();
        Ok(())
    }

    /// Sets the status and recomputes the total. Any status may follow any other.
    ///
    /// The stored charge becomes the supplied one, else the previous one, else zero.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _catalog: &ProductClient,
    ) -> Result<(), OrderError> {
        let charge = update
            .delivery_charge
            .or(self.delivery_charge)
            .unwrap_or(0);
        self.delivery_charge = Some(charge);
        self.status = update.status;
        self.recompute_total();
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _catalog: &ProductClient) -> Result<(), OrderError> {
        Ok(())
    }

    fn is_read_only(_action: &()) -> bool {
        true
    }
}
