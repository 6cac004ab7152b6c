//! Error types for the Order actor.

use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order was rejected before any stock was touched.
    #[error("Invalid order: {0}")]
    ValidationError(String),

    /// The catalog refused the decrement under the strict stock policy.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => {
                OrderError::ValidationError(format!("product {id} is not available"))
            }
            ProductError::InsufficientStock {
                requested,
                available,
            } => OrderError::InsufficientStock {
                requested,
                available,
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
