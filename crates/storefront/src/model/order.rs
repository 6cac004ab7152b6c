use super::{ProductId, Size};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Characters after the `SS` prefix of an order id.
pub const ORDER_ID_SUFFIX_LEN: usize = 6;

/// Type-safe identifier for Orders, e.g. `SS4K2Z9Q`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// A fresh random id: `SS` followed by six uppercase base36 characters.
    pub fn generate() -> Self {
        let suffix = super::random_base36(ORDER_ID_SUFFIX_LEN).to_ascii_uppercase();
        Self(format!("SS{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison, as used by order tracking.
    pub fn matches(&self, query: &str) -> bool {
        self.0.eq_ignore_ascii_case(query)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order status. Any status may be set at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The display order of a progress indicator. `Cancelled` is not part of it.
    pub const PROGRESSION: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    /// Zero-based position in [`OrderStatus::PROGRESSION`].
    pub fn progress_step(&self) -> Option<usize> {
        Self::PROGRESSION.iter().position(|status| status == self)
    }

    pub fn counts_toward_revenue(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// An order line in the ledger.
///
/// `product_name`, `product_image` and `unit_price` are copies taken when the order was
/// placed. Later product edits or deletion do not reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_image: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub size: Size,
    pub total_price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_charge: Option<u64>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
}

impl Order {
    pub fn subtotal(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }

    /// Restores `total_price == unit_price * quantity + delivery_charge`.
    pub fn recompute_total(&mut self) {
        self.total_price = self
            .subtotal()
            .saturating_add(self.delivery_charge.unwrap_or(0));
    }
}

/// Who the order ships to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// DTO for order placement.
///
/// `size` is optional so that a checkout without a size selection reaches validation
/// instead of being unrepresentable.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub product_id: ProductId,
    pub size: Option<Size>,
    pub quantity: u32,
    pub customer: Customer,
}

/// DTO for admin status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderUpdate {
    pub status: OrderStatus,
    /// Replaces the stored charge when present.
    pub delivery_charge: Option<u64>,
}
