//! Admin dashboard figures, recomputed from the current catalog and ledger on every read.

use crate::model::{Order, OrderStatus, Product};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Orders shown in the dashboard's recent list.
pub const RECENT_ORDERS_LIMIT: usize = 5;

/// Sum of `total_price` over every order that is not cancelled.
pub fn total_revenue(orders: &[Order]) -> u64 {
    orders
        .iter()
        .filter(|o| o.status.counts_toward_revenue())
        .map(|o| o.total_price)
        .sum()
}

pub fn pending_count(orders: &[Order]) -> usize {
    orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count()
}

/// The first `limit` orders of a newest-first listing.
pub fn recent_orders(orders: &[Order], limit: usize) -> &[Order] {
    &orders[..orders.len().min(limit)]
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_revenue: u64,
    pub pending_count: usize,
    pub order_count: usize,
    pub product_count: usize,
    /// Orders placed since the admin last cleared notifications.
    pub new_orders: usize,
    pub recent_orders: Vec<Order>,
}

impl DashboardSummary {
    /// `orders` must be in ledger order (newest first).
    pub fn compute(
        products: &[Product],
        orders: &[Order],
        notifications: &OrderNotifications,
    ) -> Self {
        Self {
            total_revenue: total_revenue(orders),
            pending_count: pending_count(orders),
            order_count: orders.len(),
            product_count: products.len(),
            new_orders: notifications.unseen(orders.len()),
            recent_orders: recent_orders(orders, RECENT_ORDERS_LIMIT).to_vec(),
        }
    }
}

/// Tracks how much of the ledger the admin has already seen.
///
/// The ledger only grows, so the unseen count is its length past the seen mark.
#[derive(Debug, Default)]
pub struct OrderNotifications {
    seen: AtomicUsize,
}

impl OrderNotifications {
    /// Starts with `seen` orders already acknowledged.
    pub fn new(seen: usize) -> Self {
        Self {
            seen: AtomicUsize::new(seen),
        }
    }

    pub fn unseen(&self, ledger_len: usize) -> usize {
        ledger_len.saturating_sub(self.seen.load(Ordering::SeqCst))
    }

    /// Marks the first `ledger_len` orders as seen. The mark never moves back.
    pub fn clear(&self, ledger_len: usize) {
        self.seen.fetch_max(ledger_len, Ordering::SeqCst);
    }
}
