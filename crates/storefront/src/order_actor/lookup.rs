//! Order tracking lookups over a ledger listing (newest first).

use crate::model::Order;

/// First order whose id equals `query` ignoring ASCII case, or whose customer phone equals
/// it exactly. The query is trimmed and a blank query finds nothing.
///
/// Several orders can share a phone number; the newest one wins.
pub fn find_by_id_or_phone<'a>(orders: &'a [Order], query: &str) -> Option<&'a Order> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    orders
        .iter()
        .find(|order| order.id.matches(query) || order.customer_phone == query)
}
