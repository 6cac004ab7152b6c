//! Read-side catalog views used by the shop pages.
//!
//! All functions take the product list as returned by `list_products` (newest first)
//! and keep that order.

use crate::model::{Category, Product};

/// How many products the home page shows when nothing is marked featured.
pub const FEATURED_FALLBACK_COUNT: usize = 4;

/// Products in `category`, or every product when `category` is `None`.
pub fn by_category(products: &[Product], category: Option<Category>) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .collect()
}

/// Case-insensitive substring match on the product name. A blank term matches everything.
pub fn search<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let term = term.trim().to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&term))
        .collect()
}

/// Category filter and name search combined.
pub fn browse<'a>(
    products: &'a [Product],
    category: Option<Category>,
    term: &str,
) -> Vec<&'a Product> {
    let term = term.trim().to_lowercase();
    by_category(products, category)
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&term))
        .collect()
}

/// Featured products, or the first [`FEATURED_FALLBACK_COUNT`] products if none are.
pub fn featured(products: &[Product]) -> Vec<&Product> {
    let featured: Vec<&Product> = products.iter().filter(|p| p.is_featured).collect();
    if featured.is_empty() {
        products.iter().take(FEATURED_FALLBACK_COUNT).collect()
    } else {
        featured
    }
}
