//! ActorEntity implementation for the Product domain type.
//!
//! This module lets [`Product`] be managed by the generic
//! [`ResourceActor`](actor_framework::ResourceActor). The actor's context is the
//! [`StockPolicy`] that decides what an over-sized decrement does.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{
    Product, ProductCreate, ProductId, ProductUpdate, SizeStock, StockPolicy, MAX_GALLERY_IMAGES,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

/// Drops blank entries and keeps at most [`MAX_GALLERY_IMAGES`].
fn clean_gallery(gallery: Vec<String>) -> Vec<String> {
    gallery
        .into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .take(MAX_GALLERY_IMAGES)
        .collect()
}

fn require_text(field: &str, value: &str) -> Result<(), ProductError> {
    if value.trim().is_empty() {
        return Err(ProductError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

fn require_price(price: u64) -> Result<(), ProductError> {
    if price == 0 {
        return Err(ProductError::ValidationError(
            "price must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = StockPolicy;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product, stamping `created_at` with the current time.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        require_text("name", &params.name)?;
        require_text("main image", &params.image)?;
        require_price(params.price)?;

        Ok(Self {
            id,
            name: params.name,
            image: params.image,
            gallery: clean_gallery(params.gallery),
            price: params.price,
            description: params.description,
            category: params.category,
            size_stock: SizeStock::from_quantities(params.stock),
            is_featured: params.is_featured,
            created_at: Utc::now(),
        })
    }

    /// Merges the patch. Stock may move in either direction.
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _policy: &StockPolicy,
    ) -> Result<(), ProductError> {
        if let Some(name) = update.name {
            require_text("name", &name)?;
            self.name = name;
        }
        if let Some(image) = update.image {
            require_text("main image", &image)?;
            self.image = image;
        }
        if let Some(gallery) = update.gallery {
            self.gallery = clean_gallery(gallery);
        }
        if let Some(price) = update.price {
            require_price(price)?;
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(stock) = update.stock {
            self.size_stock.apply(stock);
        }
        if let Some(is_featured) = update.is_featured {
            self.is_featured = is_featured;
        }
        Ok(())
    }

    /// # Actions
    /// - `CheckStock`: returns the cell's quantity
    /// - `DecrementStock`: floors at zero, or under `Strict` refuses an over-sized request
    async fn handle_action(
        &mut self,
        action: ProductAction,
        policy: &StockPolicy,
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock(size) => {
                Ok(ProductActionResult::CheckStock(self.size_stock.get(size)))
            }
            ProductAction::DecrementStock { size, quantity } => {
                let available = self.size_stock.get(size);
                if *policy == StockPolicy::Strict && quantity > available {
                    return Err(ProductError::InsufficientStock {
                        requested: quantity,
                        available,
                    });
                }
                self.size_stock
                    .set(size, available.saturating_sub(quantity));
                Ok(ProductActionResult::DecrementStock(Box::new(self.clone())))
            }
        }
    }

    fn is_read_only(action: &ProductAction) -> bool {
        matches!(action, ProductAction::CheckStock(_))
    }
}
