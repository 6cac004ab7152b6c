use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Number of characters in a generated product id.
pub const PRODUCT_ID_LEN: usize = 9;

/// Gallery images kept on top of the main image.
pub const MAX_GALLERY_IMAGES: usize = 5;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    /// A fresh random id: nine lowercase base36 characters.
    pub fn generate() -> Self {
        Self(super::random_base36(PRODUCT_ID_LEN))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Garment size. Serialized as the literal label (`"S"`, `"XXL"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
    XL,
    XXL,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Size; 5] = [Size::S, Size::M, Size::L, Size::XL, Size::XXL];

    pub fn label(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
        }
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    TShirt,
    Polo,
    Accessory,
    Other,
}

/// Units on hand for every size. Each size always has a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeStock {
    #[serde(rename = "S")]
    pub s: u32,
    #[serde(rename = "M")]
    pub m: u32,
    #[serde(rename = "L")]
    pub l: u32,
    #[serde(rename = "XL")]
    pub xl: u32,
    #[serde(rename = "XXL")]
    pub xxl: u32,
}

impl SizeStock {
    /// Builds a stock table from caller-supplied quantities.
    ///
    /// Negative quantities become zero and sizes that are not mentioned start at zero.
    /// A size listed twice keeps its last quantity.
    pub fn from_quantities(quantities: impl IntoIterator<Item = (Size, i64)>) -> Self {
        let mut stock = Self::default();
        stock.apply(quantities);
        stock
    }

    /// Overwrites the listed cells, coercing each quantity into `0..=u32::MAX`.
    pub fn apply(&mut self, quantities: impl IntoIterator<Item = (Size, i64)>) {
        for (size, qty) in quantities {
            let qty = u32::try_from(qty.max(0)).unwrap_or(u32::MAX);
            self.set(size, qty);
        }
    }

    pub fn get(&self, size: Size) -> u32 {
        match size {
            Size::S => self.s,
            Size::M => self.m,
            Size::L => self.l,
            Size::XL => self.xl,
            Size::XXL => self.xxl,
        }
    }

    pub fn set(&mut self, size: Size, qty: u32) {
        let cell = match size {
            Size::S => &mut self.s,
            Size::M => &mut self.m,
            Size::L => &mut self.l,
            Size::XL => &mut self.xl,
            Size::XXL => &mut self.xxl,
        };
        *cell = qty;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Size, u32)> + '_ {
        Size::ALL.into_iter().map(move |size| (size, self.get(size)))
    }

    /// Units across all sizes.
    pub fn total(&self) -> u64 {
        self.iter().map(|(_, qty)| u64::from(qty)).sum()
    }

    /// Sizes with at least one unit, smallest first.
    pub fn available_sizes(&self) -> Vec<Size> {
        self.iter()
            .filter(|(_, qty)| *qty > 0)
            .map(|(size, _)| size)
            .collect()
    }
}

/// How `decrementStock` treats a request larger than the cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockPolicy {
    /// Take what is there and leave the cell at zero.
    #[default]
    Floor,
    /// Refuse the request with `InsufficientStock` and leave the cell alone.
    Strict,
}

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`](crate::model::ProductCreate))
/// - Update parameters ([`ProductUpdate`](crate::model::ProductUpdate))
/// - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub price: u64,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub size_stock: SizeStock,
    #[serde(default)]
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Units on hand across all sizes.
    pub fn total_stock(&self) -> u64 {
        self.size_stock.total()
    }

    pub fn available_sizes(&self) -> Vec<Size> {
        self.size_stock.available_sizes()
    }
}

/// DTO for Product creation.
///
/// `stock` lists caller quantities per size. They are signed so that bad input can be
/// coerced to zero instead of rejected.
#[derive(Debug, Clone, Default)]
pub struct ProductCreate {
    pub name: String,
    pub image: String,
    pub gallery: Vec<String>,
    pub price: u64,
    pub description: String,
    pub category: Category,
    pub stock: Vec<(Size, i64)>,
    pub is_featured: bool,
}

/// DTO for Product updates. `None` leaves a field as it is.
///
/// `stock` overwrites only the sizes it lists.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub price: Option<u64>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub stock: Option<Vec<(Size, i64)>>,
    pub is_featured: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_stock_coerces_negative_and_missing_quantities() {
        let stock = SizeStock::from_quantities([(Size::S, -3), (Size::L, 7)]);
        assert_eq!(stock.get(Size::S), 0);
        assert_eq!(stock.get(Size::M), 0);
        assert_eq!(stock.get(Size::L), 7);
        assert_eq!(stock.total(), 7);
        assert_eq!(stock.available_sizes(), vec![Size::L]);
    }

    #[test]
    fn test_size_stock_serializes_every_size() {
        let json = serde_json::to_string(&SizeStock::default()).unwrap();
        assert_eq!(json, r#"{"S":0,"M":0,"L":0,"XL":0,"XXL":0}"#);
    }

    #[test]
    fn test_category_uses_kebab_case() {
        assert_eq!(serde_json::to_string(&Category::TShirt).unwrap(), r#""t-shirt""#);
        let parsed: Category = serde_json::from_str(r#""accessory""#).unwrap();
        assert_eq!(parsed, Category::Accessory);
    }

    #[test]
    fn test_generated_product_id_shape() {
        let id = ProductId::generate();
        assert_eq!(id.as_str().len(), PRODUCT_ID_LEN);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
