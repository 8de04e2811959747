//! The product record and its wire-format normalization.

use serde::Deserialize;

/// Stock level at or below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// A product as held in the client snapshot.
///
/// Server-owned and read-only on this side; `stock` is the only field the
/// client ever asks the server to change.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    /// Unique per product; lookups match case-insensitively.
    pub sku: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Quantity on hand. Never requested to go negative.
    pub stock: u32,
    /// Archived products stay in the list but render differently.
    pub is_archived: bool,
}

impl Product {
    /// Whether the rendering layer should highlight this row.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= LOW_STOCK_THRESHOLD
    }
}

/// A product as the list endpoint emits it.
///
/// The upstream representation is inconsistent about the quantity key: some
/// records carry `quantity`, some `stock`. [`ProductRecord::normalize`]
/// coalesces (`quantity` first, then `stock`, then 0) so the rest of the
/// crate only ever sees [`Product::stock`].
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub is_archived: bool,
}

impl ProductRecord {
    pub fn normalize(self) -> Product {
        Product {
            id: self.id,
            sku: self.sku,
            name: self.name,
            category: self.category,
            description: self.description,
            stock: self.quantity.or(self.stock).unwrap_or(0),
            is_archived: self.is_archived,
        }
    }
}
