//! The in-memory product snapshot and its category filter.

use crate::model::Product;

/// Category constraint applied when loading the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// All active categories.
    All,
    /// A single category by exact server-side name.
    Category(String),
}

impl CategoryFilter {
    /// Human-readable label for the table header.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Category(c) => c,
        }
    }
}

/// The product list as of the last successful fetch.
///
/// Replaced wholesale on every reload; readers see either the old complete
/// list or the new complete list, never an interleaving.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    products: Vec<Product>,
}

impl Snapshot {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Case-insensitive sku lookup.
    pub fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        let wanted = sku.to_uppercase();
        self.products.iter().find(|p| p.sku.to_uppercase() == wanted)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Swaps in a freshly fetched list.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }
}
