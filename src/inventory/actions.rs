//! The stock action sum type and its validating constructors.
//!
//! # Architecture Note
//! The original client built mutation payloads ad hoc from whatever UI state
//! happened to be set. Here each action variant carries only the fields it
//! needs and can only be obtained through a constructor that has already
//! validated the raw input. Holding a [`StockAction`] is proof that local
//! validation passed.

use super::error::InventoryError;

/// Fallback description applied when the donation form leaves it blank.
pub const DEFAULT_DESCRIPTION: &str = "no description provided.";

/// How the donation form picked its category.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryChoice {
    /// An existing category selected from the known list.
    Existing(String),
    /// A free-text name entered behind the "new category" toggle.
    New(String),
}

/// Raw donation form state, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct DonateForm {
    pub name: String,
    pub description: String,
    pub category: CategoryChoice,
}

/// A validated stock transaction, one constructor per variant.
#[derive(Debug, Clone, PartialEq)]
pub enum StockAction {
    /// Decrement the matched product's stock by exactly 1.
    Collect { sku: String },
    /// Increment the matched product's stock by `quantity`.
    AddStock { sku: String, quantity: u32 },
    /// Create a brand-new product with stock 1.
    Donate {
        name: String,
        category: String,
        description: String,
    },
}

impl StockAction {
    /// Builds a collect action. Fails on an empty sku.
    pub fn collect(sku: &str) -> Result<Self, InventoryError> {
        let sku = sku.trim();
        if sku.is_empty() {
            return Err(InventoryError::Validation(
                "please enter the sku of the item.".to_string(),
            ));
        }
        Ok(StockAction::Collect {
            sku: sku.to_string(),
        })
    }

    /// Builds an add-stock action from the raw quantity string.
    ///
    /// The quantity is parsed base 10 directly into the stock type, so
    /// negative, zero, and out-of-range values are all rejected here.
    pub fn add_stock(sku: &str, quantity_text: &str) -> Result<Self, InventoryError> {
        let sku = sku.trim();
        if sku.is_empty() {
            return Err(InventoryError::Validation(
                "please enter the sku of the item.".to_string(),
            ));
        }
        let quantity = quantity_text
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid_quantity())?;
        if quantity == 0 {
            return Err(invalid_quantity());
        }
        Ok(StockAction::AddStock {
            sku: sku.to_string(),
            quantity,
        })
    }

    /// Builds a donation from the form state.
    ///
    /// The resolved category is either the existing pick or the trimmed new
    /// name. A new name that case-insensitively matches a known category is
    /// rejected before any request.
    pub fn donate(form: DonateForm, known_categories: &[String]) -> Result<Self, InventoryError> {
        let (category, is_new) = match &form.category {
            CategoryChoice::Existing(c) => (c.trim().to_string(), false),
            CategoryChoice::New(c) => (c.trim().to_string(), true),
        };

        if form.name.trim().is_empty() || category.is_empty() {
            return Err(InventoryError::Validation(
                "please enter a product name and select/enter a category.".to_string(),
            ));
        }

        if is_new
            && known_categories
                .iter()
                .any(|known| known.to_lowercase() == category.to_lowercase())
        {
            return Err(InventoryError::CategoryExists(category));
        }

        let description = form.description.trim();
        let description = if description.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            description.to_string()
        };

        Ok(StockAction::Donate {
            name: form.name.trim().to_string(),
            category,
            description,
        })
    }
}

fn invalid_quantity() -> InventoryError {
    InventoryError::Validation("please enter a valid quantity to add.".to_string())
}
