//! Error types for inventory operations.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur while building or resolving a stock action.
///
/// The first four variants are local: they are produced before any request
/// is issued. Only `Transport` means the network was reached.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// Form input failed validation; no network call was made.
    #[error("{0}")]
    Validation(String),

    /// No product in the snapshot matched the sku.
    #[error("no active product found with sku: {0}")]
    NotFound(String),

    /// Collect requested against a product with zero stock.
    #[error("{name} is already out of stock")]
    OutOfStock { name: String },

    /// A "new" category name matched an existing category.
    #[error("category already exists: {0}")]
    CategoryExists(String),

    /// The mutation or fetch failed at the transport level.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl InventoryError {
    /// True when the error was produced without issuing a request.
    pub fn is_local(&self) -> bool {
        !matches!(self, InventoryError::Transport(_))
    }
}
