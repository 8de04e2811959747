//! The inventory core: snapshot loading and the stock transaction resolver.
//!
//! Everything else in this crate is wiring; this module holds the branching
//! logic. The flow is always the same shape:
//!
//! 1. A [`StockAction`] is built from raw form input. Construction validates
//!    locally; invalid input never produces an action.
//! 2. [`Inventory::resolve`] checks the action against the last-fetched
//!    [`Snapshot`] (lookup, stock preconditions) and issues exactly one
//!    mutation through the transport.
//! 3. On success the caller reloads the snapshot; on failure nothing is
//!    rolled back because nothing local was advanced.

pub mod actions;
pub mod error;
pub mod resolver;
pub mod sku;
pub mod snapshot;

pub use actions::*;
pub use error::*;
pub use resolver::*;
pub use snapshot::*;
