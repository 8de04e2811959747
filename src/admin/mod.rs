//! Confirmation-gated admin actions: archive toggle and permanent delete.

pub mod dispatcher;
pub mod error;

pub use dispatcher::*;
pub use error::*;
