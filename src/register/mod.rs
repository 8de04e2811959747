//! The account registration flow.

pub mod error;
pub mod flow;

pub use error::*;
pub use flow::*;
