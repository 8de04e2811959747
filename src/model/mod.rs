//! Pure data types shared across the workflow services.

pub mod auth;
pub mod product;

pub use auth::*;
pub use product::*;
