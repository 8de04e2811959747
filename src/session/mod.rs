//! The session gate: token exchange and logout.

pub mod error;
pub mod gate;

pub use error::*;
pub use gate::*;
