//! Dashboard form state, notification fan-out, and input policy.

pub mod controller;
pub mod notify;

pub use controller::*;
pub use notify::*;
