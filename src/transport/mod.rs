//! The HTTP seam: the [`Transport`] trait, the real client, and the mock.

pub mod core;
pub mod http;
pub mod mock;

pub use self::core::*;
pub use self::http::*;
pub use self::mock::*;
