//! Data models
//!
//! Shared between shop-server and the storefront/admin clients (via API).

pub mod order;
pub mod product;
pub mod setting;

// Re-exports
pub use order::*;
pub use product::*;
pub use setting::*;
