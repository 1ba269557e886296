//! Shared types for the shop API
//!
//! Wire models used by the server and by any client that talks to it,
//! plus small utilities (time, id generation).

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
