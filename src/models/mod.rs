//! Data models for the Kite Connect API.
//!
//! Strongly-typed structures for request parameters and response payloads,
//! organized by domain:
//!
//! - [`enums`] - Wire enumerations (exchange, product, order type, …)
//! - [`user`] - Session, profile, and margin models
//! - [`order`] - Order and trade models
//! - [`portfolio`] - Holdings and positions
//! - [`market_data`] - Quotes and the instruments dump

pub mod enums;
pub mod market_data;
pub mod order;
pub mod portfolio;
pub mod user;

// Re-export commonly used types
pub use enums::*;
pub use market_data::*;
pub use order::*;
pub use portfolio::*;
pub use user::*;
