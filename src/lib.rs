//! # kiteconnect-rs
//!
//! A Rust client for the Zerodha Kite Connect v3 trading REST API.
//!
//! The crate is built around a generic request dispatcher: logical
//! operations are named routes resolved against a static template table,
//! authenticated with a `token api_key:access_token` header, and decoded by
//! the response's declared content type (JSON envelope for everything except
//! the CSV instruments dump). Broker errors are classified from the
//! `error_type` payload field; a `TokenException` clears the stored session.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kiteconnect_rs::KiteClient;
//!
//! #[tokio::main]
//! async fn main() -> kiteconnect_rs::Result<()> {
//!     let client = KiteClient::new("your-api-key")?;
//!
//!     // 1. Send the user to the login page:
//!     println!("log in at {}", client.login_url());
//!
//!     // 2. Exchange the request token from the redirect:
//!     let session = client
//!         .generate_session("request-token", "your-api-secret")
//!         .await?;
//!     println!("logged in as {}", session.user_id);
//!
//!     // 3. Call the API:
//!     let profile = client.user().profile().await?;
//!     println!("hello, {}", profile.user_name);
//!
//!     let quotes = client.market_data().ltp(&["NSE:INFY", "NSE:TCS"]).await?;
//!     for (instrument, quote) in &quotes {
//!         println!("{instrument}: {}", quote.last_price);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Placing an order
//!
//! ```rust,no_run
//! use kiteconnect_rs::KiteClient;
//! use kiteconnect_rs::models::{
//!     Exchange, OrderParams, OrderType, Product, TransactionType, Variety,
//! };
//!
//! #[tokio::main]
//! async fn main() -> kiteconnect_rs::Result<()> {
//!     let client = KiteClient::with_access_token("api-key", "access-token")?;
//!
//!     let order = OrderParams::new(
//!         Exchange::NSE,
//!         "INFY",
//!         TransactionType::Buy,
//!         10,
//!         Product::CNC,
//!         OrderType::Limit,
//!     )
//!     .price(1450.25)
//!     .tag("example");
//!
//!     let receipt = client.orders().place(&order).await?;
//!     println!("placed {}", receipt.order_id);
//!
//!     client
//!         .orders()
//!         .cancel(Variety::Regular, &receipt.order_id)
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Failures raised before any network call ([`Error::UnknownRoute`],
//! [`Error::MissingParameter`]) are caller bugs. Broker-classified failures
//! surface as [`Error::Api`] with an [`ExceptionKind`]; the client never
//! retries or re-authenticates on its own — the one recovery action it takes
//! is dropping the stored access token when the broker reports a
//! `TokenException`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{checksum, Credentials};
pub use client::{ClientConfig, Decoded, KiteClient, Params};
pub use error::{Error, ExceptionKind, Result};

/// Prelude module for convenient imports.
///
/// ```rust
/// use kiteconnect_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{MarketDataService, OrdersService, PortfolioService, UserService};
    pub use crate::auth::Credentials;
    pub use crate::client::{ClientConfig, KiteClient};
    pub use crate::error::{Error, ExceptionKind, Result};
    pub use crate::models::{
        Exchange, Holding, Instrument, LtpQuote, Margins, OhlcQuote, Order, OrderParams,
        OrderReceipt, OrderType, Positions, Product, Profile, Quote, Segment, Trade,
        TransactionType, UserSession, Validity, Variety,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = KiteClient::new("key1").unwrap();
        assert_eq!(client.credentials().api_key(), "key1");
    }

    #[tokio::test]
    async fn test_resumed_session_has_auth() {
        let client = KiteClient::with_access_token("key1", "tok").unwrap();
        assert_eq!(
            client.credentials().auth_header().await,
            Some("token key1:tok".to_string())
        );
    }
}
