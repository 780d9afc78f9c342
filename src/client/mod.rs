//! HTTP client, route table, and request dispatch for the Kite Connect API.
//!
//! This module provides the main entry point [`KiteClient`]. A request is
//! dispatched by resolving a named route template, attaching the version and
//! authentication headers, serializing parameters per HTTP method, and
//! decoding the response by its declared content type.
//!
//! # Example
//!
//! ```no_run
//! use kiteconnect_rs::KiteClient;
//!
//! # async fn example() -> kiteconnect_rs::Result<()> {
//! let client = KiteClient::with_access_token("api-key", "access-token")?;
//! let positions = client.portfolio().positions().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod decode;
mod http;
mod params;
mod routes;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_LOGIN_URL};
pub use decode::Decoded;
pub use http::KiteClient;
pub use params::{ParamValue, Params};
pub use reqwest::Method;
pub(crate) use http::ClientInner;
