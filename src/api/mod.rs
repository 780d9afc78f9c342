//! API service modules for Kite Connect endpoints.
//!
//! Each service is a thin wrapper over the request dispatcher: it names a
//! fixed route, assembles the parameter set, and deserializes the result.

mod market_data;
mod orders;
mod portfolio;
mod user;

pub use market_data::MarketDataService;
pub use orders::OrdersService;
pub use portfolio::PortfolioService;
pub use user::UserService;
