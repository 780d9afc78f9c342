//! User, session, and margin models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload returned by the token exchange during login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    /// Broker user ID
    pub user_id: String,
    /// Display name
    #[serde(default)]
    pub user_name: String,
    /// Account email
    #[serde(default)]
    pub email: String,
    /// Account type (e.g. "individual")
    #[serde(default)]
    pub user_type: String,
    /// Broker identifier
    #[serde(default)]
    pub broker: String,
    /// The session access token; also stored on the client's credentials
    pub access_token: String,
    /// Public token for browser-facing integrations
    #[serde(default)]
    pub public_token: Option<String>,
    /// Login timestamp as reported by the broker
    #[serde(default)]
    pub login_time: Option<String>,
    /// Exchanges enabled on the account
    #[serde(default)]
    pub exchanges: Vec<String>,
    /// Products enabled on the account
    #[serde(default)]
    pub products: Vec<String>,
    /// Order types enabled on the account
    #[serde(default)]
    pub order_types: Vec<String>,
}

/// The user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Broker user ID
    pub user_id: String,
    /// Display name
    #[serde(default)]
    pub user_name: String,
    /// Account email
    #[serde(default)]
    pub email: String,
    /// Account type
    #[serde(default)]
    pub user_type: String,
    /// Broker identifier
    #[serde(default)]
    pub broker: String,
    /// Exchanges enabled on the account
    #[serde(default)]
    pub exchanges: Vec<String>,
    /// Products enabled on the account
    #[serde(default)]
    pub products: Vec<String>,
    /// Order types enabled on the account
    #[serde(default)]
    pub order_types: Vec<String>,
}

/// Funds and margins for one segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentMargins {
    /// Whether the segment is enabled
    #[serde(default)]
    pub enabled: bool,
    /// Net cash balance available for trading
    #[serde(default)]
    pub net: f64,
    /// Available margin breakdown
    #[serde(default)]
    pub available: MarginFunds,
    /// Utilised margin breakdown; field set varies by account, kept raw
    #[serde(default)]
    pub utilised: Value,
}

/// Available-margin breakdown within a segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarginFunds {
    /// Raw cash
    #[serde(default)]
    pub cash: f64,
    /// Intraday payin
    #[serde(default)]
    pub intraday_payin: f64,
    /// Value of collateral pledged
    #[serde(default)]
    pub collateral: f64,
    /// Margin from the start of day
    #[serde(default)]
    pub adhoc_margin: f64,
    /// Realised day P&L credited back as margin
    #[serde(default)]
    pub live_balance: f64,
}

/// Margins across both segments, from the unfiltered margins endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Margins {
    /// Equity segment margins
    #[serde(default)]
    pub equity: Option<SegmentMargins>,
    /// Commodity segment margins
    #[serde(default)]
    pub commodity: Option<SegmentMargins>,
}
