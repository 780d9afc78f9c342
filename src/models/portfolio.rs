//! Holdings and positions models.

use serde::{Deserialize, Serialize};

use super::enums::{Exchange, Product};

/// A long-term holding in the demat account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    /// Trading symbol
    pub tradingsymbol: String,
    /// Exchange
    #[serde(default)]
    pub exchange: Option<Exchange>,
    /// Numeric instrument identifier
    #[serde(default)]
    pub instrument_token: u64,
    /// ISIN of the instrument
    #[serde(default)]
    pub isin: String,
    /// Quantity held
    #[serde(default)]
    pub quantity: i64,
    /// Quantity delivered as T+1
    #[serde(default)]
    pub t1_quantity: i64,
    /// Quantity pledged as collateral
    #[serde(default)]
    pub collateral_quantity: i64,
    /// Average acquisition price
    #[serde(default)]
    pub average_price: f64,
    /// Last traded price
    #[serde(default)]
    pub last_price: f64,
    /// Unrealised profit and loss
    #[serde(default)]
    pub pnl: f64,
}

/// An open position in a segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    /// Trading symbol
    pub tradingsymbol: String,
    /// Exchange
    #[serde(default)]
    pub exchange: Option<Exchange>,
    /// Numeric instrument identifier
    #[serde(default)]
    pub instrument_token: u64,
    /// Margin product
    #[serde(default)]
    pub product: Option<Product>,
    /// Net quantity; negative for a short position
    #[serde(default)]
    pub quantity: i64,
    /// Overnight (carried) quantity
    #[serde(default)]
    pub overnight_quantity: i64,
    /// Quantity traded today
    #[serde(default)]
    pub day_buy_quantity: i64,
    /// Quantity sold today
    #[serde(default)]
    pub day_sell_quantity: i64,
    /// Contract multiplier
    #[serde(default)]
    pub multiplier: f64,
    /// Average entry price
    #[serde(default)]
    pub average_price: f64,
    /// Last traded price
    #[serde(default)]
    pub last_price: f64,
    /// Close price of the previous day
    #[serde(default)]
    pub close_price: f64,
    /// Position value
    #[serde(default)]
    pub value: f64,
    /// Total profit and loss
    #[serde(default)]
    pub pnl: f64,
    /// Realised P&L booked today
    #[serde(default)]
    pub realised: f64,
    /// Mark-to-market P&L on the open quantity
    #[serde(default)]
    pub unrealised: f64,
}

/// The positions book: net positions and today's opened positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Positions {
    /// Net positions across days
    #[serde(default)]
    pub net: Vec<Position>,
    /// Positions opened today
    #[serde(default)]
    pub day: Vec<Position>,
}
