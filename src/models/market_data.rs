//! Quote and instrument models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Open/high/low/close snapshot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Ohlc {
    /// Day open
    #[serde(default)]
    pub open: f64,
    /// Day high
    #[serde(default)]
    pub high: f64,
    /// Day low
    #[serde(default)]
    pub low: f64,
    /// Previous close
    #[serde(default)]
    pub close: f64,
}

/// One level of the order book.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DepthLevel {
    /// Price at this level
    #[serde(default)]
    pub price: f64,
    /// Quantity at this level
    #[serde(default)]
    pub quantity: u64,
    /// Number of resting orders
    #[serde(default)]
    pub orders: u64,
}

/// Five-level market depth.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketDepth {
    /// Bid levels, best first
    #[serde(default)]
    pub buy: Vec<DepthLevel>,
    /// Ask levels, best first
    #[serde(default)]
    pub sell: Vec<DepthLevel>,
}

/// A full market quote.
///
/// Quote endpoints return a map keyed by `"EXCHANGE:TRADINGSYMBOL"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Numeric instrument identifier
    #[serde(default)]
    pub instrument_token: u64,
    /// Quote timestamp as reported by the broker
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Last traded price
    #[serde(default)]
    pub last_price: f64,
    /// Last traded quantity
    #[serde(default)]
    pub last_quantity: u64,
    /// Volume-weighted average price
    #[serde(default)]
    pub average_price: f64,
    /// Day volume
    #[serde(default)]
    pub volume: u64,
    /// Total buy quantity pending
    #[serde(default)]
    pub buy_quantity: u64,
    /// Total sell quantity pending
    #[serde(default)]
    pub sell_quantity: u64,
    /// Open interest, derivatives only
    #[serde(default)]
    pub oi: Option<f64>,
    /// Absolute change from previous close
    #[serde(default)]
    pub net_change: f64,
    /// OHLC snapshot
    #[serde(default)]
    pub ohlc: Ohlc,
    /// Order book depth
    #[serde(default)]
    pub depth: MarketDepth,
}

/// A reduced OHLC quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhlcQuote {
    /// Numeric instrument identifier
    #[serde(default)]
    pub instrument_token: u64,
    /// Last traded price
    #[serde(default)]
    pub last_price: f64,
    /// OHLC snapshot
    #[serde(default)]
    pub ohlc: Ohlc,
}

/// A last-traded-price quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LtpQuote {
    /// Numeric instrument identifier
    #[serde(default)]
    pub instrument_token: u64,
    /// Last traded price
    #[serde(default)]
    pub last_price: f64,
}

/// One row of the instruments dump.
///
/// The dump is CSV; cells arrive as text and numeric fields are parsed
/// here, defaulting to zero when absent or malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    /// Numeric instrument identifier used for quotes and streaming
    pub instrument_token: u64,
    /// Exchange-internal token
    pub exchange_token: u64,
    /// Trading symbol
    pub tradingsymbol: String,
    /// Instrument name
    pub name: String,
    /// Last traded price at dump time
    pub last_price: f64,
    /// Expiry date for derivatives, empty otherwise
    pub expiry: String,
    /// Strike price for options
    pub strike: f64,
    /// Minimum price increment
    pub tick_size: f64,
    /// Lot size
    pub lot_size: u32,
    /// Instrument type, e.g. "EQ", "FUT", "CE", "PE"
    pub instrument_type: String,
    /// Segment, e.g. "NSE", "NFO-OPT"
    pub segment: String,
    /// Exchange
    pub exchange: String,
}

impl Instrument {
    /// Build an instrument from a decoded CSV row.
    pub(crate) fn from_row(row: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| row.get(key).cloned().unwrap_or_default();
        Self {
            instrument_token: text("instrument_token").parse().unwrap_or_default(),
            exchange_token: text("exchange_token").parse().unwrap_or_default(),
            tradingsymbol: text("tradingsymbol"),
            name: text("name"),
            last_price: text("last_price").parse().unwrap_or_default(),
            expiry: text("expiry"),
            strike: text("strike").parse().unwrap_or_default(),
            tick_size: text("tick_size").parse().unwrap_or_default(),
            lot_size: text("lot_size").parse().unwrap_or_default(),
            instrument_type: text("instrument_type"),
            segment: text("segment"),
            exchange: text("exchange"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_map_deserialization() {
        let quotes: BTreeMap<String, Quote> = serde_json::from_str(
            r#"{
                "NSE:INFY": {
                    "instrument_token": 408065,
                    "last_price": 1450.6,
                    "volume": 1234567,
                    "ohlc": {"open": 1440.0, "high": 1455.0, "low": 1438.2, "close": 1442.1},
                    "depth": {
                        "buy": [{"price": 1450.5, "quantity": 100, "orders": 2}],
                        "sell": [{"price": 1450.7, "quantity": 50, "orders": 1}]
                    }
                }
            }"#,
        )
        .unwrap();
        let quote = &quotes["NSE:INFY"];
        assert_eq!(quote.instrument_token, 408065);
        assert_eq!(quote.ohlc.close, 1442.1);
        assert_eq!(quote.depth.buy[0].quantity, 100);
    }

    #[test]
    fn test_instrument_from_row() {
        let row: BTreeMap<String, String> = [
            ("instrument_token", "408065"),
            ("exchange_token", "1594"),
            ("tradingsymbol", "INFY"),
            ("name", "INFOSYS"),
            ("last_price", "1450.6"),
            ("expiry", ""),
            ("strike", "0"),
            ("tick_size", "0.05"),
            ("lot_size", "1"),
            ("instrument_type", "EQ"),
            ("segment", "NSE"),
            ("exchange", "NSE"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let instrument = Instrument::from_row(&row);
        assert_eq!(instrument.instrument_token, 408065);
        assert_eq!(instrument.tradingsymbol, "INFY");
        assert_eq!(instrument.tick_size, 0.05);
    }

    #[test]
    fn test_instrument_from_sparse_row_defaults() {
        let row: BTreeMap<String, String> =
            [("tradingsymbol".to_string(), "INFY".to_string())].into();
        let instrument = Instrument::from_row(&row);
        assert_eq!(instrument.instrument_token, 0);
        assert_eq!(instrument.last_price, 0.0);
    }
}
