//! Enumeration types matching the broker's wire values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exchange to route an order or quote request to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    /// National Stock Exchange (equity)
    NSE,
    /// Bombay Stock Exchange (equity)
    BSE,
    /// NSE futures and options
    NFO,
    /// BSE futures and options
    BFO,
    /// NSE currency derivatives
    CDS,
    /// Multi Commodity Exchange
    MCX,
}

impl Exchange {
    /// Wire representation of the exchange.
    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::NSE => "NSE",
            Exchange::BSE => "BSE",
            Exchange::NFO => "NFO",
            Exchange::BFO => "BFO",
            Exchange::CDS => "CDS",
            Exchange::MCX => "MCX",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Buy
    Buy,
    /// Sell
    Sell,
}

impl TransactionType {
    /// Wire representation of the side.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "BUY",
            TransactionType::Sell => "SELL",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Margin product an order is booked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    /// Cash and carry (delivery)
    CNC,
    /// Normal margin (carry-forward derivatives)
    NRML,
    /// Margin intraday squareoff
    MIS,
    /// Cover order
    CO,
}

impl Product {
    /// Wire representation of the product.
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::CNC => "CNC",
            Product::NRML => "NRML",
            Product::MIS => "MIS",
            Product::CO => "CO",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order execution type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Execute at the current market price
    #[serde(rename = "MARKET")]
    Market,
    /// Execute at the given price or better
    #[serde(rename = "LIMIT")]
    Limit,
    /// Stop loss limit order
    #[serde(rename = "SL")]
    StopLoss,
    /// Stop loss market order
    #[serde(rename = "SL-M")]
    StopLossMarket,
}

impl OrderType {
    /// Wire representation of the order type.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::StopLoss => "SL",
            OrderType::StopLossMarket => "SL-M",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How long an order stays live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Validity {
    /// Good for the trading day
    Day,
    /// Immediate or cancel
    Ioc,
}

impl Validity {
    /// Wire representation of the validity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Validity::Day => "DAY",
            Validity::Ioc => "IOC",
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order variety, part of the order routes' URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variety {
    /// Regular order
    #[default]
    Regular,
    /// After-market order
    Amo,
    /// Cover order
    Co,
    /// Bracket order
    Bo,
}

impl Variety {
    /// Wire representation of the variety.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variety::Regular => "regular",
            Variety::Amo => "amo",
            Variety::Co => "co",
            Variety::Bo => "bo",
        }
    }
}

impl fmt::Display for Variety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Margin segment for the margins endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    /// Equity and equity derivatives
    Equity,
    /// Commodity
    Commodity,
}

impl Segment {
    /// Wire representation of the segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Equity => "equity",
            Segment::Commodity => "commodity",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(OrderType::StopLossMarket.to_string(), "SL-M");
        assert_eq!(TransactionType::Buy.to_string(), "BUY");
        assert_eq!(Variety::Regular.to_string(), "regular");
        assert_eq!(Segment::Commodity.to_string(), "commodity");
    }

    #[test]
    fn test_serde_round_trip() {
        let ot: OrderType = serde_json::from_str("\"SL-M\"").unwrap();
        assert_eq!(ot, OrderType::StopLossMarket);
        assert_eq!(serde_json::to_string(&TransactionType::Sell).unwrap(), "\"SELL\"");
        let v: Validity = serde_json::from_str("\"IOC\"").unwrap();
        assert_eq!(v, Validity::Ioc);
    }
}
