//! Order and trade models.

use serde::{Deserialize, Serialize};

use crate::client::Params;

use super::enums::{Exchange, OrderType, Product, TransactionType, Validity, Variety};

/// Parameters for placing or modifying an order.
///
/// Required fields go through [`OrderParams::new`]; optional ones are set
/// with chained methods and omitted from the request when absent.
///
/// # Example
///
/// ```
/// use kiteconnect_rs::models::{
///     Exchange, OrderParams, OrderType, Product, TransactionType,
/// };
///
/// let order = OrderParams::new(
///     Exchange::NSE,
///     "INFY",
///     TransactionType::Buy,
///     10,
///     Product::CNC,
///     OrderType::Limit,
/// )
/// .price(1450.25)
/// .tag("strategy-7");
/// ```
#[derive(Debug, Clone)]
pub struct OrderParams {
    /// Exchange to route to
    pub exchange: Exchange,
    /// Exchange trading symbol
    pub tradingsymbol: String,
    /// Buy or sell
    pub transaction_type: TransactionType,
    /// Quantity in units
    pub quantity: u32,
    /// Margin product
    pub product: Product,
    /// Execution type
    pub order_type: OrderType,
    /// Limit price (LIMIT and SL orders)
    pub price: Option<f64>,
    /// Trigger price (SL and SL-M orders)
    pub trigger_price: Option<f64>,
    /// Order validity; broker defaults to DAY when omitted
    pub validity: Option<Validity>,
    /// Quantity to disclose publicly
    pub disclosed_quantity: Option<u32>,
    /// Free-form tag echoed back on the order
    pub tag: Option<String>,
    /// Order variety; part of the URL path, not the body
    pub variety: Variety,
}

impl OrderParams {
    /// Create order parameters with the required fields.
    pub fn new(
        exchange: Exchange,
        tradingsymbol: impl Into<String>,
        transaction_type: TransactionType,
        quantity: u32,
        product: Product,
        order_type: OrderType,
    ) -> Self {
        Self {
            exchange,
            tradingsymbol: tradingsymbol.into(),
            transaction_type,
            quantity,
            product,
            order_type,
            price: None,
            trigger_price: None,
            validity: None,
            disclosed_quantity: None,
            tag: None,
            variety: Variety::default(),
        }
    }

    /// Set the limit price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the trigger price.
    pub fn trigger_price(mut self, trigger_price: f64) -> Self {
        self.trigger_price = Some(trigger_price);
        self
    }

    /// Set the validity.
    pub fn validity(mut self, validity: Validity) -> Self {
        self.validity = Some(validity);
        self
    }

    /// Set the disclosed quantity.
    pub fn disclosed_quantity(mut self, disclosed_quantity: u32) -> Self {
        self.disclosed_quantity = Some(disclosed_quantity);
        self
    }

    /// Attach a tag to the order.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the order variety.
    pub fn variety(mut self, variety: Variety) -> Self {
        self.variety = variety;
        self
    }

    /// Serialize into request parameters, omitting absent optionals.
    ///
    /// `variety` is included so the route template can consume it into the
    /// URL path.
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .push("variety", self.variety)
            .push("exchange", self.exchange)
            .push("tradingsymbol", &self.tradingsymbol)
            .push("transaction_type", self.transaction_type)
            .push("quantity", self.quantity)
            .push("product", self.product)
            .push("order_type", self.order_type)
            .push_opt("price", self.price)
            .push_opt("trigger_price", self.trigger_price)
            .push_opt("validity", self.validity)
            .push_opt("disclosed_quantity", self.disclosed_quantity)
            .push_opt("tag", self.tag.as_deref())
    }
}

/// Acknowledgement returned by place/modify/cancel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Broker order ID
    pub order_id: String,
}

/// An order as reported by the order book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Broker order ID
    pub order_id: String,
    /// Parent order ID for multi-legged varieties
    #[serde(default)]
    pub parent_order_id: Option<String>,
    /// Exchange-assigned order ID, absent until the exchange accepts it
    #[serde(default)]
    pub exchange_order_id: Option<String>,
    /// Current status, e.g. "OPEN", "COMPLETE", "CANCELLED", "REJECTED"
    #[serde(default)]
    pub status: String,
    /// Human-readable reason for the status, if any
    #[serde(default)]
    pub status_message: Option<String>,
    /// Order timestamp as reported by the broker
    #[serde(default)]
    pub order_timestamp: Option<String>,
    /// Order variety
    #[serde(default)]
    pub variety: Option<Variety>,
    /// Exchange
    #[serde(default)]
    pub exchange: Option<Exchange>,
    /// Trading symbol
    #[serde(default)]
    pub tradingsymbol: String,
    /// Numeric instrument identifier
    #[serde(default)]
    pub instrument_token: u64,
    /// Buy or sell
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,
    /// Execution type
    #[serde(default)]
    pub order_type: Option<OrderType>,
    /// Margin product
    #[serde(default)]
    pub product: Option<Product>,
    /// Validity
    #[serde(default)]
    pub validity: Option<Validity>,
    /// Limit price
    #[serde(default)]
    pub price: f64,
    /// Trigger price
    #[serde(default)]
    pub trigger_price: f64,
    /// Average fill price
    #[serde(default)]
    pub average_price: f64,
    /// Ordered quantity
    #[serde(default)]
    pub quantity: u32,
    /// Quantity filled so far
    #[serde(default)]
    pub filled_quantity: u32,
    /// Quantity still pending
    #[serde(default)]
    pub pending_quantity: u32,
    /// Quantity cancelled
    #[serde(default)]
    pub cancelled_quantity: u32,
    /// Caller-supplied tag
    #[serde(default)]
    pub tag: Option<String>,
}

/// An executed trade (fill).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Broker trade ID
    pub trade_id: String,
    /// Order this fill belongs to
    #[serde(default)]
    pub order_id: String,
    /// Exchange-assigned order ID
    #[serde(default)]
    pub exchange_order_id: Option<String>,
    /// Trading symbol
    #[serde(default)]
    pub tradingsymbol: String,
    /// Exchange
    #[serde(default)]
    pub exchange: Option<Exchange>,
    /// Numeric instrument identifier
    #[serde(default)]
    pub instrument_token: u64,
    /// Buy or sell
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,
    /// Margin product
    #[serde(default)]
    pub product: Option<Product>,
    /// Fill price
    #[serde(default)]
    pub average_price: f64,
    /// Fill quantity
    #[serde(default)]
    pub quantity: u32,
    /// Fill timestamp as reported by the broker
    #[serde(default)]
    pub fill_timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_params_serialization() {
        let params = OrderParams::new(
            Exchange::NSE,
            "INFY",
            TransactionType::Buy,
            10,
            Product::CNC,
            OrderType::Limit,
        )
        .price(1450.25)
        .tag("algo-1")
        .to_params();

        let pairs = params.to_pairs();
        assert!(pairs.contains(&("variety", "regular")));
        assert!(pairs.contains(&("exchange", "NSE")));
        assert!(pairs.contains(&("transaction_type", "BUY")));
        assert!(pairs.contains(&("order_type", "LIMIT")));
        assert!(pairs.contains(&("price", "1450.25")));
        assert!(pairs.contains(&("tag", "algo-1")));
        // Unset optionals are omitted entirely.
        assert!(!pairs.iter().any(|(k, _)| *k == "trigger_price"));
        assert!(!pairs.iter().any(|(k, _)| *k == "validity"));
    }

    #[test]
    fn test_order_deserializes_order_book_entry() {
        let order: Order = serde_json::from_str(
            r#"{
                "order_id": "151220000000000",
                "status": "COMPLETE",
                "tradingsymbol": "INFY",
                "exchange": "NSE",
                "transaction_type": "BUY",
                "order_type": "LIMIT",
                "product": "CNC",
                "quantity": 10,
                "filled_quantity": 10,
                "average_price": 1449.9
            }"#,
        )
        .unwrap();
        assert_eq!(order.order_id, "151220000000000");
        assert_eq!(order.exchange, Some(Exchange::NSE));
        assert_eq!(order.filled_quantity, 10);
        assert_eq!(order.pending_quantity, 0);
    }
}
