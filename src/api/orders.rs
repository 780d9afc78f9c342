//! Orders service: the order book, trades, and order lifecycle calls.

use std::sync::Arc;

use crate::client::{ClientInner, Params};
use crate::models::{Order, OrderParams, OrderReceipt, Trade, Variety};
use crate::Result;

/// Service for order operations.
///
/// # Example
///
/// ```no_run
/// use kiteconnect_rs::models::{
///     Exchange, OrderParams, OrderType, Product, TransactionType,
/// };
///
/// # async fn example(client: kiteconnect_rs::KiteClient) -> kiteconnect_rs::Result<()> {
/// let order = OrderParams::new(
///     Exchange::NSE,
///     "INFY",
///     TransactionType::Buy,
///     10,
///     Product::CNC,
///     OrderType::Limit,
/// )
/// .price(1450.0);
///
/// let receipt = client.orders().place(&order).await?;
/// println!("placed order {}", receipt.order_id);
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the day's order book.
    pub async fn list(&self) -> Result<Vec<Order>> {
        self.inner.get("orders", Params::new()).await
    }

    /// Fetch the state history of one order.
    pub async fn history(&self, order_id: &str) -> Result<Vec<Order>> {
        self.inner
            .get("orders.info", Params::new().push("order_id", order_id))
            .await
    }

    /// Fetch the day's trades across all orders.
    pub async fn trades(&self) -> Result<Vec<Trade>> {
        self.inner.get("trades", Params::new()).await
    }

    /// Fetch the trades generated by one order.
    pub async fn order_trades(&self, order_id: &str) -> Result<Vec<Trade>> {
        self.inner
            .get("orders.trades", Params::new().push("order_id", order_id))
            .await
    }

    /// Place an order.
    pub async fn place(&self, order: &OrderParams) -> Result<OrderReceipt> {
        self.inner.post("orders.place", order.to_params()).await
    }

    /// Modify a pending order. The variety comes from `order`.
    pub async fn modify(&self, order_id: &str, order: &OrderParams) -> Result<OrderReceipt> {
        self.inner
            .put(
                "orders.modify",
                order.to_params().push("order_id", order_id),
            )
            .await
    }

    /// Cancel a pending order.
    pub async fn cancel(&self, variety: Variety, order_id: &str) -> Result<OrderReceipt> {
        self.inner
            .delete(
                "orders.cancel",
                Params::new()
                    .push("variety", variety)
                    .push("order_id", order_id),
            )
            .await
    }
}
