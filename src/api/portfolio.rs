//! Portfolio service: holdings and positions.

use std::sync::Arc;

use crate::client::{ClientInner, Params};
use crate::models::{Holding, Positions};
use crate::Result;

/// Service for portfolio queries.
pub struct PortfolioService {
    inner: Arc<ClientInner>,
}

impl PortfolioService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch demat holdings.
    pub async fn holdings(&self) -> Result<Vec<Holding>> {
        self.inner.get("portfolio.holdings", Params::new()).await
    }

    /// Fetch the positions book (net and day).
    pub async fn positions(&self) -> Result<Positions> {
        self.inner.get("portfolio.positions", Params::new()).await
    }
}
