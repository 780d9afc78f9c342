//! Market data service: quotes and the instruments dump.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::client::{ClientInner, Params};
use crate::models::{Exchange, Instrument, LtpQuote, OhlcQuote, Quote};
use crate::Result;

/// Service for market data.
///
/// Quote endpoints take instrument keys of the form
/// `"EXCHANGE:TRADINGSYMBOL"` (e.g. `"NSE:INFY"`) and return a map keyed the
/// same way. Multiple instruments are sent as repeated query keys.
pub struct MarketDataService {
    inner: Arc<ClientInner>,
}

impl MarketDataService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the full instruments dump across all exchanges.
    ///
    /// This endpoint returns CSV (several megabytes), not JSON.
    pub async fn instruments(&self) -> Result<Vec<Instrument>> {
        let rows = self
            .inner
            .get_rows("market.instruments.all", Params::new())
            .await?;
        Ok(rows.iter().map(Instrument::from_row).collect())
    }

    /// Fetch the instruments dump for one exchange.
    pub async fn instruments_for(&self, exchange: Exchange) -> Result<Vec<Instrument>> {
        let rows = self
            .inner
            .get_rows(
                "market.instruments",
                Params::new().push("exchange", exchange),
            )
            .await?;
        Ok(rows.iter().map(Instrument::from_row).collect())
    }

    /// Fetch full quotes for up to 500 instruments.
    pub async fn quote(&self, instruments: &[&str]) -> Result<BTreeMap<String, Quote>> {
        self.inner
            .get("market.quote", instrument_params(instruments))
            .await
    }

    /// Fetch OHLC quotes for up to 1000 instruments.
    pub async fn ohlc(&self, instruments: &[&str]) -> Result<BTreeMap<String, OhlcQuote>> {
        self.inner
            .get("market.quote.ohlc", instrument_params(instruments))
            .await
    }

    /// Fetch last traded prices for up to 1000 instruments.
    pub async fn ltp(&self, instruments: &[&str]) -> Result<BTreeMap<String, LtpQuote>> {
        self.inner
            .get("market.quote.ltp", instrument_params(instruments))
            .await
    }
}

fn instrument_params(instruments: &[&str]) -> Params {
    Params::new().push_list("i", instruments.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruments_serialize_as_repeated_keys() {
        let params = instrument_params(&["NSE:INFY", "NSE:TCS"]);
        assert_eq!(params.to_pairs(), vec![("i", "NSE:INFY"), ("i", "NSE:TCS")]);
    }
}
