//! Live integration tests for kiteconnect-rs.
//!
//! These tests call the real Kite Connect API and need an authenticated
//! session:
//!
//! - KITE_API_KEY: the application's API key
//! - KITE_ACCESS_TOKEN: an access token from a completed login flow
//!
//! Each test skips itself when the variables are absent, so the suite
//! passes offline. Run with: cargo test --test api_tests -- --test-threads=1

use std::env;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

use kiteconnect_rs::prelude::*;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Build an authenticated client, or `None` when credentials are absent.
fn create_client() -> Option<KiteClient> {
    init_logging();
    let api_key = env::var("KITE_API_KEY").ok()?;
    let access_token = env::var("KITE_ACCESS_TOKEN").ok()?;
    Some(KiteClient::with_access_token(api_key, access_token).expect("failed to build client"))
}

macro_rules! client_or_skip {
    () => {
        match create_client() {
            Some(client) => client,
            None => {
                tracing::warn!("KITE_API_KEY / KITE_ACCESS_TOKEN not set; skipping");
                return;
            }
        }
    };
}

mod user_tests {
    use super::*;

    #[tokio::test]
    async fn test_profile() {
        let client = client_or_skip!();

        let profile = client.user().profile().await;
        assert!(profile.is_ok(), "should fetch profile: {:?}", profile);

        let profile = profile.unwrap();
        assert!(!profile.user_id.is_empty());
        tracing::info!("profile: {} ({})", profile.user_id, profile.user_name);
    }

    #[tokio::test]
    async fn test_margins() {
        let client = client_or_skip!();

        let margins = client.user().margins().await;
        assert!(margins.is_ok(), "should fetch margins: {:?}", margins);

        if let Some(equity) = margins.unwrap().equity {
            tracing::info!("equity net: {}", equity.net);
        }
    }

    #[tokio::test]
    async fn test_margins_segment() {
        let client = client_or_skip!();

        let margins = client.user().margins_segment(Segment::Equity).await;
        assert!(margins.is_ok(), "should fetch segment margins: {:?}", margins);
    }
}

mod orders_tests {
    use super::*;

    #[tokio::test]
    async fn test_order_book() {
        let client = client_or_skip!();

        let orders = client.orders().list().await;
        assert!(orders.is_ok(), "should fetch order book: {:?}", orders);

        for order in orders.unwrap().iter().take(5) {
            tracing::info!("order {}: {}", order.order_id, order.status);
        }
    }

    #[tokio::test]
    async fn test_trades() {
        let client = client_or_skip!();

        let trades = client.orders().trades().await;
        assert!(trades.is_ok(), "should fetch trades: {:?}", trades);
        tracing::info!("{} trades today", trades.unwrap().len());
    }

    #[tokio::test]
    async fn test_history_of_unknown_order_is_api_error() {
        let client = client_or_skip!();

        let result = client.orders().history("00000000000000").await;
        match result {
            Err(Error::Api { kind, .. }) => {
                tracing::info!("classified as {:?}", kind);
            }
            Err(e) => panic!("expected a classified API error, got {:?}", e),
            Ok(_) => panic!("unknown order id should not resolve"),
        }
    }

    #[tokio::test]
    async fn test_place_and_cancel_order() {
        let client = client_or_skip!();

        // A deep out-of-the-money limit buy that will not execute.
        let order = OrderParams::new(
            Exchange::NSE,
            "INFY",
            TransactionType::Buy,
            1,
            Product::CNC,
            OrderType::Limit,
        )
        .price(1.0)
        .tag("kiteconnect-rs-test");

        match client.orders().place(&order).await {
            Ok(receipt) => {
                tracing::info!("placed order {}", receipt.order_id);
                let cancelled = client
                    .orders()
                    .cancel(Variety::Regular, &receipt.order_id)
                    .await;
                match cancelled {
                    Ok(receipt) => tracing::info!("cancelled {}", receipt.order_id),
                    Err(e) => tracing::warn!("could not cancel: {:?}", e),
                }
            }
            Err(e) => {
                // Placement can fail outside market hours or on margin.
                tracing::warn!("could not place order (may be expected): {:?}", e);
            }
        }
    }
}

mod portfolio_tests {
    use super::*;

    #[tokio::test]
    async fn test_holdings() {
        let client = client_or_skip!();

        let holdings = client.portfolio().holdings().await;
        assert!(holdings.is_ok(), "should fetch holdings: {:?}", holdings);
        tracing::info!("{} holdings", holdings.unwrap().len());
    }

    #[tokio::test]
    async fn test_positions() {
        let client = client_or_skip!();

        let positions = client.portfolio().positions().await;
        assert!(positions.is_ok(), "should fetch positions: {:?}", positions);

        let positions = positions.unwrap();
        tracing::info!(
            "positions: {} net, {} day",
            positions.net.len(),
            positions.day.len()
        );
    }
}

mod market_data_tests {
    use super::*;

    #[tokio::test]
    async fn test_ltp_multiple_instruments() {
        let client = client_or_skip!();

        let quotes = client.market_data().ltp(&["NSE:INFY", "NSE:TCS"]).await;
        assert!(quotes.is_ok(), "should fetch LTPs: {:?}", quotes);

        for (instrument, quote) in quotes.unwrap() {
            tracing::info!("{instrument}: {}", quote.last_price);
        }
    }

    #[tokio::test]
    async fn test_full_quote() {
        let client = client_or_skip!();

        let quotes = client.market_data().quote(&["NSE:INFY"]).await;
        assert!(quotes.is_ok(), "should fetch quote: {:?}", quotes);

        if let Some(quote) = quotes.unwrap().get("NSE:INFY") {
            tracing::info!(
                "INFY last={} ohlc.close={}",
                quote.last_price,
                quote.ohlc.close
            );
        }
    }

    #[tokio::test]
    async fn test_instruments_csv() {
        let client = client_or_skip!();

        let instruments = client.market_data().instruments_for(Exchange::NSE).await;
        assert!(
            instruments.is_ok(),
            "should fetch instruments dump: {:?}",
            instruments
        );

        let instruments = instruments.unwrap();
        assert!(!instruments.is_empty(), "NSE dump should not be empty");
        tracing::info!("{} NSE instruments", instruments.len());
    }
}

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_token_error_clears_session() {
        init_logging();
        let Ok(api_key) = env::var("KITE_API_KEY") else {
            tracing::warn!("KITE_API_KEY not set; skipping");
            return;
        };

        // A fabricated token must be rejected with a TokenException, which
        // in turn clears the stored credentials.
        let client = KiteClient::with_access_token(api_key, "invalid-token")
            .expect("failed to build client");
        assert!(client.credentials().auth_header().await.is_some());

        let result = client.user().profile().await;
        match result {
            Err(Error::Api { kind, .. }) if kind == ExceptionKind::Token => {
                assert_eq!(client.credentials().auth_header().await, None);
            }
            other => panic!("expected a token error, got {:?}", other),
        }
    }
}
