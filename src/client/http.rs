//! HTTP client and request dispatch for the Kite Connect API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{MarketDataService, OrdersService, PortfolioService, UserService};
use crate::auth::{self, checksum, Credentials};
use crate::models::UserSession;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::decode::{decode, Decoded};
use super::params::Params;
use super::routes;

/// The main client for interacting with the Kite Connect API.
///
/// A client owns one set of [`Credentials`] for one authenticated session
/// and provides access to the API through service structs.
///
/// # Example
///
/// ```no_run
/// use kiteconnect_rs::KiteClient;
///
/// # async fn example() -> kiteconnect_rs::Result<()> {
/// let client = KiteClient::new("your-api-key")?;
///
/// // Send the user to client.login_url(), then exchange the request token:
/// let session = client.generate_session("request-token", "api-secret").await?;
/// println!("logged in as {}", session.user_id);
///
/// let holdings = client.portfolio().holdings().await?;
/// # Ok(())
/// # }
/// ```
pub struct KiteClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) config: ClientConfig,
}

impl KiteClient {
    /// Create a client with no access token yet.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(api_key), ClientConfig::default())
    }

    /// Create a client resuming a previously obtained access token.
    pub fn with_access_token(
        api_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(
            Credentials::with_token(api_key, access_token),
            ClientConfig::default(),
        )
    }

    /// Create a client with existing credentials and custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                credentials,
                config,
            }),
        })
    }

    /// The URL to send the user to for the connect login flow.
    pub fn login_url(&self) -> String {
        auth::login_url(&self.inner.config.login_url, self.inner.credentials.api_key())
    }

    /// Exchange a login `request_token` for an access token.
    ///
    /// Computes the SHA-256 checksum over `api_key + request_token +
    /// api_secret`, performs the token exchange, and stores the returned
    /// access token for subsequent calls.
    pub async fn generate_session(
        &self,
        request_token: &str,
        api_secret: &str,
    ) -> Result<UserSession> {
        let api_key = self.inner.credentials.api_key().to_string();
        let params = Params::new()
            .push("api_key", &api_key)
            .push("request_token", request_token)
            .push("checksum", checksum(&api_key, request_token, api_secret));

        let session: UserSession = self.inner.post("api.token", params).await?;
        self.inner
            .credentials
            .set_access_token(&session.access_token)
            .await;
        Ok(session)
    }

    /// Store an access token directly (resumed session).
    pub async fn set_access_token(&self, access_token: impl Into<String>) {
        self.inner.credentials.set_access_token(access_token).await;
    }

    /// Invalidate the current access token with the broker (logout) and
    /// clear it locally.
    pub async fn invalidate_access_token(&self) -> Result<()> {
        let token = self
            .inner
            .credentials
            .access_token_value()
            .await
            .ok_or_else(|| Error::InvalidInput("no access token to invalidate".to_string()))?;

        let params = Params::new()
            .push("api_key", self.inner.credentials.api_key())
            .push("access_token", token);

        self.inner
            .execute("api.token.invalidate", Method::DELETE, params)
            .await?;
        self.inner.credentials.clear().await;
        Ok(())
    }

    /// Get the user service (profile, margins).
    pub fn user(&self) -> UserService {
        UserService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the portfolio service (holdings, positions).
    pub fn portfolio(&self) -> PortfolioService {
        PortfolioService::new(self.inner.clone())
    }

    /// Get the market data service (quotes, instruments).
    pub fn market_data(&self) -> MarketDataService {
        MarketDataService::new(self.inner.clone())
    }

    /// Get a reference to the credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Dispatch a raw API call by route name.
    ///
    /// This is the engine the typed services are built on. It returns the
    /// discriminated decode outcome, including the
    /// [`Decoded::Unsupported`] sentinel for content types with no
    /// decoder — the typed services degrade that to an absent value, but a
    /// caller going through this method can match on it and be strict.
    pub async fn execute(&self, route: &str, method: Method, params: Params) -> Result<Decoded> {
        self.inner.execute(route, method, params).await
    }
}

impl ClientInner {
    /// Build request headers: API revision plus authentication when held.
    pub(crate) async fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            "X-Kite-Version",
            HeaderValue::from_str(&self.config.api_version)
                .map_err(|_| Error::InvalidInput("invalid API version".to_string()))?,
        );

        if let Some(auth) = self.credentials.auth_header().await {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&auth)
                    .map_err(|_| Error::InvalidInput("invalid token format".to_string()))?,
            );
        }

        Ok(headers)
    }

    /// Resolve, dispatch, and decode one API call.
    ///
    /// GET/DELETE parameters go on the query string (lists as repeated
    /// keys); POST/PUT parameters go as an urlencoded form body. A non-2xx
    /// response is classified from the broker error payload; a
    /// `TokenException` additionally clears the stored credentials.
    pub(crate) async fn execute(
        &self,
        route: &str,
        method: Method,
        mut params: Params,
    ) -> Result<Decoded> {
        let path = routes::resolve(route, &mut params)?;
        let url = Url::parse(&format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            path
        ))?;
        let headers = self.build_headers().await?;
        let pairs = params.to_pairs();

        tracing::debug!(route, %method, %url, "dispatching request");

        let has_body = matches!(method, Method::POST | Method::PUT);
        let request = self.http.request(method, url).headers(headers);
        let request = if has_body {
            request.form(&pairs)
        } else {
            request.query(&pairs)
        };

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let body = response.bytes().await?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            return Err(self.classify_failure(status.as_u16(), &text).await);
        }

        decode(&content_type, &body)
    }

    /// Classify a broker error response and apply its side effect.
    ///
    /// A Token-kind error means the session is no longer valid; the stored
    /// access token is dropped so later calls go out unauthenticated rather
    /// than with a dead token. No retry or re-authentication happens here.
    pub(crate) async fn classify_failure(&self, status: u16, body: &str) -> Error {
        let err = Error::from_api_response(status, body);
        if err.is_token_error() {
            tracing::warn!(status, "broker invalidated the session; clearing access token");
            self.credentials.clear().await;
        } else {
            tracing::debug!(status, "API error response");
        }
        err
    }

    /// GET a route and deserialize the JSON `data` payload.
    pub(crate) async fn get<T: DeserializeOwned>(&self, route: &str, params: Params) -> Result<T> {
        let decoded = self.execute(route, Method::GET, params).await?;
        Ok(serde_json::from_value(decoded.into_json())?)
    }

    /// POST a route and deserialize the JSON `data` payload.
    pub(crate) async fn post<T: DeserializeOwned>(&self, route: &str, params: Params) -> Result<T> {
        let decoded = self.execute(route, Method::POST, params).await?;
        Ok(serde_json::from_value(decoded.into_json())?)
    }

    /// PUT a route and deserialize the JSON `data` payload.
    pub(crate) async fn put<T: DeserializeOwned>(&self, route: &str, params: Params) -> Result<T> {
        let decoded = self.execute(route, Method::PUT, params).await?;
        Ok(serde_json::from_value(decoded.into_json())?)
    }

    /// DELETE a route and deserialize the JSON `data` payload.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        route: &str,
        params: Params,
    ) -> Result<T> {
        let decoded = self.execute(route, Method::DELETE, params).await?;
        Ok(serde_json::from_value(decoded.into_json())?)
    }

    /// GET a route that returns tabular (CSV) data.
    pub(crate) async fn get_rows(
        &self,
        route: &str,
        params: Params,
    ) -> Result<Vec<std::collections::BTreeMap<String, String>>> {
        let decoded = self.execute(route, Method::GET, params).await?;
        Ok(decoded.into_rows())
    }
}

impl Clone for KiteClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for KiteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KiteClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
