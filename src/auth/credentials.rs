//! Credential storage and the login checksum.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

/// API key plus the session's access token.
///
/// The API key is fixed for the lifetime of the client; the access token is
/// set after a successful token exchange and cleared when the broker signals
/// the session is no longer valid (or on explicit logout).
///
/// # Thread Safety
///
/// The token sits behind a lock so that a concurrent [`auth_header`]
/// read during a [`clear`] observes either the old or the new value,
/// never a torn one. One `Credentials` belongs to one client instance.
///
/// [`auth_header`]: Credentials::auth_header
/// [`clear`]: Credentials::clear
#[derive(Clone)]
pub struct Credentials {
    api_key: Arc<str>,
    access_token: Arc<RwLock<Option<SecretString>>>,
}

impl Credentials {
    /// Create credentials with no access token yet.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Arc::from(api_key.into()),
            access_token: Arc::new(RwLock::new(None)),
        }
    }

    /// Create credentials with an existing access token (resumed session).
    pub fn with_token(api_key: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            api_key: Arc::from(api_key.into()),
            access_token: Arc::new(RwLock::new(token_if_nonempty(access_token.into()))),
        }
    }

    /// The API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Store a new access token. An empty token is treated as absent.
    pub async fn set_access_token(&self, token: impl Into<String>) {
        *self.access_token.write().await = token_if_nonempty(token.into());
    }

    /// Drop the stored access token. Idempotent.
    pub async fn clear(&self) {
        *self.access_token.write().await = None;
    }

    /// Returns `true` if an access token is currently held.
    pub async fn has_access_token(&self) -> bool {
        self.access_token.read().await.is_some()
    }

    /// The raw access token, needed for the logout call.
    pub(crate) async fn access_token_value(&self) -> Option<String> {
        self.access_token
            .read()
            .await
            .as_ref()
            .map(|t| t.expose_secret().to_string())
    }

    /// The `Authorization` header value, `token {api_key}:{access_token}`.
    ///
    /// `None` unless both the API key and the access token are non-empty;
    /// an unauthenticated request carries no Authorization header at all.
    pub async fn auth_header(&self) -> Option<String> {
        if self.api_key.is_empty() {
            return None;
        }
        self.access_token
            .read()
            .await
            .as_ref()
            .map(|token| format!("token {}:{}", self.api_key, token.expose_secret()))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

fn token_if_nonempty(token: String) -> Option<SecretString> {
    if token.is_empty() {
        None
    } else {
        Some(SecretString::new(token))
    }
}

/// The proof-of-possession checksum exchanged during login.
///
/// Lowercase hex SHA-256 of the byte concatenation
/// `api_key + request_token + api_secret`, no separators. The server
/// compares it byte-for-byte during the token exchange.
pub fn checksum(api_key: &str, request_token: &str, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hasher.update(request_token.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
