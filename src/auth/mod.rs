//! Authentication: credential storage, the login checksum, and the login
//! redirect URL.
//!
//! The login flow is external to this crate: the application sends the user
//! to [`login_url`], receives a `request_token` on its redirect URL, and
//! exchanges it via [`KiteClient::generate_session`].
//!
//! [`KiteClient::generate_session`]: crate::KiteClient::generate_session

mod credentials;

pub use credentials::{checksum, Credentials};

/// Build the login redirect URL for the connect flow.
///
/// Pure string formatting; no request is made.
pub fn login_url(login_base: &str, api_key: &str) -> String {
    format!("{}?v=3&api_key={}", login_base, api_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_url() {
        assert_eq!(
            login_url("https://kite.zerodha.com/connect/login", "key1"),
            "https://kite.zerodha.com/connect/login?v=3&api_key=key1"
        );
    }
}
