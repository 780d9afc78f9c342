//! Error types for the Kite Connect API client.
//!
//! Client-side failures (unknown route, missing placeholder parameter) are
//! raised before any network call. Server-side failures carry the broker's
//! `error_type` classification, the HTTP status, and the raw body.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Kite Connect operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Kite Connect API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing failed (instruments dump)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// No route with this name exists in the route table
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    /// A route template placeholder had no matching parameter.
    ///
    /// This is a caller bug, not a server error; it is raised before any
    /// network call is made.
    #[error("route {route} is missing parameter `{name}`")]
    MissingParameter {
        /// Route name being resolved
        route: String,
        /// Placeholder with no matching key
        name: String,
    },

    /// Request timed out without a response
    #[error("request timed out")]
    Timeout,

    /// The API returned an error response
    #[error("API error ({kind:?}, status={status}): {message}")]
    Api {
        /// Broker-side classification of the failure
        kind: ExceptionKind,
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Raw response body, preserved for logging
        body: Value,
    },

    /// Invalid input provided to a function
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Broker-side error classification from the `error_type` payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    /// Session token is invalid or expired; stored credentials are cleared
    Token,
    /// Account or user-level failure
    User,
    /// Order placement, modification, or cancellation failure
    Order,
    /// Malformed or out-of-range request parameters
    Input,
    /// Broker-reported network or OMS connectivity failure
    Network,
    /// Internal data or system error at the broker
    Data,
    /// Everything else, including unrecognized `error_type` values
    General,
}

impl ExceptionKind {
    /// Map a broker `error_type` string onto a kind.
    ///
    /// Unrecognized values fall through to [`ExceptionKind::General`]; the
    /// caller is responsible for preserving the original string.
    pub fn from_error_type(error_type: &str) -> Self {
        match error_type {
            "TokenException" => ExceptionKind::Token,
            "UserException" => ExceptionKind::User,
            "OrderException" => ExceptionKind::Order,
            "InputException" => ExceptionKind::Input,
            "NetworkException" => ExceptionKind::Network,
            "DataException" => ExceptionKind::Data,
            _ => ExceptionKind::General,
        }
    }
}

impl Error {
    /// Returns `true` if this error invalidates the current session.
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            Error::Api {
                kind: ExceptionKind::Token,
                ..
            }
        )
    }

    /// Returns `true` if this error was raised before any network call.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownRoute(_) | Error::MissingParameter { .. } | Error::InvalidInput(_)
        )
    }

    /// Create an API error from an error-response body.
    ///
    /// The body is expected to carry `error_type` and `message` fields; a
    /// body that doesn't parse as JSON is classified as General with the
    /// raw text preserved.
    pub(crate) fn from_api_response(status: u16, raw: &str) -> Self {
        let body: Value = serde_json::from_str(raw).unwrap_or(Value::Null);

        let error_type = body
            .get("error_type")
            .and_then(|v| v.as_str())
            .unwrap_or("GeneralException");
        let kind = ExceptionKind::from_error_type(error_type);

        let message = body
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or(raw)
            .to_string();

        // Keep unrecognized classifications visible in the message.
        let message = if kind == ExceptionKind::General && error_type != "GeneralException" {
            format!("{}: {}", error_type, message)
        } else {
            message
        };

        Error::Api {
            kind,
            status,
            message,
            body,
        }
    }
}
