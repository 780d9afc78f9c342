//! Content-negotiated response decoding.
//!
//! Every endpoint except the instruments dump returns a JSON envelope with
//! the payload under `"data"`; the instruments dump returns CSV. Decoding
//! dispatches purely on the declared `Content-Type` of the response.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::Result;

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The `data` field of a JSON envelope
    Json(Value),
    /// CSV rows as ordered column-name → cell-text records
    Table(Vec<BTreeMap<String, String>>),
    /// A JSON envelope with no `data` field
    Empty,
    /// A content type with no registered decoder; the body was ignored.
    ///
    /// Historically the client dropped such bodies silently. The sentinel
    /// keeps that contract (accessors below treat it as absent) while
    /// letting callers match on it for stricter handling.
    Unsupported(String),
}

impl Decoded {
    /// The JSON payload, degrading `Empty`/`Unsupported` to `Null`.
    pub fn into_json(self) -> Value {
        match self {
            Decoded::Json(v) => v,
            Decoded::Table(_) | Decoded::Empty | Decoded::Unsupported(_) => Value::Null,
        }
    }

    /// The tabular payload, degrading everything else to no rows.
    pub fn into_rows(self) -> Vec<BTreeMap<String, String>> {
        match self {
            Decoded::Table(rows) => rows,
            _ => Vec::new(),
        }
    }
}

/// Decode a raw body according to its declared content type.
///
/// Only the media type is considered; charset and other parameters are
/// ignored. A body that fails to parse under a recognized content type is a
/// decode error; an unrecognized content type is not.
pub(crate) fn decode(content_type: &str, body: &[u8]) -> Result<Decoded> {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match media_type.as_str() {
        "application/json" => {
            let envelope: Value = serde_json::from_slice(body)?;
            match envelope.get("data") {
                Some(data) => Ok(Decoded::Json(data.clone())),
                None => Ok(Decoded::Empty),
            }
        }
        "text/csv" => {
            let mut reader = csv::Reader::from_reader(body);
            let headers = reader.headers()?.clone();
            let mut rows = Vec::new();
            for record in reader.records() {
                let record = record?;
                let row = headers
                    .iter()
                    .zip(record.iter())
                    .map(|(h, v)| (h.to_string(), v.to_string()))
                    .collect();
                rows.push(row);
            }
            Ok(Decoded::Table(rows))
        }
        _ => {
            tracing::debug!(content_type, "no decoder for content type; body ignored");
            Ok(Decoded::Unsupported(media_type))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_envelope_extraction() {
        let body = br#"{"status":"success","data":{"user_id":"AB1"}}"#;
        let decoded = decode("application/json", body).unwrap();
        assert_eq!(decoded, Decoded::Json(json!({"user_id": "AB1"})));
        assert_eq!(decoded.into_json(), json!({"user_id": "AB1"}));
    }

    #[test]
    fn test_json_missing_data_is_empty() {
        let decoded = decode("application/json", br#"{"status":"success"}"#).unwrap();
        assert_eq!(decoded, Decoded::Empty);
        assert_eq!(decoded.into_json(), Value::Null);
    }

    #[test]
    fn test_json_content_type_parameters_ignored() {
        let body = br#"{"data":[1,2]}"#;
        let decoded = decode("application/json; charset=utf-8", body).unwrap();
        assert_eq!(decoded, Decoded::Json(json!([1, 2])));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(decode("application/json", b"{not json").is_err());
    }

    #[test]
    fn test_csv_rows() {
        let body = b"instrument_token,exchange\n123,NSE\n456,BSE\n";
        let rows = decode("text/csv", body).unwrap().into_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["instrument_token"], "123");
        assert_eq!(rows[0]["exchange"], "NSE");
        assert_eq!(rows[1]["instrument_token"], "456");
        assert_eq!(rows[1]["exchange"], "BSE");
    }

    #[test]
    fn test_unsupported_content_type_is_sentinel_not_error() {
        let decoded = decode("text/html", b"<html></html>").unwrap();
        assert_eq!(decoded, Decoded::Unsupported("text/html".into()));
        assert_eq!(decoded.clone().into_json(), Value::Null);
        assert!(decoded.into_rows().is_empty());
    }
}
