//! Response shapes for the control service's duck-typed JSON bodies
//!
//! The service sometimes answers with a structured payload, sometimes with a
//! bare acknowledgment, and on failure may or may not include an `error`
//! field. Everything is normalized here into typed results so the HTTP layer
//! never probes fields ad hoc.

use std::collections::BTreeMap;

use serde::Deserialize;

use warden_core::prelude::*;

/// Successful upload acknowledgment: `{ "filename": "x.jar" }`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UploadAck {
    pub filename: String,
}

/// Optional structured error body: `{ "error": "..." }`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Extract the service-provided error message from a failure body.
///
/// Falls back to `fallback` when the body is not JSON or carries no
/// `error` field.
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Parse an upload acknowledgment body.
pub fn parse_upload_ack(body: &str) -> Result<UploadAck> {
    serde_json::from_str(body)
        .map_err(|e| Error::remote(format!("Malformed upload acknowledgment: {e}")))
}

/// Parse a listing body: an ordered JSON array of filename strings.
pub fn parse_listing(body: &str) -> Result<Vec<String>> {
    serde_json::from_str(body).map_err(|e| Error::remote(format!("Malformed file listing: {e}")))
}

/// Parse the server properties body: a flat string-to-string object.
///
/// A BTreeMap gives the editor a stable iteration order across loads.
pub fn parse_properties(body: &str) -> Result<BTreeMap<String, String>> {
    serde_json::from_str(body)
        .map_err(|e| Error::remote(format!("Malformed server properties: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_structured_body() {
        let msg = error_message(r#"{"error":"disk full"}"#, "fallback");
        assert_eq!(msg, "disk full");
    }

    #[test]
    fn test_error_message_fallback_on_plain_body() {
        assert_eq!(error_message("Internal Server Error", "fallback"), "fallback");
        assert_eq!(error_message("", "fallback"), "fallback");
        // JSON without an error field also falls back
        assert_eq!(error_message(r#"{"status":"bad"}"#, "fallback"), "fallback");
    }

    #[test]
    fn test_error_message_ignores_empty_error_field() {
        assert_eq!(error_message(r#"{"error":""}"#, "fallback"), "fallback");
    }

    #[test]
    fn test_parse_upload_ack() {
        let ack = parse_upload_ack(r#"{"filename":"x.jar"}"#).unwrap();
        assert_eq!(ack.filename, "x.jar");

        assert!(parse_upload_ack(r#"{"ok":true}"#).is_err());
    }

    #[test]
    fn test_parse_listing_preserves_order() {
        let listing = parse_listing(r#"["b.jar","a.jar","c.zip"]"#).unwrap();
        assert_eq!(listing, vec!["b.jar", "a.jar", "c.zip"]);
    }

    #[test]
    fn test_parse_properties_flat_map() {
        let props = parse_properties(r#"{"motd":"hi","max-players":"20"}"#).unwrap();
        assert_eq!(props.get("motd").map(String::as_str), Some("hi"));
        assert_eq!(props.get("max-players").map(String::as_str), Some("20"));

        // Nested values are not a flat string map
        assert!(parse_properties(r#"{"a":{"b":1}}"#).is_err());
    }
}
