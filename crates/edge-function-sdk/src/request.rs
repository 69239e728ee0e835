//! Invocation event representation for handlers

use crate::error::HandlerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An incoming invocation event.
///
/// The platform delivers one event per HTTP request. The HTTP method lives
/// in the nested request context (`requestContext.http.method`); the body,
/// when present, is the raw request body as a string.
///
/// Every field is defaulted so the sparsest event (`{}`) still
/// deserializes; accessors paper over the holes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Request {
    /// Context describing how the request reached the function
    pub request_context: RequestContext,

    /// Request path as received (e.g. "/items")
    pub raw_path: Option<String>,

    /// HTTP headers
    pub headers: HashMap<String, String>,

    /// Query string parameters
    pub query: HashMap<String, String>,

    /// Raw request body, if any
    pub body: Option<String>,
}

/// Trigger metadata attached to an invocation event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContext {
    /// HTTP-level description of the triggering request
    pub http: HttpDescription,

    /// Request ID for tracing
    pub request_id: Option<String>,
}

/// The HTTP portion of the request context
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpDescription {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: Option<String>,

    /// Request path as routed
    pub path: Option<String>,

    /// Client IP address
    pub source_ip: Option<String>,
}

impl Request {
    /// The HTTP method of the invocation, defaulting to `GET` when the
    /// event carries none.
    pub fn method(&self) -> &str {
        self.request_context.http.method.as_deref().unwrap_or("GET")
    }

    /// Check if the request method matches (case-insensitive).
    ///
    /// # Example
    /// ```ignore
    /// if req.is_method("POST") { /* handle POST */ }
    /// ```
    pub fn is_method(&self, method: &str) -> bool {
        self.method().eq_ignore_ascii_case(method)
    }

    /// The request ID from the trigger context, if the platform set one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_context.request_id.as_deref()
    }

    /// Parse the body as JSON into a typed struct. An absent body parses
    /// as the empty JSON object.
    ///
    /// # Example
    /// ```ignore
    /// #[derive(Deserialize)]
    /// struct CreateItem { name: String, value: i64 }
    ///
    /// let item: CreateItem = req.json()?;
    /// ```
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, HandlerError> {
        serde_json::from_str(self.body_or_empty_object())
            .map_err(|e| HandlerError::BadRequest(format!("Invalid JSON: {}", e)))
    }

    /// The raw body, or `"{}"` when the event carries none.
    pub fn body_or_empty_object(&self) -> &str {
        self.body.as_deref().unwrap_or("{}")
    }

    /// Get a header value (case-insensitive lookup).
    ///
    /// # Example
    /// ```ignore
    /// let auth = req.header("Authorization"); // Works with any case
    /// ```
    pub fn header(&self, key: &str) -> Option<&String> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    /// Get a query parameter as a string reference.
    pub fn query_param(&self, key: &str) -> Option<&String> {
        self.query.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_a_full_event() {
        let event = json!({
            "requestContext": {
                "http": {
                    "method": "POST",
                    "path": "/items",
                    "sourceIp": "192.0.2.7"
                },
                "requestId": "req-123"
            },
            "rawPath": "/items",
            "headers": {"Content-Type": "application/json"},
            "query": {"verbose": "1"},
            "body": "{\"name\":\"Widget\"}"
        });

        let req: Request = serde_json::from_value(event).unwrap();
        assert_eq!(req.method(), "POST");
        assert_eq!(req.request_id(), Some("req-123"));
        assert_eq!(req.request_context.http.source_ip.as_deref(), Some("192.0.2.7"));
        assert_eq!(req.raw_path.as_deref(), Some("/items"));
        assert_eq!(req.query_param("verbose").map(String::as_str), Some("1"));
        assert_eq!(req.body.as_deref(), Some("{\"name\":\"Widget\"}"));
    }

    #[test]
    fn sparse_event_defaults_to_get() {
        let req: Request = serde_json::from_str("{}").unwrap();
        assert_eq!(req.method(), "GET");
        assert!(req.is_method("get"));
        assert_eq!(req.request_id(), None);
        assert_eq!(req.body, None);
    }

    #[test]
    fn header_lookup_ignores_case() {
        let mut req = Request::default();
        req.headers
            .insert("Content-Type".to_string(), "application/json".to_string());

        assert_eq!(req.header("content-type").map(String::as_str), Some("application/json"));
        assert_eq!(req.header("CONTENT-TYPE").map(String::as_str), Some("application/json"));
        assert_eq!(req.header("Accept"), None);
    }

    #[test]
    fn json_parses_an_absent_body_as_an_empty_object() {
        let req = Request::default();
        let value: serde_json::Value = req.json().unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn json_rejects_a_malformed_body() {
        let req = Request {
            body: Some("not json".to_string()),
            ..Request::default()
        };
        let err = req.json::<serde_json::Value>().unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
