//! Invocation result representation for handlers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The response a handler returns to the platform.
///
/// On the wire this is `{statusCode, headers, body}` where `body` is an
/// already-serialized string (JSON for every constructor except `text`).
///
/// # Quick Reference
///
/// | Method | Status | Use Case |
/// |--------|--------|----------|
/// | `ok(body)` | 200 | Successful GET response |
/// | `created(body)` | 201 | Successful POST (resource created) |
/// | `bad_request(msg)` | 400 | Invalid input |
/// | `not_found()` | 404 | Resource not found |
/// | `method_not_allowed()` | 405 | Unsupported HTTP method |
/// | `internal_error(msg)` | 500 | Handler fault |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP status code
    pub status_code: u16,

    /// Response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Serialized response body
    #[serde(default)]
    pub body: String,
}

impl Response {
    /// Create a new response with the given status code and an empty body.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    /// Create a JSON response with a custom status code.
    ///
    /// # Example
    /// ```ignore
    /// Response::json(201, json!({"id": 3}))
    /// Response::json(400, json!({"error": "Invalid input"}))
    /// ```
    pub fn json<T: Serialize>(status_code: u16, body: T) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            status_code,
            headers,
            body: serde_json::to_string(&body).unwrap_or_default(),
        }
    }

    /// Create a 200 OK response with JSON body.
    ///
    /// # Example
    /// ```ignore
    /// Response::ok(json!({"message": "Success"}))
    /// Response::ok(my_struct) // If my_struct implements Serialize
    /// ```
    pub fn ok<T: Serialize>(body: T) -> Self {
        Self::json(200, body)
    }

    /// Create a 201 Created response with JSON body.
    pub fn created<T: Serialize>(body: T) -> Self {
        Self::json(201, body)
    }

    /// Create a plain text response.
    pub fn text(status_code: u16, body: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            "text/plain; charset=utf-8".to_string(),
        );

        Self {
            status_code,
            headers,
            body: body.into(),
        }
    }

    /// Create a 400 Bad Request response.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::json(400, serde_json::json!({"error": message.into()}))
    }

    /// Create a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::json(404, serde_json::json!({"error": "Not Found"}))
    }

    /// Create a 405 Method Not Allowed response.
    pub fn method_not_allowed() -> Self {
        Self::json(405, serde_json::json!({"error": "Method not allowed"}))
    }

    /// Create a 500 Internal Server Error response.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::json(500, serde_json::json!({"error": message.into()}))
    }

    /// Add a header to the response (builder pattern).
    ///
    /// # Example
    /// ```ignore
    /// Response::ok(json!({"data": "value"}))
    ///     .with_header("Cache-Control", "max-age=3600")
    /// ```
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Allow cross-origin requests from the given origin.
    ///
    /// # Example
    /// ```ignore
    /// Response::ok(data).with_cors("*")
    /// Response::ok(data).with_cors("https://myapp.com")
    /// ```
    pub fn with_cors(self, origin: impl Into<String>) -> Self {
        self.with_header("Access-Control-Allow-Origin", origin)
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_sets_status_and_content_type() {
        let response = Response::json(201, json!({"id": 3}));
        assert_eq!(response.status_code, 201);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(response.body, r#"{"id":3}"#);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(Response::ok(json!({"x": 1}))).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert!(value["headers"].is_object());
        assert!(value["body"].is_string());
    }

    #[test]
    fn error_helpers_wrap_the_message() {
        let response = Response::bad_request("Invalid JSON format");
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, r#"{"error":"Invalid JSON format"}"#);

        assert_eq!(Response::not_found().status_code, 404);
        assert_eq!(
            Response::method_not_allowed().body,
            r#"{"error":"Method not allowed"}"#
        );
        assert_eq!(Response::internal_error("boom").status_code, 500);
    }

    #[test]
    fn with_cors_sets_the_origin_header() {
        let response = Response::ok(json!({})).with_cors("*");
        assert_eq!(
            response.headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("*")
        );
    }

    #[test]
    fn text_uses_a_plain_content_type() {
        let response = Response::text(200, "pong");
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("text/plain; charset=utf-8")
        );
        assert_eq!(response.body, "pong");
    }
}
