//! Items API handler
//!
//! A demonstration items endpoint: GET returns the sample catalog, POST
//! echoes the created item back. The catalog is rebuilt on every
//! invocation, so created items are never visible to later requests.

use edge_function_sdk::prelude::*;
use serde_json::Number;

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// Kept as a JSON number so integral values round-trip unchanged.
    pub value: Number,
}

/// Methods this API answers. Anything else gets a 405.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SupportedMethod {
    Get,
    Post,
}

impl SupportedMethod {
    /// Exact match: HTTP methods are case-sensitive on the wire, so
    /// `get` is unsupported while `GET` is not.
    fn parse(method: &str) -> Option<Self> {
        match method {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            _ => None,
        }
    }
}

/// Fallbacks applied to optional fields of a create payload.
struct CreateDefaults {
    name: &'static str,
    value: i64,
}

const CREATE_DEFAULTS: CreateDefaults = CreateDefaults {
    name: "Unnamed Item",
    value: 0,
};

/// Origin allowed to call this API from a browser.
const ALLOWED_ORIGIN: &str = "*";

/// The sample catalog, rebuilt fresh for each invocation.
fn seed_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            name: "Sample Item 1".to_string(),
            value: Number::from(100),
        },
        Item {
            id: 2,
            name: "Sample Item 2".to_string(),
            value: Number::from(200),
        },
    ]
}

/// Dispatch an invocation to the matching operation.
///
/// Total: every input, including malformed ones, comes back as a
/// well-formed response.
pub fn handle(req: Request) -> Response {
    let response = match SupportedMethod::parse(req.method()) {
        Some(SupportedMethod::Get) => list_items(),
        Some(SupportedMethod::Post) => create_item(&req),
        None => Response::method_not_allowed(),
    };
    response.with_cors(ALLOWED_ORIGIN)
}

fn list_items() -> Response {
    Response::ok(json!({
        "message": "Items retrieved successfully",
        "items": seed_items(),
    }))
}

fn create_item(req: &Request) -> Response {
    let payload: JsonValue = match req.json() {
        Ok(value) => value,
        Err(_) => return Response::bad_request("Invalid JSON format"),
    };

    // Field extraction is optional-typed: a missing or wrongly-typed
    // field falls back to its default, it is never a fault.
    let seed = seed_items();
    let item = Item {
        id: seed.len() as u32 + 1,
        name: payload
            .get("name")
            .and_then(JsonValue::as_str)
            .unwrap_or(CREATE_DEFAULTS.name)
            .to_string(),
        value: payload
            .get("value")
            .and_then(JsonValue::as_number)
            .cloned()
            .unwrap_or_else(|| Number::from(CREATE_DEFAULTS.value)),
    };

    Response::created(json!({
        "message": "Item created successfully",
        "item": item,
    }))
}
