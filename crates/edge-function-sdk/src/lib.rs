//! Edge Function SDK - Types and utilities for writing edge function handlers
//!
//! This crate provides the core types that handlers use to talk to the
//! invoking platform: the invocation event envelope, the HTTP-style
//! response, the handler error taxonomy, and the framed stdin/stdout
//! transport the serve loop runs on.

pub mod error;
pub mod ipc;
pub mod request;
pub mod response;

pub mod prelude {
    //! Common imports for edge function handlers
    pub use crate::error::HandlerError;
    pub use crate::ipc::{read_request, send_response};
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use error::HandlerError;
pub use request::Request;
pub use response::Response;
