//! IPC protocol for communicating with the invoking platform.
//!
//! Handlers talk to the platform over a simple length-prefixed JSON
//! protocol: each frame is a 4-byte big-endian length followed by that
//! many bytes of JSON. Events arrive on stdin, responses leave on stdout,
//! so stdout must never be used for anything else (logs go to stderr).
//!
//! # Handler Macros
//!
//! ## `handler_loop!` - Total handlers
//! ```ignore
//! fn handle(req: Request) -> Response {
//!     Response::ok(json!({"message": "Hello"}))
//! }
//! handler_loop!(handle);
//! ```
//!
//! ## `handler_loop_result!` - Handlers returning Result
//! ```ignore
//! fn handle(req: Request) -> Result<Response, HandlerError> {
//!     let data: MyInput = req.json()?;
//!     Ok(Response::ok(data))
//! }
//! handler_loop_result!(handle);
//! ```

use crate::{HandlerError, Request, Response};
use std::io::{self, Read, Write};

/// Read one length-prefixed frame from the reader.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<Vec<u8>, HandlerError> {
    // Length prefix: 4 bytes, big-endian
    let mut len_buf = [0u8; 4];
    reader
        .read_exact(&mut len_buf)
        .map_err(|e| HandlerError::Ipc(format!("Failed to read length prefix: {}", e)))?;

    let len = u32::from_be_bytes(len_buf) as usize;

    let mut payload = vec![0u8; len];
    reader
        .read_exact(&mut payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to read payload: {}", e)))?;

    Ok(payload)
}

/// Write one length-prefixed frame to the writer.
pub fn write_frame<W: Write>(writer: &mut W, payload: &[u8]) -> Result<(), HandlerError> {
    let len = payload.len() as u32;
    writer
        .write_all(&len.to_be_bytes())
        .map_err(|e| HandlerError::Ipc(format!("Failed to write length: {}", e)))?;

    writer
        .write_all(payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to write payload: {}", e)))?;

    writer
        .flush()
        .map_err(|e| HandlerError::Ipc(format!("Failed to flush: {}", e)))?;

    Ok(())
}

/// Read an invocation event from stdin (sent by the platform)
pub fn read_request() -> Result<Request, HandlerError> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();

    let payload = read_frame(&mut handle)?;
    serde_json::from_slice(&payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to parse request: {}", e)))
}

/// Send a response to stdout (received by the platform)
pub fn send_response(response: Response) -> Result<(), HandlerError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let payload = serde_json::to_vec(&response)
        .map_err(|e| HandlerError::Ipc(format!("Failed to serialize response: {}", e)))?;

    write_frame(&mut handle, &payload)
}

/// Convenience macro for running a total handler loop.
///
/// The handler function takes a `Request` and returns a `Response`.
///
/// # Example
/// ```ignore
/// use edge_function_sdk::prelude::*;
///
/// fn handle(req: Request) -> Response {
///     Response::ok(json!({"method": req.method()}))
/// }
///
/// handler_loop!(handle);
/// ```
#[macro_export]
macro_rules! handler_loop {
    ($handler:expr) => {
        fn main() {
            loop {
                match $crate::ipc::read_request() {
                    Ok(req) => {
                        let response = $handler(req);
                        if let Err(e) = $crate::ipc::send_response(response) {
                            eprintln!("Failed to send response: {}", e);
                        }
                    }
                    Err(e) => {
                        eprintln!("Failed to read request: {}", e);
                        break;
                    }
                }
            }
        }
    };
}

/// Convenience macro for running a handler that returns `Result<Response, HandlerError>`.
///
/// Errors are converted to HTTP responses using `HandlerError::to_response()`.
///
/// # Example
/// ```ignore
/// use edge_function_sdk::prelude::*;
///
/// fn handle(req: Request) -> Result<Response, HandlerError> {
///     let data: MyInput = req.json()?;  // ? works naturally
///     Ok(Response::ok(data))
/// }
///
/// handler_loop_result!(handle);
/// ```
#[macro_export]
macro_rules! handler_loop_result {
    ($handler:expr) => {
        fn main() {
            loop {
                match $crate::ipc::read_request() {
                    Ok(req) => {
                        let response = match $handler(req) {
                            Ok(resp) => resp,
                            Err(e) => e.to_response(),
                        };
                        if let Err(e) = $crate::ipc::send_response(response) {
                            eprintln!("Failed to send response: {}", e);
                        }
                    }
                    Err(e) => {
                        eprintln!("Failed to read request: {}", e);
                        break;
                    }
                }
            }
        }
    };
}
