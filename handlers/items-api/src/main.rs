//! Items API serve loop
//!
//! Reads framed invocation events from stdin, dispatches them to the
//! handler, and writes framed responses to stdout. Stdout belongs to the
//! transport, so all logging goes to stderr.

mod handler;

use anyhow::Result;
use edge_function_sdk::ipc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    init_tracing()?;

    tracing::info!("items-api handler ready");

    loop {
        let req = match ipc::read_request() {
            Ok(req) => req,
            Err(e) => {
                tracing::error!("Failed to read request: {}", e);
                break;
            }
        };

        tracing::debug!(
            request_id = req.request_id().unwrap_or("-"),
            method = req.method(),
            "Incoming invocation"
        );

        let response = handler::handle(req);
        if let Err(e) = ipc::send_response(response) {
            tracing::error!("Failed to send response: {}", e);
        }
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,items_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
