//! Forwarding of chat requests to the workflow webhook.
//!
//! One inbound request maps to at most one outbound call. Nothing is shared
//! between calls apart from the immutable configuration and the HTTP client.

mod handler;
mod payload;
mod webhook_client;

pub use handler::*;
pub use payload::*;
pub use webhook_client::*;
