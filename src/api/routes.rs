//! API routes configuration module

use crate::api::handlers::{chat_completion, health, not_found};
use crate::constants::{CHAT_COMPLETIONS_ROUTE, CHAT_ROUTE};
use crate::relay::RelayHandler;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `relay` - Relay handler shared across requests
///
/// # Returns
/// * `Router` - Configured router with all API endpoints
pub fn app(relay: RelayHandler) -> Router {
    Router::new()
        .route(CHAT_ROUTE, post(chat_completion))
        .route(CHAT_COMPLETIONS_ROUTE, post(chat_completion))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(Extension(Arc::new(relay)))
}
