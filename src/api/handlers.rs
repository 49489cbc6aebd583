use crate::api::errors::ApiError;
use crate::chat::ChatCompletionResponse;
use crate::relay::RelayHandler;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::{extract::Extension, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Relays a chat-completion request to the workflow webhook
///
/// The body is taken as raw bytes so that malformed JSON is reported through
/// the same `{ "message": .. }` envelope as every other failure.
///
/// # Arguments
/// * `relay` - Shared relay handler
/// * `body` - Raw request body
///
/// # Returns
/// * `Result<Json<ChatCompletionResponse>, ApiError>` - Normalized answer or error envelope
#[axum::debug_handler]
pub async fn chat_completion(
    Extension(relay): Extension<Arc<RelayHandler>>,
    body: Bytes,
) -> Result<Json<ChatCompletionResponse>, ApiError> {
    relay.handle(&body).await.map(Json).map_err(|e| {
        error!("Error in chat relay route: {}", e);
        ApiError::from(e)
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Keeps unknown routes inside the JSON error envelope.
pub async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not found")
}
