use super::OutboundPayload;
use crate::errors::RelayError;
use crate::utils::truncate_excerpt;
use reqwest::redirect::Policy;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Characters of an unexpected success body kept in server-side logs
const LOGGED_BODY_LIMIT: usize = 1000;

/// Outcome of a completed outbound call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamResult {
    Success { answer: String },
    Failure { status_code: u16, raw_body: String },
}

#[derive(Deserialize)]
struct WorkflowAnswer {
    answer: String,
}

/// HTTP client for the workflow webhook
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
}

impl WebhookClient {
    /// Creates a client whose calls are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(timeout)
            // A redirect would turn the POST into a second call.
            .redirect(Policy::none())
            .build()
            .map_err(|e| RelayError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(WebhookClient { client })
    }

    /// Posts the payload to the webhook once and classifies the reply
    ///
    /// # Arguments
    /// * `endpoint` - Webhook URL
    /// * `payload` - JSON body to send
    /// * `bearer` - Credential to send as `Authorization: Bearer`, if any
    ///
    /// # Returns
    /// * `Result<UpstreamResult, RelayError>` - `Transport` when the call itself failed,
    ///   `UnexpectedResponse` when a success reply carries no string `answer`
    pub async fn send(
        &self,
        endpoint: &Url,
        payload: &OutboundPayload,
        bearer: Option<&str>,
    ) -> Result<UpstreamResult, RelayError> {
        let mut request = self.client.post(endpoint.clone()).json(payload);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let res = request.send().await?;
        let status = res.status();
        // Always read as text first, error bodies are not guaranteed to be JSON.
        let raw_body = res.text().await?;
        debug!("Webhook replied {} with {} bytes", status, raw_body.len());

        if !status.is_success() {
            return Ok(UpstreamResult::Failure {
                status_code: status.as_u16(),
                raw_body,
            });
        }

        match serde_json::from_str::<WorkflowAnswer>(&raw_body) {
            Ok(parsed) => Ok(UpstreamResult::Success {
                answer: parsed.answer,
            }),
            Err(e) => {
                error!(
                    "Webhook success body has no usable answer ({}): {}",
                    e,
                    truncate_excerpt(&raw_body, LOGGED_BODY_LIMIT)
                );
                Err(RelayError::UnexpectedResponse)
            }
        }
    }
}
