use super::{OutboundPayload, UpstreamResult, WebhookClient};
use crate::chat::{ChatCompletionResponse, ChatRequest};
use crate::config::RelayConfig;
use crate::constants::WEBHOOK_URL_ENV;
use crate::errors::RelayError;
use crate::profile::{ProfileResolver, StaticProfileResolver};
use crate::utils::{extract_error_text, truncate_excerpt};
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};
use url::Url;
use uuid::Uuid;

/// Forwards one chat request to the workflow webhook and normalizes the reply.
#[derive(Debug, Clone)]
pub struct RelayHandler {
    config: Arc<RelayConfig>,
    profiles: Arc<dyn ProfileResolver>,
    client: WebhookClient,
}

impl RelayHandler {
    /// Creates a handler with an explicit credential collaborator
    ///
    /// # Arguments
    /// * `config` - Relay configuration
    /// * `profiles` - Credential collaborator consulted when the policy asks for it
    ///
    /// # Returns
    /// * `Result<RelayHandler, RelayError>` - Handler, or `Internal` if the HTTP client cannot be built
    pub fn new(config: RelayConfig, profiles: Arc<dyn ProfileResolver>) -> Result<Self, RelayError> {
        let client = WebhookClient::new(config.request_timeout)?;
        Ok(RelayHandler {
            config: Arc::new(config),
            profiles,
            client,
        })
    }

    /// Creates a handler whose credential comes from `config.api_key`.
    pub fn from_config(config: RelayConfig) -> Result<Self, RelayError> {
        let profiles = Arc::new(StaticProfileResolver::new(config.api_key.clone()));
        Self::new(config, profiles)
    }

    /// Relays a raw request body
    ///
    /// # Arguments
    /// * `body` - Inbound JSON body `{ messages, chatSettings? }`
    ///
    /// # Returns
    /// * `Result<ChatCompletionResponse, RelayError>` - Normalized answer or the terminal failure
    pub async fn handle(&self, body: &[u8]) -> Result<ChatCompletionResponse, RelayError> {
        let request_id = Uuid::new_v4();
        let span = info_span!("relay", %request_id);
        self.relay(body).instrument(span).await
    }

    async fn relay(&self, body: &[u8]) -> Result<ChatCompletionResponse, RelayError> {
        let endpoint = self.resolve_endpoint()?;

        let request: ChatRequest = serde_json::from_slice(body)
            .map_err(|e| RelayError::InvalidRequest(e.to_string()))?;

        let bearer = self.resolve_credential().await?;

        let payload = OutboundPayload::from_request(request, self.config.include_chat_settings);
        info!(
            "Forwarding {} messages to {}",
            payload.messages.len(),
            endpoint.host_str().unwrap_or_default()
        );

        match self.client.send(&endpoint, &payload, bearer.as_deref()).await? {
            UpstreamResult::Success { answer } => Ok(ChatCompletionResponse::from_answer(answer)),
            UpstreamResult::Failure {
                status_code,
                raw_body,
            } => {
                let excerpt =
                    truncate_excerpt(&extract_error_text(&raw_body), self.config.error_excerpt_limit);
                warn!("Webhook returned {}: {}", status_code, excerpt);
                Err(RelayError::Workflow {
                    status: status_code,
                    excerpt,
                })
            }
        }
    }

    /// Reads the webhook URL from configuration. Runs on every request.
    fn resolve_endpoint(&self) -> Result<Url, RelayError> {
        let raw = match self.config.webhook_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => return Err(RelayError::WebhookNotConfigured(WEBHOOK_URL_ENV)),
        };

        let url = Url::parse(raw).map_err(|e| RelayError::WebhookInvalid {
            setting: WEBHOOK_URL_ENV,
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(RelayError::WebhookInvalid {
                setting: WEBHOOK_URL_ENV,
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }

    /// Returns the key to forward, if the credential policy forwards one.
    async fn resolve_credential(&self) -> Result<Option<String>, RelayError> {
        let policy = self.config.credentials;
        if !policy.resolves_key() {
            return Ok(None);
        }

        let profile = self.profiles.resolve_profile().await?;
        let key = self
            .profiles
            .validate_api_key(profile.api_key.as_deref(), &self.config.provider_name)?;

        Ok(policy.forwards_key().then_some(key))
    }
}
