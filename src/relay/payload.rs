use crate::chat::{ChatMessage, ChatRequest, ChatSettings};
use serde::Serialize;

/// Body sent to the workflow webhook
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutboundPayload {
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_settings: Option<ChatSettings>,
}

impl OutboundPayload {
    /// Builds the outbound body from an inbound request
    ///
    /// # Arguments
    /// * `request` - Parsed inbound request, consumed
    /// * `include_chat_settings` - Whether to carry `chatSettings` over
    ///
    /// # Returns
    /// * `OutboundPayload` - Messages in their original order, settings per the flag
    pub fn from_request(request: ChatRequest, include_chat_settings: bool) -> Self {
        OutboundPayload {
            messages: request.messages,
            chat_settings: if include_chat_settings {
                request.chat_settings
            } else {
                None
            },
        }
    }
}
