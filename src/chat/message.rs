use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role of a conversation participant
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Represents a chat message with a role and content
///
/// Fields other than `role` and `content` are kept in `extra` so a message
/// leaves the relay exactly as it arrived.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: Role,
    /// Content/text of the message
    pub content: String,
    /// Any additional fields sent by the client
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatMessage {
    /// Creates a new chat message without extra fields
    ///
    /// # Arguments
    /// * `role` - Role of the message sender
    /// * `content` - Content/text of the message
    ///
    /// # Returns
    /// * `ChatMessage` - New chat message instance
    pub fn new(role: Role, content: &str) -> Self {
        ChatMessage {
            role,
            content: content.to_string(),
            extra: Map::new(),
        }
    }
}

/// Opaque model settings (model name, temperature, ...). Never interpreted.
pub type ChatSettings = Value;

/// Inbound chat-completion request body
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Conversation history, oldest first
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub chat_settings: Option<ChatSettings>,
}
