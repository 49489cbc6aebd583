use super::Role;
use serde::Serialize;

/// Normalized success envelope returned to the chat client
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AssistantMessage {
    pub role: Role,
    pub content: String,
}

impl ChatCompletionResponse {
    /// Wraps a workflow answer into a single assistant choice.
    pub fn from_answer(answer: String) -> Self {
        ChatCompletionResponse {
            choices: vec![Choice {
                message: AssistantMessage {
                    role: Role::Assistant,
                    content: answer,
                },
            }],
        }
    }
}
