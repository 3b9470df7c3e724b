//! Chat completion wire types.

use serde::{Deserialize, Serialize};

use crate::prompt;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single role-tagged message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body for the chat completions endpoint.
///
/// The model is selected by the deployment segment of the URL, so it is not
/// part of the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl ChatRequest {
    /// Builds the system + user request with the fixed sampling parameters.
    pub fn for_query(text: &str) -> Self {
        Self {
            messages: vec![
                ChatMessage::system(prompt::SYSTEM_INSTRUCTION),
                ChatMessage::user(text),
            ],
            temperature: prompt::TEMPERATURE,
            max_tokens: prompt::MAX_TOKENS,
            top_p: prompt::TOP_P,
            frequency_penalty: prompt::FREQUENCY_PENALTY,
            presence_penalty: prompt::PRESENCE_PENALTY,
        }
    }
}

/// Response body of the chat completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

/// Assistant message of a choice. Content is null when filtered.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, if any choice was returned.
    pub fn first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
    }
}
