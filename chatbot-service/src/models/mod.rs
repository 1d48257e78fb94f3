//! Request and response types for the chatbot HTTP API.

use serde::{Deserialize, Serialize};

/// A fixed suggested question offered to users as a clickable shortcut.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PresetPrompt {
    pub id: u32,
    pub question: &'static str,
    pub category: &'static str,
}

/// Body of `POST /api/chatbot/ask`.
///
/// `question` defaults to empty so a `{}` body reaches the emptiness check
/// instead of being rejected by deserialization.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

/// Uniform `{success, answer|error}` shape returned by the ask endpoint.
///
/// Exactly one of `answer`/`error` is present; the other is omitted from
/// the serialized JSON.
#[derive(Debug, Serialize)]
pub struct AnswerEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnswerEnvelope {
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            success: true,
            answer: Some(text.into()),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            answer: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PromptsResponse {
    pub success: bool,
    pub prompts: &'static [PresetPrompt],
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
}
