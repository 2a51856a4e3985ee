//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Content, Intent};
use crate::logic::AssistantResponse;

/// Request body for `/ask` and `/api/v1/generate`.
/// The chat page sends `message`; older clients send `question`.
#[derive(Debug, Default, Deserialize)]
pub struct AskIn {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
}

impl AskIn {
    /// Trimmed request text: `message` when non-empty, otherwise `question`.
    pub fn text(&self) -> String {
        let pick = |s: &Option<String>| s.as_deref().map(str::trim).unwrap_or_default().to_string();
        let message = pick(&self.message);
        if message.is_empty() {
            pick(&self.question)
        } else {
            message
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskOut {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorOut {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthOut {
    pub status: String,
    pub message: String,
}

/// Structured result: `{success:false, message}` or
/// `{success:true, intent, content, note}`.
#[derive(Debug, Serialize)]
pub struct GenerateOut {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Convert the internal response to the public DTO.
pub fn to_out(resp: &AssistantResponse) -> GenerateOut {
    match resp {
        AssistantResponse::Clarify { message } => GenerateOut {
            success: false,
            message: Some(message.clone()),
            intent: None,
            content: None,
            note: None,
        },
        AssistantResponse::Generated(g) => GenerateOut {
            success: true,
            message: None,
            intent: Some(g.intent),
            content: Some(g.content.clone()),
            note: Some(g.note.clone()),
        },
    }
}
