// SPDX-FileCopyrightText: 2026 RevShare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Messages API request/response types and generator payloads.

use serde::{Deserialize, Serialize};

use revshare_core::types::CompanyResearch;

// --- Request types ---

/// A request to the Anthropic Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest {
    /// Model identifier (e.g., "claude-sonnet-4-20250514").
    pub model: String,

    /// Conversation messages.
    pub messages: Vec<ApiMessage>,

    /// System prompt (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Maximum tokens to generate.
    pub max_tokens: u32,

    /// Whether to stream the response. Always false here.
    pub stream: bool,
}

/// A single message in the Anthropic conversation format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Role: "user" or "assistant".
    pub role: String,

    /// Plain text content.
    pub content: String,
}

impl ApiMessage {
    /// A single user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

// --- Response types ---

/// A full response from the Anthropic Messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    /// Response ID.
    pub id: String,
    /// Content blocks in the response.
    pub content: Vec<ResponseContentBlock>,
    /// Model that generated the response.
    pub model: String,
    /// Reason the generation stopped.
    pub stop_reason: Option<String>,
    /// Token usage statistics.
    pub usage: ApiUsage,
}

impl MessageResponse {
    /// Concatenated text of all text blocks.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ResponseContentBlock::Text { text } => Some(text.as_str()),
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// A content block in a response.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum ResponseContentBlock {
    /// Text content block.
    #[serde(rename = "text")]
    Text { text: String },
}

/// Token usage statistics from the API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiUsage {
    /// Number of input tokens consumed.
    pub input_tokens: u32,
    /// Number of output tokens generated.
    pub output_tokens: u32,
}

/// Error envelope returned by the API on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(rename = "type")]
    pub type_: String,
    pub message: String,
}

// --- Generator payloads (model output JSON) ---

/// Payload the model returns for a booking-content request: the
/// research fields at top level plus the hook and value proposition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingContentPayload {
    #[serde(flatten)]
    pub research: CompanyResearch,
    pub personalized_hook: String,
    pub value_proposition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_request_serializes_without_system_when_none() {
        let request = MessageRequest {
            model: "claude-sonnet-4-20250514".into(),
            messages: vec![ApiMessage::user("hello")],
            system: None,
            max_tokens: 1024,
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("system").is_none());
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn response_text_joins_text_blocks() {
        let json = serde_json::json!({
            "id": "msg_1",
            "content": [
                {"type": "text", "text": "Hello, "},
                {"type": "text", "text": "world"}
            ],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 1, "output_tokens": 2}
        });
        let response: MessageResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.text(), "Hello, world");
    }

    #[test]
    fn booking_content_payload_flattens_research() {
        let json = serde_json::json!({
            "companyName": "Acme",
            "companyDescription": "Widgets",
            "targetAudience": {"painPoints": ["p1"], "characteristics": ["c1"]},
            "technographicSignals": ["t1"],
            "behavioralIndicators": ["b1"],
            "sampleEmails": [{"subject": "s", "body": "b", "angle": "a"}],
            "personalizedHook": "We can help.",
            "valueProposition": "You only pay on close."
        });
        let payload: BookingContentPayload = serde_json::from_value(json).unwrap();
        assert_eq!(payload.research.company_name, "Acme");
        assert_eq!(payload.research.sample_emails.len(), 1);
        assert_eq!(payload.personalized_hook, "We can help.");
    }
}
