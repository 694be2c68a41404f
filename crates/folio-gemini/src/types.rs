// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini `generateContent` request and response types.

use serde::{Deserialize, Serialize};

// --- Request types ---

/// A request to `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents. The assistant always sends a single user turn.
    pub contents: Vec<Content>,

    /// Optional generation parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Builds a single-turn request carrying `prompt` as one text part.
    pub fn from_prompt(prompt: &str, max_output_tokens: Option<u32>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: max_output_tokens.map(|max| GenerationConfig {
                max_output_tokens: Some(max),
            }),
        }
    }
}

/// A turn in the request or a candidate's content in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A text part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Generation parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

// --- Response types ---

/// A successful `generateContent` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Finish reason of the first candidate.
    pub fn finish_reason(&self) -> Option<String> {
        self.candidates.first().and_then(|c| c.finish_reason.clone())
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token accounting.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

// --- Error types ---

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    /// Canonical status such as `RESOURCE_EXHAUSTED` or `INVALID_ARGUMENT`.
    #[serde(default)]
    pub status: String,
}

impl ApiErrorDetail {
    /// True when the service is rejecting calls for quota or rate reasons.
    pub fn is_rate_limit(&self) -> bool {
        self.code == 429 || self.status == "RESOURCE_EXHAUSTED"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let req = GenerateContentRequest::from_prompt("hello", Some(128));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 128);
    }

    #[test]
    fn request_omits_generation_config_when_unset() {
        let req = GenerateContentRequest::from_prompt("hello", None);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn response_text_joins_parts() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hi "}, {"text": "there"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 3}
        });
        let resp: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.text().as_deref(), Some("Hi there"));
        assert_eq!(resp.finish_reason().as_deref(), Some("STOP"));
        assert_eq!(resp.usage_metadata.unwrap().prompt_token_count, 12);
    }

    #[test]
    fn blocked_response_has_no_text() {
        let body = serde_json::json!({
            "candidates": [{"finishReason": "SAFETY"}]
        });
        let resp: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert!(resp.text().is_none());
    }

    #[test]
    fn resource_exhausted_counts_as_rate_limit() {
        let body = serde_json::json!({
            "error": {"code": 400, "message": "quota", "status": "RESOURCE_EXHAUSTED"}
        });
        let err: ApiErrorResponse = serde_json::from_value(body).unwrap();
        assert!(err.error.is_rate_limit());

        let other = ApiErrorDetail {
            code: 400,
            message: "bad".into(),
            status: "INVALID_ARGUMENT".into(),
        };
        assert!(!other.is_rate_limit());
    }
}
