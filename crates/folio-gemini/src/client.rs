// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! Provides [`GeminiClient`] which handles request construction,
//! authentication, error classification, and retry of server-side errors.

use std::time::Duration;

use folio_core::FolioError;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Transport-level ceiling; the assistant applies its own, shorter bound.
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for Gemini API communication.
///
/// Rate-limit responses are never retried: they surface as
/// [`FolioError::RateLimited`] straight away. 500 and 503 are retried once.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl GeminiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `api_key` - Gemini API key, sent as `x-goog-api-key`
    /// * `base_url` - API root, e.g. `https://generativelanguage.googleapis.com/v1beta`
    pub fn new(api_key: &str, base_url: impl Into<String>) -> Result<Self, FolioError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| FolioError::Config(format!("invalid API key header value: {e}")))?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| FolioError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_retries: 1,
            retry_delay: Duration::from_secs(1),
        })
    }

    /// Overrides the pause between retries.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Endpoint URL for `model`.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }

    /// Sends a `generateContent` request and returns the parsed response.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, FolioError> {
        let url = self.endpoint(model);
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying completion request after server error");
                tokio::time::sleep(self.retry_delay).await;
            }

            let response = self
                .client
                .post(&url)
                .json(request)
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            debug!(status = %status, attempt, "completion response received");

            if status.is_success() {
                let body = response.text().await.map_err(transport_error)?;
                return serde_json::from_str(&body).map_err(|e| FolioError::Provider {
                    message: format!("failed to parse API response: {e}"),
                    source: Some(Box::new(e)),
                });
            }

            let body = response.text().await.unwrap_or_default();
            let error = classify_error(status, &body);

            if is_retryable(status) && attempt < self.max_retries {
                warn!(status = %status, "server error, will retry");
                last_error = Some(error);
                continue;
            }
            return Err(error);
        }

        Err(last_error.unwrap_or_else(|| FolioError::Provider {
            message: "completion request failed after retries".into(),
            source: None,
        }))
    }
}

/// Maps a non-success response to a typed error.
fn classify_error(status: StatusCode, body: &str) -> FolioError {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(api_err) if api_err.error.is_rate_limit() || status == StatusCode::TOO_MANY_REQUESTS => {
            FolioError::RateLimited {
                message: api_err.error.message,
            }
        }
        Ok(api_err) => FolioError::Provider {
            message: format!(
                "Gemini API error ({} {}): {}",
                status.as_u16(),
                api_err.error.status,
                api_err.error.message
            ),
            source: None,
        },
        Err(_) if status == StatusCode::TOO_MANY_REQUESTS => FolioError::RateLimited {
            message: format!("API returned {status}"),
        },
        Err(_) => FolioError::Provider {
            message: format!("API returned {status}: {body}"),
            source: None,
        },
    }
}

fn transport_error(e: reqwest::Error) -> FolioError {
    if e.is_timeout() {
        return FolioError::Timeout {
            duration: HTTP_TIMEOUT,
        };
    }
    FolioError::Provider {
        message: format!("HTTP request failed: {e}"),
        source: Some(Box::new(e)),
    }
}

/// Server-side failures worth one more try.
fn is_retryable(status: StatusCode) -> bool {
    matches!(status.as_u16(), 500 | 503)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "gemini-2.0-flash-exp";

    fn test_client(base_url: &str) -> GeminiClient {
        GeminiClient::new("test-api-key", base_url)
            .unwrap()
            .with_retry_delay(Duration::from_millis(10))
    }

    fn model_path() -> String {
        format!("/models/{MODEL}:generateContent")
    }

    fn success_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5},
            "modelVersion": MODEL
        })
    }

    #[tokio::test]
    async fn generate_content_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(model_path()))
            .and(header("x-goog-api-key", "test-api-key"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{"parts": [{"text": "Hello"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Hi there!")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let request = GenerateContentRequest::from_prompt("Hello", None);
        let result = client.generate_content(MODEL, &request).await.unwrap();

        assert_eq!(result.text().as_deref(), Some("Hi there!"));
    }

    #[tokio::test]
    async fn status_429_is_rate_limited_without_retry() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(model_path()))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let request = GenerateContentRequest::from_prompt("Hello", None);
        let err = client.generate_content(MODEL, &request).await.unwrap_err();
        assert!(err.is_rate_limited(), "got: {err}");
    }

    #[tokio::test]
    async fn bare_429_without_json_is_rate_limited() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(model_path()))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let request = GenerateContentRequest::from_prompt("Hello", None);
        let err = client.generate_content(MODEL, &request).await.unwrap_err();
        assert!(err.is_rate_limited());
    }

    #[tokio::test]
    async fn invalid_key_is_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(model_path()))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let request = GenerateContentRequest::from_prompt("Hello", None);
        let err = client.generate_content(MODEL, &request).await.unwrap_err();
        assert!(!err.is_rate_limited());
        assert!(err.to_string().contains("INVALID_ARGUMENT"), "got: {err}");
    }

    #[tokio::test]
    async fn retries_once_on_503() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(model_path()))
            .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
                "error": {"code": 503, "message": "overloaded", "status": "UNAVAILABLE"}
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path(model_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("After retry")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let request = GenerateContentRequest::from_prompt("Hello", None);
        let result = client.generate_content(MODEL, &request).await.unwrap();
        assert_eq!(result.text().as_deref(), Some("After retry"));
    }

    #[tokio::test]
    async fn exhausts_retries_on_500() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(model_path()))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(2)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let request = GenerateContentRequest::from_prompt("Hello", None);
        let err = client.generate_content(MODEL, &request).await.unwrap_err();
        assert!(err.to_string().contains("500"), "got: {err}");
    }

    #[tokio::test]
    async fn malformed_success_body_is_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(model_path()))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let request = GenerateContentRequest::from_prompt("Hello", None);
        let err = client.generate_content(MODEL, &request).await.unwrap_err();
        assert!(matches!(err, FolioError::Provider { .. }));
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client = GeminiClient::new("k", "http://localhost:1234/v1beta/").unwrap();
        assert_eq!(
            client.endpoint("m"),
            "http://localhost:1234/v1beta/models/m:generateContent"
        );
    }
}
