// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock completion provider for deterministic testing.
//!
//! `MockCompletion` implements `ProviderAdapter` with scripted outcomes,
//! so resolver tests never touch the network.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use folio_core::traits::adapter::PluginAdapter;
use folio_core::traits::provider::ProviderAdapter;
use folio_core::types::{AdapterType, CompletionRequest, CompletionResponse, HealthStatus, TokenUsage};
use folio_core::FolioError;

/// A mock provider that plays back a queue of outcomes.
///
/// Outcomes are popped front to back. When the queue is empty a default
/// "mock response" text is returned. Every call is counted and its prompt
/// recorded, including calls that fail.
pub struct MockCompletion {
    outcomes: Mutex<VecDeque<Result<String, FolioError>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
    latency: Option<Duration>,
}

impl MockCompletion {
    /// Create a new mock provider with an empty outcome queue.
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            latency: None,
        }
    }

    /// Create a mock provider pre-loaded with successful texts.
    pub fn with_texts(texts: Vec<String>) -> Self {
        let mock = Self::new();
        // The mutex is uncontended at construction.
        if let Ok(mut queue) = mock.outcomes.try_lock() {
            queue.extend(texts.into_iter().map(Ok));
        }
        mock
    }

    /// Delay every call by `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Queue a successful completion.
    pub async fn push_text(&self, text: impl Into<String>) {
        self.outcomes.lock().await.push_back(Ok(text.into()));
    }

    /// Queue a failure.
    pub async fn push_error(&self, error: FolioError) {
        self.outcomes.lock().await.push_back(Err(error));
    }

    /// Number of `complete` calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in call order.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockCompletion {
    fn name(&self) -> &str {
        "mock-completion"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, FolioError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl ProviderAdapter for MockCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, FolioError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().await.push(request.prompt.clone());

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let outcome = self
            .outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok("mock response".to_string()));

        outcome.map(|text| CompletionResponse {
            text,
            model: request.model,
            finish_reason: Some("STOP".to_string()),
            usage: Some(TokenUsage {
                prompt_tokens: 10,
                output_tokens: 20,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: "test-model".to_string(),
            prompt: prompt.to_string(),
            max_output_tokens: None,
        }
    }

    #[tokio::test]
    async fn default_response_when_queue_empty() {
        let provider = MockCompletion::new();
        let resp = provider.complete(request("hi")).await.unwrap();
        assert_eq!(resp.text, "mock response");
        assert_eq!(resp.model, "test-model");
    }

    #[tokio::test]
    async fn outcomes_play_back_in_order() {
        let provider = MockCompletion::with_texts(vec!["first".to_string()]);
        provider
            .push_error(FolioError::RateLimited {
                message: "quota".into(),
            })
            .await;

        assert_eq!(provider.complete(request("a")).await.unwrap().text, "first");
        let err = provider.complete(request("b")).await.err().unwrap();
        assert!(err.is_rate_limited());
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.prompts().await, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn latency_delays_the_answer() {
        let provider = MockCompletion::new().with_latency(Duration::from_secs(3));
        let start = tokio::time::Instant::now();
        provider.complete(request("slow")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(3));
    }
}
