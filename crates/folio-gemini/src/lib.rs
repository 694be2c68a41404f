// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini provider adapter for the Folio assistant.
//!
//! This crate implements [`ProviderAdapter`] on top of the Generative
//! Language API's `generateContent` endpoint.

pub mod client;
pub mod types;

use async_trait::async_trait;
use folio_config::model::GeminiConfig;
use folio_core::error::FolioError;
use folio_core::traits::{PluginAdapter, ProviderAdapter};
use folio_core::types::{
    AdapterType, CompletionRequest, CompletionResponse, HealthStatus, TokenUsage,
};
use tracing::{debug, info};

use crate::client::GeminiClient;
use crate::types::GenerateContentRequest;

/// Environment variable consulted when the config carries no key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini provider implementing [`ProviderAdapter`].
pub struct GeminiProvider {
    client: GeminiClient,
    model: String,
}

impl GeminiProvider {
    /// Creates a provider from configuration.
    ///
    /// # API Key Resolution
    /// 1. `gemini.api_key` if set and non-empty
    /// 2. `GEMINI_API_KEY` environment variable
    /// 3. Neither: `Ok(None)`, meaning no remote backend is configured
    pub fn from_config(config: &GeminiConfig) -> Result<Option<Self>, FolioError> {
        let Some(api_key) = resolve_api_key(config.api_key.as_deref()) else {
            info!("no Gemini API key configured, remote completions disabled");
            return Ok(None);
        };

        let client = GeminiClient::new(&api_key, config.base_url.clone())?;
        info!(model = %config.model, "Gemini provider initialized");

        Ok(Some(Self {
            client,
            model: config.model.clone(),
        }))
    }

    /// Creates a provider around an existing client.
    pub fn with_client(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Default model used when a request leaves it blank.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl PluginAdapter for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, FolioError> {
        // Avoid spending quota on health checks.
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl ProviderAdapter for GeminiProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, FolioError> {
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model
        };
        let api_request = GenerateContentRequest::from_prompt(&request.prompt, request.max_output_tokens);
        let response = self.client.generate_content(&model, &api_request).await?;

        let text = response.text().ok_or_else(|| FolioError::Provider {
            message: format!(
                "response contained no text (finish reason: {})",
                response.finish_reason().unwrap_or_else(|| "unknown".into())
            ),
            source: None,
        })?;
        debug!(model = %model, chars = text.len(), "completion received");

        Ok(CompletionResponse {
            text,
            model: response.model_version.clone().unwrap_or(model),
            finish_reason: response.finish_reason(),
            usage: response.usage_metadata.map(|u| TokenUsage {
                prompt_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            }),
        })
    }
}

/// Resolves the API key from config, then the environment.
fn resolve_api_key(config_key: Option<&str>) -> Option<String> {
    match config_key {
        Some(key) if !key.trim().is_empty() => Some(key.to_string()),
        _ => std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty()),
    }
}
