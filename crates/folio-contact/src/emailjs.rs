// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! EmailJS REST sender.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use folio_config::model::ContactConfig;
use folio_core::traits::adapter::PluginAdapter;
use folio_core::traits::mail::MailAdapter;
use folio_core::types::{AdapterType, HealthStatus, MailRequest};
use folio_core::FolioError;
use serde::Serialize;
use tracing::debug;

const SEND_PATH: &str = "/api/v1.0/email/send";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<String, String>,
}

/// Sends templated mail through EmailJS.
#[derive(Debug, Clone)]
pub struct EmailJsSender {
    client: reqwest::Client,
    base_url: String,
    service_id: String,
    public_key: String,
}

impl EmailJsSender {
    /// Creates a sender for the given EmailJS account.
    pub fn new(
        base_url: impl Into<String>,
        service_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Result<Self, FolioError> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| FolioError::Mail {
                message: format!("failed to build HTTP client: {e}"),
                status: None,
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_id: service_id.into(),
            public_key: public_key.into(),
        })
    }

    /// Builds a sender from `[contact]`, failing with the names of any missing keys.
    pub fn from_config(config: &ContactConfig) -> Result<Self, FolioError> {
        ensure_configured(config)?;
        let service_id = config.service_id.as_deref().unwrap_or_default();
        let public_key = config.public_key.as_deref().unwrap_or_default();
        Self::new(&config.base_url, service_id, public_key)
    }

    /// Full URL of the send endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{SEND_PATH}", self.base_url)
    }
}

/// Required `[contact]` keys that are unset or blank.
pub fn missing_keys(config: &ContactConfig) -> Vec<&'static str> {
    let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());
    [
        ("service_id", &config.service_id),
        ("template_id", &config.template_id),
        ("public_key", &config.public_key),
    ]
    .into_iter()
    .filter(|(_, value)| blank(value))
    .map(|(key, _)| key)
    .collect()
}

/// Fails with a [`FolioError::Config`] naming every missing key.
pub fn ensure_configured(config: &ContactConfig) -> Result<(), FolioError> {
    let missing = missing_keys(config);
    if missing.is_empty() {
        return Ok(());
    }
    Err(FolioError::Config(format!(
        "contact delivery is not configured, missing: {}",
        missing.join(", ")
    )))
}

#[async_trait]
impl PluginAdapter for EmailJsSender {
    fn name(&self) -> &str {
        "emailjs"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Mailer
    }

    async fn health_check(&self) -> Result<HealthStatus, FolioError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl MailAdapter for EmailJsSender {
    async fn send(&self, request: MailRequest) -> Result<(), FolioError> {
        let body = SendBody {
            service_id: &self.service_id,
            template_id: &request.template_id,
            user_id: &self.public_key,
            template_params: &request.params,
        };

        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| FolioError::Mail {
                message: format!("HTTP request failed: {e}"),
                status: None,
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, template = %request.template_id, "mail service responded");
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        Err(FolioError::Mail {
            message: format!("mail service returned {status}: {}", text.trim()),
            status: Some(status.as_u16()),
            source: None,
        })
    }
}
