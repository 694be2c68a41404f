// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording mocks for the download and mail collaborators.

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use folio_core::traits::adapter::PluginAdapter;
use folio_core::traits::download::AssetDownloader;
use folio_core::traits::mail::MailAdapter;
use folio_core::types::{AdapterType, AssetRef, HealthStatus, MailRequest};
use folio_core::FolioError;

/// Downloader that records the assets it was asked for.
pub struct MockDownloader {
    target_dir: PathBuf,
    failure: Option<String>,
    requests: Mutex<Vec<AssetRef>>,
}

impl MockDownloader {
    /// Reports every asset as saved under `target_dir`.
    pub fn succeeding(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails every download with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            target_dir: PathBuf::new(),
            failure: Some(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Assets requested so far, in call order.
    pub async fn requests(&self) -> Vec<AssetRef> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl PluginAdapter for MockDownloader {
    fn name(&self) -> &str {
        "mock-downloader"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Downloader
    }

    async fn health_check(&self) -> Result<HealthStatus, FolioError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl AssetDownloader for MockDownloader {
    async fn download(&self, asset: &AssetRef) -> Result<PathBuf, FolioError> {
        self.requests.lock().await.push(asset.clone());
        match &self.failure {
            Some(message) => Err(FolioError::Download {
                message: message.clone(),
                source: None,
            }),
            None => Ok(self.target_dir.join(&asset.file_name)),
        }
    }
}

/// Mailer that records sent requests. Templates marked with
/// [`MockMailer::fail_template`] are rejected with the given status.
pub struct MockMailer {
    sent: Mutex<Vec<MailRequest>>,
    failing: Mutex<HashSet<String>>,
    failure_status: u16,
}

impl MockMailer {
    /// A mailer that accepts every request.
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            failure_status: 500,
        }
    }

    /// Status code attached to scripted failures.
    pub fn with_failure_status(mut self, status: u16) -> Self {
        self.failure_status = status;
        self
    }

    /// Makes every send for `template_id` fail.
    pub async fn fail_template(&self, template_id: impl Into<String>) {
        self.failing.lock().await.insert(template_id.into());
    }

    /// Requests that were accepted, in order.
    pub async fn sent(&self) -> Vec<MailRequest> {
        self.sent.lock().await.clone()
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockMailer {
    fn name(&self) -> &str {
        "mock-mailer"
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
impl MailAdapter for MockMailer {
    async fn send(&self, request: MailRequest) -> Result<(), FolioError> {
        if self.failing.lock().await.contains(&request.template_id) {
            return Err(FolioError::Mail {
                message: format!("template {} rejected", request.template_id),
                status: Some(self.failure_status),
                source: None,
            });
        }
        self.sent.lock().await.push(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset() -> AssetRef {
        AssetRef {
            source: PathBuf::from("public/resume.pdf"),
            file_name: "resume.pdf".into(),
        }
    }

    #[tokio::test]
    async fn downloader_records_and_joins_file_name() {
        let downloader = MockDownloader::succeeding("/tmp/downloads");
        let saved = downloader.download(&asset()).await.unwrap();
        assert_eq!(saved, PathBuf::from("/tmp/downloads/resume.pdf"));
        assert_eq!(downloader.requests().await.len(), 1);
    }

    #[tokio::test]
    async fn failing_template_is_not_recorded() {
        let mailer = MockMailer::new().with_failure_status(422);
        mailer.fail_template("auto").await;

        mailer.send(MailRequest::new("main")).await.unwrap();
        let err = mailer.send(MailRequest::new("auto")).await.err().unwrap();
        assert!(matches!(err, FolioError::Mail { status: Some(422), .. }));
        assert_eq!(mailer.sent().await.len(), 1);
    }
}
