// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local-filesystem resume downloader.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::traits::adapter::PluginAdapter;
use folio_core::traits::download::AssetDownloader;
use folio_core::types::{AdapterType, AssetRef, HealthStatus};
use folio_core::FolioError;
use tracing::debug;

/// Copies assets into a target directory, by default the user's downloads folder.
pub struct FileDownloader {
    target_dir: PathBuf,
}

impl FileDownloader {
    /// Saves downloads under `target_dir`.
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    /// Targets `dirs::download_dir()`, or the working directory when the
    /// platform has none.
    pub fn to_downloads() -> Self {
        Self::new(dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Directory downloads are written to.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }
}

#[async_trait]
impl PluginAdapter for FileDownloader {
    fn name(&self) -> &str {
        "file-downloader"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Downloader
    }

    async fn health_check(&self) -> Result<HealthStatus, FolioError> {
        if self.target_dir.is_dir() {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Degraded(format!(
                "{} does not exist yet",
                self.target_dir.display()
            )))
        }
    }
}

#[async_trait]
impl AssetDownloader for FileDownloader {
    async fn download(&self, asset: &AssetRef) -> Result<PathBuf, FolioError> {
        let destination = self.target_dir.join(&asset.file_name);
        debug!(
            source = %asset.source.display(),
            destination = %destination.display(),
            "copying asset"
        );

        tokio::fs::create_dir_all(&self.target_dir)
            .await
            .map_err(|e| FolioError::Download {
                message: format!("cannot create {}: {e}", self.target_dir.display()),
                source: Some(Box::new(e)),
            })?;
        tokio::fs::copy(&asset.source, &destination)
            .await
            .map_err(|e| FolioError::Download {
                message: format!("cannot copy {}: {e}", asset.source.display()),
                source: Some(Box::new(e)),
            })?;

        Ok(destination)
    }
}
