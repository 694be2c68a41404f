// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Download collaborator invoked when a visitor accepts an offered asset.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::FolioError;
use crate::traits::adapter::PluginAdapter;
use crate::types::AssetRef;

/// Fetches a static asset and saves it for the visitor.
#[async_trait]
pub trait AssetDownloader: PluginAdapter {
    /// Saves `asset` and returns where it ended up.
    async fn download(&self, asset: &AssetRef) -> Result<PathBuf, FolioError>;
}
