// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mail adapter trait for transactional email services.

use async_trait::async_trait;

use crate::error::FolioError;
use crate::traits::adapter::PluginAdapter;
use crate::types::MailRequest;

/// Adapter for sending templated email through a hosted service.
#[async_trait]
pub trait MailAdapter: PluginAdapter {
    /// Sends one templated email.
    async fn send(&self, request: MailRequest) -> Result<(), FolioError>;
}
