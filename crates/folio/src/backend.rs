// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion backend selection.

use std::sync::Arc;

use folio_config::FolioConfig;
use folio_core::ProviderAdapter;
use folio_gemini::GeminiProvider;
use tracing::warn;

/// The configured completion backend, if any.
///
/// A key that cannot be used (for example one containing a newline) is
/// logged and treated like a missing key, so the assistant keeps answering
/// from canned replies.
pub fn provider(config: &FolioConfig) -> Option<Arc<dyn ProviderAdapter>> {
    match GeminiProvider::from_config(&config.gemini) {
        Ok(Some(provider)) => Some(Arc::new(provider)),
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "Gemini provider unavailable, continuing without remote completions");
            None
        }
    }
}
