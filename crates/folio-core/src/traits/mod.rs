// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! All adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod download;
pub mod mail;
pub mod provider;

pub use adapter::PluginAdapter;
pub use download::AssetDownloader;
pub use mail::MailAdapter;
pub use provider::ProviderAdapter;
