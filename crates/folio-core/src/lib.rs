// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Folio portfolio assistant.
//!
//! This crate provides the error type, shared conversation and provider
//! types, and the adapter traits implemented by the provider, download and
//! mail crates.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::FolioError;
pub use types::{AdapterType, HealthStatus, Message, MessageAction, MessageId, Role};

pub use traits::{AssetDownloader, MailAdapter, PluginAdapter, ProviderAdapter};
