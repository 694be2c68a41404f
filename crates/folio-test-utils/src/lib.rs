// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Folio integration tests.
//!
//! Provides mock adapters for fast, deterministic, CI-runnable tests without
//! external services.
//!
//! # Components
//!
//! - [`MockCompletion`] - Scripted completion provider with a call counter
//! - [`MockDownloader`] - Asset downloader that records requests
//! - [`MockMailer`] - Mail adapter that records requests and can fail per template

pub mod mock_adapters;
pub mod mock_provider;

pub use mock_adapters::{MockDownloader, MockMailer};
pub use mock_provider::MockCompletion;
